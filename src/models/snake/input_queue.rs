//! FIFO buffer of directions waiting to be applied, one per step.
use std::collections::VecDeque;

use log::debug;

use super::position::Direction;

#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<Direction>,
    limit: Option<usize>,
}

impl InputQueue {
    /// An unbounded queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue that refuses new directions once `limit` are pending.
    /// `None` leaves it unbounded.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            pending: limit.map_or_else(VecDeque::new, VecDeque::with_capacity),
            limit,
        }
    }

    /// Queues `direction`. Returns false if the queue is full and the input was dropped.
    pub fn push(&mut self, direction: Direction) -> bool {
        if self.limit.is_some_and(|limit| self.pending.len() >= limit) {
            debug!("Input queue full, dropping {:?}", direction);
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    pub fn pop_front(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
