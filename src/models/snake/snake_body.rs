//! The snake's body: an arena-backed chain of segments from head to tail.

use std::collections::HashSet;

use log::debug;

use super::{
    drawing_surface::{DrawingSurface, Shade},
    position::{Direction, Position},
};

/// Number of tiles the snake is owed each time it eats.
pub const GROWTH_PER_MEAL: usize = 3;

/// Index of a segment inside the body's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SegmentId(usize);

#[derive(Clone, Debug)]
struct BodySegment {
    position: Position,
    /// Toward the tail.
    next: Option<SegmentId>,
    /// Toward the head.
    prev: Option<SegmentId>,
}

/// The chain of occupied tiles, head first.
///
/// Segments live in an arena and link to each other by index. A slot freed by
/// the tail is only handed out again by the next head insertion, so a traversal
/// never observes a recycled slot.
#[derive(Clone, Debug)]
pub struct SnakeBody {
    segments: Vec<BodySegment>,
    free: Vec<SegmentId>,
    head: SegmentId,
    tail: SegmentId,
    length: usize,
    growth_pending: usize,
    last_direction: Direction,
}

impl SnakeBody {
    /// A one-segment snake sitting on `start`, heading right.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            segments: vec![BodySegment {
                position: start,
                next: None,
                prev: None,
            }],
            free: Vec::new(),
            head: SegmentId(0),
            tail: SegmentId(0),
            length: 1,
            growth_pending: 0,
            last_direction: Direction::default(),
        }
    }

    fn node(&self, id: SegmentId) -> &BodySegment {
        &self.segments[id.0]
    }

    fn node_mut(&mut self, id: SegmentId) -> &mut BodySegment {
        &mut self.segments[id.0]
    }

    fn alloc(&mut self, segment: BodySegment) -> SegmentId {
        if let Some(id) = self.free.pop() {
            self.segments[id.0] = segment;
            id
        } else {
            self.segments.push(segment);
            SegmentId(self.segments.len() - 1)
        }
    }

    /// Defers growth: the tail stays put for the next [`GROWTH_PER_MEAL`] moves.
    pub fn eat(&mut self) {
        self.growth_pending += GROWTH_PER_MEAL;
        debug!("Snake ate. {} segments pending", self.growth_pending);
    }

    /// Advances the head one tile and returns its new position.
    ///
    /// Without a direction the snake coasts along the last commanded one. The
    /// result is not validated; bounds and self-collision are the caller's
    /// business.
    pub fn move_body(&mut self, direction: Option<Direction>) -> Position {
        let heading = direction.unwrap_or(self.last_direction);
        let new_position = self.head().step(heading);

        let old_head = self.head;
        let new_head = self.alloc(BodySegment {
            position: new_position,
            next: Some(old_head),
            prev: None,
        });
        self.node_mut(old_head).prev = Some(new_head);
        self.head = new_head;
        self.length += 1;

        if let Some(direction) = direction {
            self.last_direction = direction;
        }

        if self.growth_pending == 0 {
            self.drop_tail();
        } else {
            self.growth_pending -= 1;
        }

        new_position
    }

    fn drop_tail(&mut self) {
        let old_tail = self.tail;
        match self.node(old_tail).prev {
            Some(prev) => {
                self.node_mut(prev).next = None;
                self.tail = prev;
            }
            None => self.tail = self.head,
        }
        self.node_mut(old_tail).prev = None;
        self.free.push(old_tail);
        self.length -= 1;
    }

    /// True iff two segments share a tile.
    #[must_use]
    pub fn intersects(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.length);
        self.positions().any(|position| !seen.insert(position))
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions().any(|p| p == position)
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.node(self.head).position
    }

    #[must_use]
    pub fn tail(&self) -> Position {
        self.node(self.tail).position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Always false; a body keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub fn growth_pending(&self) -> usize {
        self.growth_pending
    }

    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Occupied tiles from head to tail.
    #[must_use]
    pub fn positions(&self) -> Positions<'_> {
        Positions {
            body: self,
            cursor: Some(self.head),
        }
    }

    /// Paints one inset square per segment.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw_on(
        &self,
        surface: &mut impl DrawingSurface,
        pixels_per_tile: f32,
        padding: f32,
        color: Option<Shade>,
    ) {
        for position in self.positions() {
            surface.fill_rect(
                position.x as f32 * pixels_per_tile + padding,
                position.y as f32 * pixels_per_tile + padding,
                pixels_per_tile - 2.0 * padding,
                pixels_per_tile - 2.0 * padding,
                color,
            );
        }
    }
}

/// Iterator over the body's tiles, following `next` links from the head.
pub struct Positions<'a> {
    body: &'a SnakeBody,
    cursor: Option<SegmentId>,
}

impl Iterator for Positions<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.body.node(self.cursor?);
        self.cursor = segment.next;
        Some(segment.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Position {
        Position::new(5, 5)
    }

    #[test]
    fn coasts_in_last_direction() {
        let mut body = SnakeBody::new(start());
        assert_eq!(body.move_body(None), Position::new(6, 5));
        assert_eq!(body.move_body(Some(Direction::Down)), Position::new(6, 6));
        for y in 7..20 {
            assert_eq!(body.move_body(None), Position::new(6, y));
            assert_eq!(body.last_direction(), Direction::Down);
        }
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), body.tail());
    }

    #[test]
    fn eating_grows_one_tile_per_move() {
        let mut body = SnakeBody::new(start());
        body.eat();
        assert_eq!(body.growth_pending(), GROWTH_PER_MEAL);
        assert_eq!(body.len(), 1);

        body.move_body(None);
        assert_eq!(body.len(), 2);
        body.move_body(None);
        assert_eq!(body.len(), 3);
        body.move_body(None);
        assert_eq!(body.len(), 4);
        assert_eq!(body.growth_pending(), 0);

        // growth is used up, length holds steady from here
        body.move_body(Some(Direction::Down));
        assert_eq!(body.len(), 4);
        assert_eq!(
            body.positions().collect::<Vec<_>>(),
            vec![
                Position::new(8, 6),
                Position::new(8, 5),
                Position::new(7, 5),
                Position::new(6, 5),
            ]
        );
        assert_eq!(body.tail(), Position::new(6, 5));
    }

    #[test]
    fn distinct_segments_do_not_intersect() {
        let mut body = SnakeBody::new(start());
        body.eat();
        body.eat();
        for direction in [Direction::Right, Direction::Right, Direction::Down, Direction::Left] {
            body.move_body(Some(direction));
            assert!(!body.intersects());
        }
    }

    #[test]
    fn turning_into_own_body_intersects() {
        let mut body = SnakeBody::new(start());
        body.eat();
        body.eat();
        for direction in [Direction::Right, Direction::Right, Direction::Down, Direction::Left] {
            body.move_body(Some(direction));
        }
        assert!(body.len() >= 4);
        let head = body.move_body(Some(Direction::Up));
        assert_eq!(head, Position::new(6, 5));
        assert!(body.intersects());
    }

    #[test]
    fn chasing_the_tail_does_not_intersect() {
        // a four-long snake circling a 2x2 square vacates each tile just in time
        let mut body = SnakeBody::new(start());
        body.eat();
        for direction in [Direction::Right, Direction::Down, Direction::Left] {
            body.move_body(Some(direction));
        }
        assert_eq!(body.len(), 4);
        body.move_body(Some(Direction::Up));
        assert!(!body.intersects());
    }

    #[test]
    fn reversing_into_the_neck_is_only_caught_by_intersection() {
        let mut body = SnakeBody::new(start());
        body.eat();
        body.move_body(Some(Direction::Right));
        let head = body.move_body(Some(Direction::Left));
        assert_eq!(head, start());
        assert!(body.intersects());
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut body = SnakeBody::new(start());
        for _ in 0..100 {
            body.move_body(None);
        }
        assert_eq!(body.len(), 1);
        assert!(body.segments.len() <= 2);
        assert_eq!(body.positions().count(), 1);
    }

    #[test]
    fn contains_checks_every_segment() {
        let mut body = SnakeBody::new(start());
        body.eat();
        body.move_body(None);
        body.move_body(None);
        assert!(body.contains(Position::new(5, 5)));
        assert!(body.contains(Position::new(7, 5)));
        assert!(!body.contains(Position::new(8, 5)));
    }
}
