//! Fixed-step clock turning render timestamps into a count of game steps.
use log::debug;

/// Elapsed game time since the clock was (re)started.
///
/// Created by the first [`GameClock::advance`] after entering the running
/// state and thrown away whenever the game leaves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockState {
    /// Whole milliseconds of game time accumulated so far.
    pub accumulated_game_time: i64,
    /// Timestamp of the last render callback, in milliseconds.
    pub last_render_timestamp: f64,
    pub steps_taken_so_far: i64,
}

impl ClockState {
    fn starting_at(timestamp: f64) -> Self {
        Self {
            accumulated_game_time: 0,
            last_render_timestamp: timestamp,
            steps_taken_so_far: 0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GameClock {
    millis_per_step: i64,
}

impl GameClock {
    /// A clock that emits one step every `millis_per_step` milliseconds.
    /// A zero duration is treated as one millisecond.
    #[must_use]
    pub fn new(millis_per_step: u64) -> Self {
        Self {
            millis_per_step: i64::try_from(millis_per_step).unwrap_or(i64::MAX).max(1),
        }
    }

    /// Folds the render timestamp `timestamp` (ms) into `state`.
    ///
    /// Returns the updated state and how many steps must be applied before the
    /// next repaint. The first call after a reset (`state == None`) only
    /// records the timestamp and emits nothing.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&self, state: Option<ClockState>, timestamp: f64) -> (ClockState, u64) {
        let Some(state) = state else {
            debug!("Clock started at {timestamp:.1}ms");
            return (ClockState::starting_at(timestamp), 0);
        };

        let delta = (timestamp - state.last_render_timestamp).round() as i64;
        let accumulated_game_time = state.accumulated_game_time + delta;
        let total_steps = accumulated_game_time.div_euclid(self.millis_per_step);
        let steps_needed = u64::try_from(total_steps - state.steps_taken_so_far).unwrap_or(0);

        (
            ClockState {
                accumulated_game_time,
                last_render_timestamp: timestamp,
                steps_taken_so_far: total_steps,
            },
            steps_needed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(clock: &GameClock, timestamps: &[f64]) -> Vec<u64> {
        let mut state = None;
        timestamps
            .iter()
            .map(|&ts| {
                let (next, steps) = clock.advance(state, ts);
                state = Some(next);
                steps
            })
            .collect()
    }

    #[test]
    fn first_callback_emits_nothing() {
        let clock = GameClock::new(150);
        let (state, steps) = clock.advance(None, 12_345.0);
        assert_eq!(steps, 0);
        assert_eq!(state.accumulated_game_time, 0);
        assert_eq!(state.steps_taken_so_far, 0);
    }

    #[test]
    fn one_second_is_six_steps() {
        let clock = GameClock::new(150);
        assert_eq!(run(&clock, &[0.0, 1000.0]), vec![0, 6]);
    }

    #[test]
    fn slow_frames_catch_up() {
        let clock = GameClock::new(150);
        assert_eq!(run(&clock, &[0.0, 50.0, 100.0, 400.0]), vec![0, 0, 0, 2]);
    }

    #[test]
    fn fast_frames_mostly_emit_zero() {
        let clock = GameClock::new(150);
        let timestamps: Vec<f64> = (0..=60_i32).map(|i| f64::from(i) * 16.0).collect();
        let steps = run(&clock, &timestamps);
        assert!(steps.iter().all(|&s| s <= 1));
        // 960ms of game time
        assert_eq!(steps.iter().sum::<u64>(), 6);
    }

    #[test]
    fn deltas_are_rounded() {
        let clock = GameClock::new(150);
        assert_eq!(run(&clock, &[0.4, 150.6]), vec![0, 1]);
        assert_eq!(run(&clock, &[0.0, 149.4]), vec![0, 0]);
    }

    #[test]
    fn total_steps_never_drift() {
        let clock = GameClock::new(150);
        let timestamps = [0.0, 33.3, 70.1, 151.0, 299.9, 300.2, 901.0, 1_050.0];
        let steps = run(&clock, &timestamps);
        assert_eq!(steps.iter().sum::<u64>(), 7);
    }
}
