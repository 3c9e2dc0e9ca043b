//! Numeric configuration handed to the game: board geometry and timing.
use super::position::Position;

/// Game time per step.
pub const MILLIS_PER_STEP: u64 = 150;
/// Side length of a tile in pixels.
pub const PIXELS_PER_TILE: f32 = 25.0;
/// Thickness of the grid lines, also used to inset painted tiles.
pub const GRID_LINE_WIDTH: f32 = 1.0;
/// Outer board size. The outermost ring is border, leaving 31x31 playable tiles.
pub const GAME_BOARD_SIZE: i32 = 33;
/// Tile the snake spawns on.
pub const START_POSITION: Position = Position::new(5, 5);

/// Smallest board accepted by [`SnakeConfig::new`].
pub const MIN_BOARD_SIZE: i32 = 5;
/// Largest board accepted by [`SnakeConfig::new`].
pub const MAX_BOARD_SIZE: i32 = 64;

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBoardSize,
    StartOutOfBounds,
    ZeroStepDuration,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBoardSize => write!(
                f,
                "board dimensions must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE} tiles"
            ),
            ConfigError::StartOutOfBounds => write!(f, "start tile is outside the board"),
            ConfigError::ZeroStepDuration => write!(f, "step duration must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeConfig {
    pub pixels_per_tile: f32,
    pub grid_line_width: f32,
    /// Playable width in tiles.
    pub board_width: i32,
    /// Playable height in tiles.
    pub board_height: i32,
    pub millis_per_step: u64,
    pub start: Position,
    /// `None` keeps the input queue unbounded.
    pub max_queued_inputs: Option<usize>,
    pub apples_enabled: bool,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            pixels_per_tile: PIXELS_PER_TILE,
            grid_line_width: GRID_LINE_WIDTH,
            board_width: GAME_BOARD_SIZE - 2,
            board_height: GAME_BOARD_SIZE - 2,
            millis_per_step: MILLIS_PER_STEP,
            start: START_POSITION,
            max_queued_inputs: None,
            apples_enabled: true,
        }
    }
}

impl SnakeConfig {
    /// A default configuration with a `board_width` x `board_height` playable area.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either dimension is out of range or the
    /// default start tile does not fit.
    pub fn new(board_width: i32, board_height: i32) -> Result<Self> {
        let range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        if !range.contains(&board_width) || !range.contains(&board_height) {
            return Err(ConfigError::InvalidBoardSize);
        }
        Self {
            board_width,
            board_height,
            ..Self::default()
        }
        .with_start(START_POSITION)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::StartOutOfBounds`] if `start` is off the board.
    pub fn with_start(mut self, start: Position) -> Result<Self> {
        if !start.is_within(self.board_width, self.board_height) {
            return Err(ConfigError::StartOutOfBounds);
        }
        self.start = start;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroStepDuration`] for a zero duration.
    pub fn with_millis_per_step(mut self, millis_per_step: u64) -> Result<Self> {
        if millis_per_step == 0 {
            return Err(ConfigError::ZeroStepDuration);
        }
        self.millis_per_step = millis_per_step;
        Ok(self)
    }

    #[must_use]
    pub fn with_max_queued_inputs(mut self, limit: Option<usize>) -> Self {
        self.max_queued_inputs = limit;
        self
    }

    #[must_use]
    pub fn with_apples(mut self, enabled: bool) -> Self {
        self.apples_enabled = enabled;
        self
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn canvas_width(&self) -> f32 {
        self.board_width as f32 * self.pixels_per_tile
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn canvas_height(&self) -> f32 {
        self.board_height as f32 * self.pixels_per_tile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_board() {
        let config = SnakeConfig::default();
        assert_eq!(config.board_width, 31);
        assert_eq!(config.board_height, 31);
        assert_eq!(config.millis_per_step, 150);
        assert_eq!(config.start, Position::new(5, 5));
        assert!((config.canvas_width() - 775.0).abs() < f32::EPSILON);
        assert!(config.max_queued_inputs.is_none());
    }

    #[test]
    fn rejects_bad_board_sizes() {
        assert_eq!(SnakeConfig::new(0, 10), Err(ConfigError::InvalidBoardSize));
        assert_eq!(
            SnakeConfig::new(10, MAX_BOARD_SIZE + 1),
            Err(ConfigError::InvalidBoardSize)
        );
        assert!(SnakeConfig::new(10, 10).is_ok());
    }

    #[test]
    fn start_must_be_on_the_board() {
        let config = SnakeConfig::new(10, 10).unwrap();
        assert_eq!(
            config.clone().with_start(Position::new(10, 0)),
            Err(ConfigError::StartOutOfBounds)
        );
        assert_eq!(
            config.with_start(Position::new(9, 9)).unwrap().start,
            Position::new(9, 9)
        );
    }

    #[test]
    fn zero_step_duration_is_rejected() {
        let config = SnakeConfig::default();
        assert_eq!(
            config.clone().with_millis_per_step(0),
            Err(ConfigError::ZeroStepDuration)
        );
        assert_eq!(config.with_millis_per_step(100).unwrap().millis_per_step, 100);
    }

    #[test]
    fn errors_display() {
        assert_eq!(
            ConfigError::StartOutOfBounds.to_string(),
            "start tile is outside the board"
        );
    }
}
