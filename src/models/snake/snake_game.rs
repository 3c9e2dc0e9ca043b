//! The game controller: owns the snake, the input queue and the clock, and
//! drives them from render callbacks.
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    apple::Apple,
    drawing_surface::{DrawingSurface, Shade},
    game_clock::{ClockState, GameClock},
    game_grid::GameGrid,
    input_queue::InputQueue,
    position::{Direction, Position},
    snake_body::SnakeBody,
    snake_config::SnakeConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Startup,
    Running,
    Paused,
    Ended,
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Startup => write!(f, "Starting"),
            GameState::Running => write!(f, "Running"),
            GameState::Paused => write!(f, "Paused"),
            GameState::Ended => write!(f, "Game over"),
        }
    }
}

/// Why a game moved to [`GameState::Ended`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    OutOfBounds,
    SelfCollision,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::OutOfBounds => write!(f, "left the board"),
            EndReason::SelfCollision => write!(f, "ran into itself"),
        }
    }
}

/// What a key press asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Steer(Direction),
    Eat,
    TogglePause,
}

impl KeyCommand {
    /// Maps a key name (`"w"`, `" "`, ...) to a command. Unknown keys give `None`.
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "w" => Some(KeyCommand::Steer(Direction::Up)),
            "a" => Some(KeyCommand::Steer(Direction::Left)),
            "s" => Some(KeyCommand::Steer(Direction::Down)),
            "d" => Some(KeyCommand::Steer(Direction::Right)),
            " " => Some(KeyCommand::Eat),
            "p" => Some(KeyCommand::TogglePause),
            _ => None,
        }
    }
}

/// One session of the game, painting onto `S`.
#[derive(Debug)]
pub struct SnakeGame<S: DrawingSurface> {
    config: SnakeConfig,
    state: GameState,
    previous_state: GameState,
    clock: GameClock,
    clock_state: Option<ClockState>,
    input_queue: InputQueue,
    snake: SnakeBody,
    grid: GameGrid,
    apple: Option<Apple>,
    end_reason: Option<EndReason>,
    rng: StdRng,
    surface: S,
}

impl<S: DrawingSurface> SnakeGame<S> {
    /// Sets up a session, paints it once and leaves it paused, ready to run.
    #[must_use]
    pub fn new(config: SnakeConfig, surface: S) -> Self {
        Self::with_rng(config, surface, StdRng::from_entropy())
    }

    /// Like [`SnakeGame::new`] with a caller-supplied random source for apple placement.
    #[must_use]
    pub fn with_rng(config: SnakeConfig, mut surface: S, mut rng: StdRng) -> Self {
        surface.set_width(config.canvas_width());
        surface.set_height(config.canvas_height());

        let snake = SnakeBody::new(config.start);
        let apple = if config.apples_enabled {
            Apple::place(&mut rng, &snake, config.board_width, config.board_height)
        } else {
            None
        };
        let grid = GameGrid::new(
            config.board_width,
            config.board_height,
            config.pixels_per_tile,
            config.grid_line_width,
        );

        let mut game = Self {
            clock: GameClock::new(config.millis_per_step),
            clock_state: None,
            input_queue: InputQueue::with_limit(config.max_queued_inputs),
            state: GameState::Startup,
            previous_state: GameState::Startup,
            snake,
            grid,
            apple,
            end_reason: None,
            rng,
            surface,
            config,
        };
        debug!(
            "New snake game on a {}x{} board",
            game.config.board_width, game.config.board_height
        );

        game.paint();
        game.previous_state = GameState::Running;
        game.set_state(GameState::Paused);
        game
    }

    fn set_state(&mut self, state: GameState) {
        debug!("Game state {:?} -> {:?}", self.state, state);
        self.state = state;
        // a clock only lives for one stretch of running
        self.clock_state = None;
    }

    /// Handles one render callback at `timestamp` milliseconds.
    ///
    /// Applies the steps the clock says are due, one queued direction per
    /// step, then repaints. Returns whether another callback should be
    /// scheduled.
    pub fn render(&mut self, timestamp: f64) -> bool {
        if self.state != GameState::Running {
            return false;
        }

        let (clock_state, steps_needed) = self.clock.advance(self.clock_state.take(), timestamp);
        self.clock_state = Some(clock_state);
        if steps_needed > 1 {
            debug!("Catching up {steps_needed} steps");
        }

        for _ in 0..steps_needed {
            let direction = self.input_queue.pop_front();
            if let Some(reason) = self.step(direction) {
                info!(
                    "Game over: snake {reason} at {}. Grew by {}",
                    self.snake.head(),
                    self.growth_count()
                );
                self.end_reason = Some(reason);
                self.set_state(GameState::Ended);
                break;
            }
        }

        self.paint();
        self.state == GameState::Running
    }

    fn step(&mut self, direction: Option<Direction>) -> Option<EndReason> {
        let head = self.snake.move_body(direction);
        if !head.is_within(self.config.board_width, self.config.board_height) {
            return Some(EndReason::OutOfBounds);
        }
        if self.snake.intersects() {
            return Some(EndReason::SelfCollision);
        }
        if self.apple.is_some_and(|apple| apple.position() == head) {
            self.snake.eat();
            self.apple = Apple::place(
                &mut self.rng,
                &self.snake,
                self.config.board_width,
                self.config.board_height,
            );
        }
        None
    }

    /// Clears the surface and paints the board, apple and snake.
    pub fn paint(&mut self) {
        let pixels_per_tile = self.config.pixels_per_tile;
        let padding = self.config.grid_line_width;
        let surface = &mut self.surface;

        surface.clear();
        let (width, height) = (surface.width(), surface.height());
        surface.fill_rect(0.0, 0.0, width, height, None);
        self.grid.draw_on(surface, Some(Shade::GridLine));
        if let Some(apple) = &self.apple {
            apple.draw_on(surface, pixels_per_tile, padding, Some(Shade::Apple));
        }
        self.snake
            .draw_on(surface, pixels_per_tile, padding, Some(Shade::Snake));
    }

    /// Queues a direction for a future step. Returns false if the queue dropped it.
    pub fn push_direction(&mut self, direction: Direction) -> bool {
        self.input_queue.push(direction)
    }

    pub fn eat(&mut self) {
        self.snake.eat();
    }

    /// Pauses, or resumes whatever state was active before the pause.
    /// An ended game stays ended.
    pub fn toggle_paused(&mut self) {
        match self.state {
            GameState::Paused => self.set_state(self.previous_state),
            GameState::Ended => debug!("Ignoring pause toggle after game over"),
            current => {
                self.previous_state = current;
                self.set_state(GameState::Paused);
            }
        }
    }

    pub fn handle_command(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Steer(direction) => {
                self.push_direction(direction);
            }
            KeyCommand::Eat => self.eat(),
            KeyCommand::TogglePause => self.toggle_paused(),
        }
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Tiles grown since the start of the session.
    #[must_use]
    pub fn growth_count(&self) -> usize {
        self.snake.len() - 1
    }

    #[must_use]
    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    #[must_use]
    pub fn apple(&self) -> Option<&Apple> {
        self.apple.as_ref()
    }

    #[must_use]
    pub fn queued_inputs(&self) -> usize {
        self.input_queue.len()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
