use iced::{
    keyboard::{key::Named, Key},
    time::Instant,
};
use log::{debug, info};

use crate::{
    app::Message,
    models::snake::{
        drawing_surface::CommandBuffer,
        position::Direction,
        snake_config::SnakeConfig,
        snake_game::{KeyCommand, SnakeGame},
    },
    view_model::ViewModel,
    views::snake::snake_game_screen::SnakeGameMessage,
};

/// Owns the running session and feeds it frames and key presses.
#[derive(Debug)]
pub struct SnakeViewModel {
    config: SnakeConfig,
    game: SnakeGame<CommandBuffer>,
    /// Frame timestamps are measured from here.
    epoch: Instant,
}

impl SnakeViewModel {
    #[must_use]
    pub fn new(config: SnakeConfig) -> Self {
        Self {
            game: SnakeGame::new(config.clone(), CommandBuffer::default()),
            config,
            epoch: Instant::now(),
        }
    }

    #[must_use]
    pub fn game(&self) -> &SnakeGame<CommandBuffer> {
        &self.game
    }

    fn restart(&mut self) {
        info!("Starting a new session");
        self.game = SnakeGame::new(self.config.clone(), CommandBuffer::default());
        self.epoch = Instant::now();
    }

    fn timestamp(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.epoch).as_secs_f64() * 1000.0
    }

    /// Keys the game understands. Arrow keys and upper case letters are
    /// accepted alongside w/a/s/d.
    #[must_use]
    pub fn command_for(key: &Key) -> Option<KeyCommand> {
        match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Some(KeyCommand::Steer(Direction::Up)),
                Named::ArrowDown => Some(KeyCommand::Steer(Direction::Down)),
                Named::ArrowLeft => Some(KeyCommand::Steer(Direction::Left)),
                Named::ArrowRight => Some(KeyCommand::Steer(Direction::Right)),
                Named::Space => Some(KeyCommand::Eat),
                _ => None,
            },
            Key::Character(c) => KeyCommand::from_key_name(&c.as_str().to_ascii_lowercase()),
            Key::Unidentified => None,
        }
    }

    fn is_restart_key(key: &Key) -> bool {
        matches!(key, Key::Character(c) if c.as_str().eq_ignore_ascii_case("r"))
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        let Message::Snake(message) = message;
        match message {
            SnakeGameMessage::Frame(now) => {
                let timestamp = self.timestamp(now);
                if !self.game.render(timestamp) {
                    debug!("Frame at {timestamp:.1}ms left the game {}", self.game.state());
                }
                None
            }
            SnakeGameMessage::Key(key) => {
                if Self::is_restart_key(&key) {
                    return Some(Message::Snake(SnakeGameMessage::Restart));
                }
                if let Some(command) = Self::command_for(&key) {
                    self.game.handle_command(command);
                }
                None
            }
            SnakeGameMessage::Restart => {
                self.restart();
                None
            }
        }
    }
}
