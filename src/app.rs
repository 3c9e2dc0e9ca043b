use iced::{Element, Subscription};

use crate::{
    models::snake::snake_config::SnakeConfig,
    view::View,
    views::snake::snake_game_screen::{SnakeGameMessage, SnakeGameScreen},
};

pub struct State {
    screen: SnakeGameScreen,
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeGameMessage),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SnakeConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SnakeConfig) -> Self {
        Self {
            screen: SnakeGameScreen::new(config),
        }
    }

    pub fn update(state: &mut State, message: Message) {
        let mut next = Some(message);
        // screens answer with at most a short chain of follow-up messages
        while let Some(message) = next {
            next = state.screen.update(message);
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
