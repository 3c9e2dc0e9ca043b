use iced::{
    keyboard::{self, Key},
    time::Instant,
    widget::{button, canvas, column, container, row, text},
    window, Element, Length, Subscription,
};

use crate::{
    app::Message,
    models::snake::{drawing_surface::DrawingSurface, snake_config::SnakeConfig, snake_game::GameState},
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_view_model::SnakeViewModel,
};

use super::board_canvas::BoardCanvas;

#[derive(Clone, Debug)]
pub enum SnakeGameMessage {
    /// A render callback from the window.
    Frame(Instant),
    Key(Key),
    Restart,
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(config: SnakeConfig) -> Self {
        Self {
            view_model: SnakeViewModel::new(config),
        }
    }

    fn status_line(&self) -> String {
        let game = self.view_model.game();
        match (game.state(), game.end_reason()) {
            (GameState::Ended, Some(reason)) => format!(
                "GAME OVER. The snake {reason}. Grew by {}. Press R to restart.",
                game.growth_count()
            ),
            (GameState::Paused, _) => format!(
                "Paused. Press P to play. Grew by {}.",
                game.growth_count()
            ),
            (state, _) => format!("{state}. Grew by {}.", game.growth_count()),
        }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<Message> {
        let surface = self.view_model.game().surface();
        let board = canvas(BoardCanvas::new(surface))
            .width(surface.width())
            .height(surface.height());

        let restart_button = button(text("Restart"))
            .on_press(Message::Snake(SnakeGameMessage::Restart))
            .width(80)
            .height(40);

        container(
            column![
                row![restart_button, text(self.status_line())]
                    .spacing(10)
                    .align_y(iced::alignment::Vertical::Center),
                board,
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard = keyboard::on_key_press(|key, _| {
            Some(Message::Snake(SnakeGameMessage::Key(key)))
        });
        // frames are only requested while the game runs
        if !self.view_model.game().is_running() {
            return keyboard;
        }
        let frames = window::frames()
            .map(SnakeGameMessage::Frame)
            .map(Message::Snake);
        Subscription::batch(vec![frames, keyboard])
    }
}
