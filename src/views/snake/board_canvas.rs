//! Replays a recorded [`CommandBuffer`] onto an iced canvas.
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry},
    Color, Point, Rectangle, Renderer, Size, Theme,
};

use crate::models::snake::drawing_surface::{CommandBuffer, Shade};

#[derive(Debug)]
pub struct BoardCanvas<'a> {
    buffer: &'a CommandBuffer,
}

impl<'a> BoardCanvas<'a> {
    #[must_use]
    pub fn new(buffer: &'a CommandBuffer) -> Self {
        Self { buffer }
    }
}

#[must_use]
pub fn shade_color(shade: Shade) -> Color {
    match shade {
        Shade::Foreground => Color::BLACK,
        Shade::GridLine => Color::from_rgb(0.83, 0.83, 0.83),
        Shade::Snake => Color::from_rgb(0.0, 0.5, 0.0),
        Shade::Apple => Color::from_rgb(1.0, 0.0, 0.0),
    }
}

impl<Message> canvas::Program<Message> for BoardCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for command in self.buffer.commands() {
            frame.fill_rectangle(
                Point::new(command.x, command.y),
                Size::new(command.width, command.height),
                shade_color(command.shade),
            );
        }
        vec![frame.into_geometry()]
    }
}
