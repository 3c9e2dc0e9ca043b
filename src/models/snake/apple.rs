//! Food placed on a random free tile.
use log::warn;
use rand::Rng;

use super::{
    drawing_surface::{DrawingSurface, Shade},
    position::Position,
    snake_body::SnakeBody,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Apple {
    position: Position,
}

impl Apple {
    /// Picks a uniformly random tile of the board that the snake does not cover.
    ///
    /// Returns `None` when the snake already fills the board.
    pub fn place<R: Rng + ?Sized>(
        rng: &mut R,
        snake: &SnakeBody,
        width: i32,
        height: i32,
    ) -> Option<Self> {
        let tiles = usize::try_from(width.max(0)).unwrap_or(0)
            * usize::try_from(height.max(0)).unwrap_or(0);
        if snake.len() >= tiles {
            warn!("No where left to place an apple");
            return None;
        }
        loop {
            let position = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));
            if !snake.contains(position) {
                return Some(Self { position });
            }
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn draw_on(
        &self,
        surface: &mut impl DrawingSurface,
        pixels_per_tile: f32,
        padding: f32,
        color: Option<Shade>,
    ) {
        surface.fill_rect(
            self.position.x as f32 * pixels_per_tile + padding,
            self.position.y as f32 * pixels_per_tile + padding,
            pixels_per_tile - 2.0 * padding,
            pixels_per_tile - 2.0 * padding,
            color,
        );
    }
}

#[cfg(test)]
pub(crate) fn apple_at(position: Position) -> Apple {
    Apple { position }
}
