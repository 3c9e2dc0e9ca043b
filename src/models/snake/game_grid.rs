//! Grid lines drawn between the board's tiles.
use super::drawing_surface::{DrawingSurface, Shade};

#[derive(Clone, Debug)]
pub struct GameGrid {
    columns: i32,
    rows: i32,
    pixels_per_tile: f32,
    line_width: f32,
}

impl GameGrid {
    #[must_use]
    pub fn new(columns: i32, rows: i32, pixels_per_tile: f32, line_width: f32) -> Self {
        Self {
            columns,
            rows,
            pixels_per_tile,
            line_width,
        }
    }

    /// Paints a line on both edges of every row and column.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw_on(&self, surface: &mut impl DrawingSurface, color: Option<Shade>) {
        let width = self.columns as f32 * self.pixels_per_tile;
        let height = self.rows as f32 * self.pixels_per_tile;

        for i in 0..self.rows {
            let top = i as f32 * self.pixels_per_tile;
            surface.fill_rect(0.0, top, width, self.line_width, color);
            surface.fill_rect(
                0.0,
                top + self.pixels_per_tile - self.line_width,
                width,
                self.line_width,
                color,
            );
        }
        for j in 0..self.columns {
            let left = j as f32 * self.pixels_per_tile;
            surface.fill_rect(left, 0.0, self.line_width, height, color);
            surface.fill_rect(
                left + self.pixels_per_tile - self.line_width,
                0.0,
                self.line_width,
                height,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snake::drawing_surface::CommandBuffer;

    #[test]
    fn two_lines_per_row_and_column() {
        let grid = GameGrid::new(4, 3, 10.0, 1.0);
        let mut surface = CommandBuffer::new(40.0, 30.0);
        grid.draw_on(&mut surface, Some(Shade::GridLine));
        assert_eq!(surface.commands_with(Shade::GridLine).count(), 2 * 3 + 2 * 4);

        let last = surface.commands().last().unwrap();
        assert!((last.x - 39.0).abs() < f32::EPSILON);
        assert!((last.height - 30.0).abs() < f32::EPSILON);
    }
}
