//! The drawing capability the game paints through, plus a recording implementation.

/// Colors the game paints with. Backends decide the concrete values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    /// Used when no color is passed to [`DrawingSurface::fill_rect`].
    Foreground,
    GridLine,
    Snake,
    Apple,
}

/// A 2D surface that accepts filled rectangles.
pub trait DrawingSurface {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Negative widths are ignored.
    fn set_width(&mut self, width: f32);

    /// Negative heights are ignored.
    fn set_height(&mut self, height: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Option<Shade>);

    fn clear(&mut self);
}

/// One recorded `fill_rect` call, with the color already resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillCommand {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub shade: Shade,
}

/// Surface that records fill commands so a renderer can replay them later.
#[derive(Clone, Debug, Default)]
pub struct CommandBuffer {
    width: f32,
    height: f32,
    commands: Vec<FillCommand>,
}

impl CommandBuffer {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[FillCommand] {
        &self.commands
    }

    /// Commands painted with `shade`, in painting order.
    pub fn commands_with(&self, shade: Shade) -> impl Iterator<Item = &FillCommand> {
        self.commands.iter().filter(move |c| c.shade == shade)
    }
}

impl DrawingSurface for CommandBuffer {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_width(&mut self, width: f32) {
        if width < 0.0 {
            return;
        }
        self.width = width;
    }

    fn set_height(&mut self, height: f32) {
        if height < 0.0 {
            return;
        }
        self.height = height;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Option<Shade>) {
        self.commands.push(FillCommand {
            x,
            y,
            width,
            height,
            shade: color.unwrap_or(Shade::Foreground),
        });
    }

    fn clear(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_without_color_uses_foreground() {
        let mut buffer = CommandBuffer::new(100.0, 50.0);
        buffer.fill_rect(0.0, 0.0, 10.0, 10.0, None);
        buffer.fill_rect(1.0, 1.0, 2.0, 2.0, Some(Shade::Snake));
        assert_eq!(buffer.commands().len(), 2);
        assert_eq!(buffer.commands()[0].shade, Shade::Foreground);
        assert_eq!(buffer.commands_with(Shade::Snake).count(), 1);
    }

    #[test]
    fn clear_drops_recorded_commands() {
        let mut buffer = CommandBuffer::new(10.0, 10.0);
        buffer.fill_rect(0.0, 0.0, 1.0, 1.0, None);
        buffer.clear();
        assert!(buffer.commands().is_empty());
    }

    #[test]
    fn negative_dimensions_are_ignored() {
        let mut buffer = CommandBuffer::new(10.0, 20.0);
        buffer.set_width(-1.0);
        buffer.set_height(-5.0);
        assert!((buffer.width() - 10.0).abs() < f32::EPSILON);
        assert!((buffer.height() - 20.0).abs() < f32::EPSILON);
        buffer.set_width(30.0);
        assert!((buffer.width() - 30.0).abs() < f32::EPSILON);
    }
}
