//! Tile coordinates and movement directions.

/// A tile on the board. `x` grows to the right, `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The tile one step away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.value();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether this tile lies inside a `width` x `height` board anchored at the origin.
    #[must_use]
    pub fn is_within(self, width: i32, height: i32) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction the snake can be steered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Offset as `(dx, dy)`.
    #[must_use]
    pub fn value(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_offsets_by_one_tile() {
        let origin = Position::new(5, 5);
        assert_eq!(origin.step(Direction::Up), Position::new(5, 4));
        assert_eq!(origin.step(Direction::Down), Position::new(5, 6));
        assert_eq!(origin.step(Direction::Left), Position::new(4, 5));
        assert_eq!(origin.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Position::new(0, 0).is_within(10, 10));
        assert!(Position::new(9, 9).is_within(10, 10));
        assert!(!Position::new(10, 5).is_within(10, 10));
        assert!(!Position::new(5, -1).is_within(10, 10));
    }

    #[test]
    fn default_direction_is_right() {
        assert_eq!(Direction::default(), Direction::Right);
    }
}
