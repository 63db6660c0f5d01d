//! a single grid cell
use crate::color::Color;
use crate::position::Position;
use crate::types::N_DIRECTIONS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of a board. The position never changes once the tile is placed, only the color
/// does, and only the board is allowed to change it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    color: Color,
    position: Position,
}

impl Tile {
    #[allow(missing_docs)]
    pub fn new(color: Color, position: Position) -> Self {
        Tile { color, position }
    }

    #[allow(missing_docs)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[allow(missing_docs)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// positions of the four cells around this one, on or off the grid
    pub fn neighbors(&self) -> [Position; N_DIRECTIONS] {
        self.position.neighbors()
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// formats as `Color@(row,col)`, e.g. `Red@(0,1)`
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.color, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_needs_color_and_position() {
        let red = Color::from_index(2).unwrap();
        let blue = Color::from_index(0).unwrap();
        let a = Tile::new(red, Position::new(0, 1));
        assert_eq!(a, Tile::new(red, Position::new(0, 1)));
        assert_ne!(a, Tile::new(blue, Position::new(0, 1)));
        assert_ne!(a, Tile::new(red, Position::new(1, 0)));
    }

    #[test]
    fn test_recolor_keeps_position() {
        let mut t = Tile::new(Color::from_index(2).unwrap(), Position::new(4, 4));
        t.set_color(Color::from_index(5).unwrap());
        assert_eq!(t.position(), Position::new(4, 4));
        assert_eq!(t.to_string(), "White@(4,4)");
    }
}
