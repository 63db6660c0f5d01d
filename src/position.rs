//! grid coordinates
use crate::types::{Direction, Vector, N_DIRECTIONS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The location of a tile. `(0,0)` is the top-left cell, rows grow downward and columns grow
/// rightward. Positions may lie off the grid, it is up to the board to check.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// row, counted from the top
    pub row: i32,
    /// column, counted from the left
    pub col: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    #[allow(missing_docs)]
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            row: (self.row as i64 + v.row) as i32,
            col: (self.col as i64 + v.col) as i32,
        }
    }

    /// the neighboring position in the given direction
    pub fn step(&self, direction: Direction) -> Position {
        self.add_vec(direction.to_vector())
    }

    #[allow(missing_docs)]
    pub fn above(&self) -> Position {
        self.step(Direction::Up)
    }

    #[allow(missing_docs)]
    pub fn below(&self) -> Position {
        self.step(Direction::Down)
    }

    #[allow(missing_docs)]
    pub fn left(&self) -> Position {
        self.step(Direction::Left)
    }

    #[allow(missing_docs)]
    pub fn right(&self) -> Position {
        self.step(Direction::Right)
    }

    /// the four axis-aligned neighbors in `Direction::all()` order
    pub fn neighbors(&self) -> [Position; N_DIRECTIONS] {
        Direction::all().map(|d| self.step(d))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        let p = Position::new(3, 5);
        assert_eq!(
            p.neighbors(),
            [
                Position::new(2, 5),
                Position::new(4, 5),
                Position::new(3, 4),
                Position::new(3, 6)
            ]
        );
        assert_eq!(p.above().below(), p);
        assert_eq!(p.left().right(), p);
    }

    #[test]
    fn test_neighbors_can_leave_the_grid() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.above(), Position::new(-1, 0));
        assert_eq!(origin.left(), Position::new(0, -1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(0, 1).to_string(), "(0,1)");
    }
}
