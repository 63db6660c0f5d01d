//! various types and capability traits that are useful for working with colorfill boards
use crate::color::Color;
use crate::position::Position;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// row offset
    pub row: i64,
    /// column offset
    pub col: i64,
}

/// One of the four axis-aligned directions a neighbor can lie in. There are no diagonals in
/// colorfill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

/// the number of directions, and so the most neighbors a position can have
pub const N_DIRECTIONS: usize = 4;

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl Direction {
    /// convert this direction to a vector. rows grow downward, so `Up` is a negative row offset
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Up => Vector { row: -1, col: 0 },
            Direction::Down => Vector { row: 1, col: 0 },
            Direction::Left => Vector { row: 0, col: -1 },
            Direction::Right => Vector { row: 0, col: 1 },
        }
    }

    /// returns all directions, in the order neighbors are visited
    pub const fn all() -> [Direction; N_DIRECTIONS] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// converts this direction to a usize index. indices are the same order as `Direction::all()`
    pub fn as_index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// converts a usize index to a direction
    pub fn from_index(index: usize) -> Option<Direction> {
        Direction::all().get(index).copied()
    }
}

/// a game for which the size of the grid can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_rows(&self) -> u32;
    #[allow(missing_docs)]
    fn get_cols(&self) -> u32;

    /// the number of cells on the grid
    fn get_area(&self) -> u32 {
        self.get_rows() * self.get_cols()
    }
}

/// A game with a filled region grown from the anchor cell
pub trait RegionQueryableGame {
    /// how many tiles are currently in the region
    fn region_size(&self) -> usize;

    /// the color every region tile currently has
    fn region_color(&self) -> Color;

    /// is the given position part of the region?
    fn in_region(&self, pos: &Position) -> bool;
}

/// A game which is over once the region covers the grid
pub trait CompletableGame: RegionQueryableGame + SizeDeterminableGame {
    /// true once every cell belongs to the region
    fn is_complete(&self) -> bool {
        self.region_size() == self.get_area() as usize
    }
}

/// a game for which the moves that would absorb at least one tile can be enumerated
pub trait LegalMovesGame {
    /// colors adjacent to the region, in the order they were discovered
    fn legal_moves(&self) -> Vec<Color>;
}

/// a game that can pick a random move that absorbs something
pub trait RandomLegalMoveGame: LegalMovesGame {
    /// a uniformly chosen legal move, or None when no move absorbs anything
    fn random_legal_move(&self, rng: &mut impl Rng) -> Option<Color> {
        self.legal_moves().choose(rng).copied()
    }
}

/// a game that can pick the move absorbing the most tiles right now
pub trait GreedyMoveGame: LegalMovesGame {
    /// the legal move with the largest immediate absorption, ties going to the first discovered
    fn greedy_move(&self) -> Option<Color>;
}
