#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for playing colorfill, the flood-fill tile game.
//! A board is a grid of colored tiles with a region grown from the top-left cell. Every move
//! picks a color, the region absorbs every connected tile of that color, and the game is won
//! once the region covers the grid.
//!
//! you will likely be most interested in the [board::Board] type, which implements the traits
//! in [types] that a search or learning agent needs, and in [game::Game] if you want move limits
//! and scoring on top.
//! ```
//! use colorfill_game_types::board::Board;
//! use colorfill_game_types::types::{CompletableGame, GreedyMoveGame, LegalMovesGame};
//!
//! let mut board: Board = "BBK\nBKK\nRRK".parse().unwrap();
//! assert_eq!(board.legal_moves().len(), 2);
//! while let Some(mv) = board.greedy_move() {
//!     board.apply_move(mv).unwrap();
//! }
//! assert!(board.is_complete());
//! ```

use board::Board;

pub mod board;
pub mod color;
pub mod error;
pub mod game;
pub mod position;
pub mod region;
pub mod score;
pub mod tile;
pub mod types;

/// Loads a board fixture from a json snapshot string
pub fn board_fixture(board_fixture: &str) -> Board {
    let b: Result<Board, _> = serde_json::from_str(board_fixture);
    b.expect("the json literal is valid")
}
