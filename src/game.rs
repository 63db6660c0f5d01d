//! a single playthrough: a board plus the move counter, move limit and score that go with it
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, BoardConfig};
use crate::color::Color;
use crate::error::ColorfillError;
use crate::score::ScoreSheet;
use crate::types::{CompletableGame, RegionQueryableGame};

/// default move limit for a game
pub const DEFAULT_MAX_MOVES: u32 = 25;

/// Everything needed to start a game. Missing fields fall back to their defaults when
/// deserializing, so `{}` is a valid config.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    #[allow(missing_docs)]
    pub board: BoardConfig,
    /// the game ends after this many moves even if the board isn't filled. None means no limit
    pub max_moves: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board: BoardConfig::default(),
            max_moves: Some(DEFAULT_MAX_MOVES),
        }
    }
}

/// What a single call to `Game::play` did
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// the color played
    pub color: Color,
    /// tiles added to the region by this move
    pub absorbed: u32,
    /// region size after the move
    pub region_size: usize,
    /// points scored by this move
    pub points: i64,
    /// true if this move ended the game
    pub is_over: bool,
}

/// One playthrough of a board. Discard it and build a new one for the next game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    max_moves: Option<u32>,
    moves_made: u32,
    history: Vec<Color>,
    score_sheet: ScoreSheet,
}

impl Game {
    /// starts a game on the board generated from `config.board.seed`
    pub fn new(config: &GameConfig) -> Result<Self, ColorfillError> {
        let board = Board::seeded(&config.board)?;
        Ok(Game::from_board(board, config.max_moves))
    }

    /// starts a game on a board generated from the given random source
    pub fn with_rng(config: &GameConfig, rng: &mut impl Rng) -> Result<Self, ColorfillError> {
        let board = Board::random(&config.board, rng)?;
        Ok(Game::from_board(board, config.max_moves))
    }

    /// starts a game on an existing board
    pub fn from_board(board: Board, max_moves: Option<u32>) -> Self {
        Game {
            board,
            max_moves,
            moves_made: 0,
            history: vec![],
            score_sheet: ScoreSheet::new(),
        }
    }

    /// Plays a color and scores it. Every accepted move counts against the move limit, even one
    /// that absorbs nothing. Fails without changing anything if the color is outside the palette
    /// or the game is already over.
    pub fn play(&mut self, color: Color) -> Result<MoveReport, ColorfillError> {
        if self.is_over() {
            return Err(ColorfillError::GameOver {
                moves_made: self.moves_made,
            });
        }

        let before = self.board.region_size();
        self.board.apply_move(color)?;
        self.moves_made += 1;
        self.history.push(color);

        let region_size = self.board.region_size();
        let absorbed = (region_size - before) as u32;
        let is_over = self.is_over();
        let points = self.score_sheet.record(absorbed, is_over);
        debug!(
            move_number = self.moves_made,
            %color,
            absorbed,
            points,
            "played move"
        );
        if is_over {
            info!(
                moves = self.moves_made,
                complete = self.board.is_complete(),
                score = self.score_sheet.total(),
                "game over"
            );
        }

        Ok(MoveReport {
            color,
            absorbed,
            region_size,
            points,
            is_over,
        })
    }

    /// the board is filled or the move limit is used up
    pub fn is_over(&self) -> bool {
        self.board.is_complete() || self.max_moves.map_or(false, |max| self.moves_made >= max)
    }

    #[allow(missing_docs)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[allow(missing_docs)]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    #[allow(missing_docs)]
    pub fn max_moves(&self) -> Option<u32> {
        self.max_moves
    }

    /// colors played so far, in order
    pub fn history(&self) -> &[Color] {
        &self.history
    }

    #[allow(missing_docs)]
    pub fn score_sheet(&self) -> &ScoreSheet {
        &self.score_sheet
    }
}
