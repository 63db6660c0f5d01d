//! the error type shared by every fallible operation in this crate

use thiserror::Error;

/// Everything that can go wrong when building or playing a colorfill board.
///
/// None of these are transient: the core does no I/O, so an error always
/// means the caller handed us bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorfillError {
    /// a color index outside `[0, palette_size)`
    #[error("color index {index} is outside the palette of {palette_size} colors")]
    InvalidColorIndex {
        /// the rejected index
        index: usize,
        /// size of the palette it was checked against
        palette_size: usize,
    },

    /// the supplied grid does not have the declared shape
    #[error("grid is {rows}x{cols} but {expected_rows}x{expected_cols} was declared")]
    OutOfBoundsGridDimensions {
        /// declared rows
        expected_rows: usize,
        /// declared columns
        expected_cols: usize,
        /// rows actually supplied
        rows: usize,
        /// columns actually supplied (of the first offending row)
        cols: usize,
    },

    /// a tile grid with a missing cell or a tile stored at the wrong coordinate
    #[error("malformed grid at ({row},{col}): {reason}")]
    MalformedGrid {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        col: usize,
        /// what was wrong with the cell
        reason: String,
    },

    /// neither a full color name nor a short code in the palette
    #[error("unknown color name '{0}'")]
    UnknownColorName(String),

    /// a palette that cannot be used to build a board
    #[error("invalid palette: {0}")]
    InvalidPalette(&'static str),

    /// a move was requested after the game already ended
    #[error("the game is over after {moves_made} moves")]
    GameOver {
        #[allow(missing_docs)]
        moves_made: u32,
    },
}
