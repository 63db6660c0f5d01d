//! The board: a grid of tiles plus the region grown from the top-left anchor.
//!
//! you almost certainly want to build one with `Board::seeded`, `Board::random` or by parsing
//! short color codes, then drive it with `apply_move` and the traits in `crate::types`.
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use itertools::{iproduct, Itertools};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::color::{Color, STANDARD_PALETTE, STANDARD_PALETTE_SIZE};
use crate::error::ColorfillError;
use crate::position::Position;
use crate::region::Region;
use crate::tile::Tile;

mod grow;
mod legal_moves;
mod region_queryable;
mod size_determinable;

/// The fixed cell every region is grown from
pub const ANCHOR: Position = Position::new(0, 0);

/// default board height
pub const DEFAULT_ROWS: usize = 14;
/// default board width
pub const DEFAULT_COLS: usize = 14;
/// seed used when no random source is supplied
pub const DEFAULT_SEED: u64 = 27;

/// How to generate a random board
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    #[allow(missing_docs)]
    pub rows: usize,
    #[allow(missing_docs)]
    pub cols: usize,
    /// number of colors cells are drawn from
    pub palette_size: usize,
    /// only used by `Board::seeded`
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            palette_size: STANDARD_PALETTE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// A colorfill board. Every grid cell holds exactly one tile, stored row-major, and the
/// board is the only thing that ever repaints a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    rows: usize,
    cols: usize,
    palette_size: usize,
    cells: Vec<Tile>,
    region: Region,
}

/// The persisted form of a board: row-major palette indices. The region is not stored, it is
/// regrown from the anchor when the snapshot is loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    #[allow(missing_docs)]
    pub rows: usize,
    #[allow(missing_docs)]
    pub cols: usize,
    #[serde(default = "standard_palette_size")]
    #[allow(missing_docs)]
    pub palette_size: usize,
    /// `rows` rows of `cols` color indices
    pub grid: Vec<Vec<u8>>,
}

fn standard_palette_size() -> usize {
    STANDARD_PALETTE_SIZE
}

fn check_palette_size(palette_size: usize) -> Result<(), ColorfillError> {
    if palette_size == 0 {
        return Err(ColorfillError::InvalidPalette(
            "a board needs at least one color",
        ));
    }
    if palette_size > u8::MAX as usize + 1 {
        return Err(ColorfillError::InvalidPalette(
            "a board supports at most 256 colors",
        ));
    }
    Ok(())
}

impl Board {
    /// Builds a board from `rows` rows of `cols` palette indices each. Fails if the grid
    /// doesn't have the declared shape or holds an index outside the palette.
    pub fn from_grid(
        rows: usize,
        cols: usize,
        grid: &[Vec<u8>],
        palette_size: usize,
    ) -> Result<Self, ColorfillError> {
        check_palette_size(palette_size)?;
        let bad_shape = |actual_cols: usize| ColorfillError::OutOfBoundsGridDimensions {
            expected_rows: rows,
            expected_cols: cols,
            rows: grid.len(),
            cols: actual_cols,
        };

        if rows == 0 || cols == 0 || grid.len() != rows {
            return Err(bad_shape(grid.first().map(|r| r.len()).unwrap_or(0)));
        }
        if let Some(row) = grid.iter().find(|row| row.len() != cols) {
            return Err(bad_shape(row.len()));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, col) in iproduct!(0..rows, 0..cols) {
            let color = Color::new(grid[row][col] as usize, palette_size)?;
            cells.push(Tile::new(color, Position::new(row as i32, col as i32)));
        }

        Board::assemble(rows, cols, palette_size, cells)
    }

    /// Builds a board from already constructed tiles. Every row has to hold exactly `cols`
    /// tiles and every tile has to sit at the coordinate it claims.
    pub fn from_tiles(
        rows: usize,
        cols: usize,
        tiles: Vec<Vec<Tile>>,
        palette_size: usize,
    ) -> Result<Self, ColorfillError> {
        check_palette_size(palette_size)?;
        if rows == 0 || cols == 0 || tiles.len() != rows {
            return Err(ColorfillError::OutOfBoundsGridDimensions {
                expected_rows: rows,
                expected_cols: cols,
                rows: tiles.len(),
                cols: tiles.first().map(|r| r.len()).unwrap_or(0),
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, tile_row) in tiles.into_iter().enumerate() {
            if tile_row.len() < cols {
                return Err(ColorfillError::MalformedGrid {
                    row,
                    col: tile_row.len(),
                    reason: format!("row has {} tiles, expected {}", tile_row.len(), cols),
                });
            }
            if tile_row.len() > cols {
                return Err(ColorfillError::MalformedGrid {
                    row,
                    col: cols,
                    reason: format!("row has {} tiles, expected {}", tile_row.len(), cols),
                });
            }
            for (col, tile) in tile_row.into_iter().enumerate() {
                let expected = Position::new(row as i32, col as i32);
                if tile.position() != expected {
                    return Err(ColorfillError::MalformedGrid {
                        row,
                        col,
                        reason: format!("tile claims position {}", tile.position()),
                    });
                }
                tile.color().check(palette_size)?;
                cells.push(tile);
            }
        }

        Board::assemble(rows, cols, palette_size, cells)
    }

    /// Generates a board from a caller supplied random source, which is used as is
    pub fn random(config: &BoardConfig, rng: &mut impl Rng) -> Result<Self, ColorfillError> {
        check_palette_size(config.palette_size)?;
        let grid = (0..config.rows)
            .map(|_| {
                (0..config.cols)
                    .map(|_| rng.gen_range(0..config.palette_size) as u8)
                    .collect_vec()
            })
            .collect_vec();

        Board::from_grid(config.rows, config.cols, &grid, config.palette_size)
    }

    /// Generates a board from `config.seed`. The same config always gives the same board.
    pub fn seeded(config: &BoardConfig) -> Result<Self, ColorfillError> {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        Board::random(config, &mut rng)
    }

    #[instrument(level = "trace", skip(cells))]
    fn assemble(
        rows: usize,
        cols: usize,
        palette_size: usize,
        cells: Vec<Tile>,
    ) -> Result<Self, ColorfillError> {
        debug_assert_eq!(cells.len(), rows * cols);
        let anchor = cells[0];
        let mut board = Board {
            rows,
            cols,
            palette_size,
            cells,
            region: Region::new(anchor),
        };

        // the zeroth move pulls in anything already touching the anchor in its own color
        board.apply_move(anchor.color())?;
        debug!(region_size = board.region.len(), "built board");
        Ok(board)
    }

    #[allow(missing_docs)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[allow(missing_docs)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// how many colors this board's tiles are drawn from
    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// true if the position lies on the grid
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.row >= 0 && (pos.row as usize) < self.rows && pos.col >= 0 && (pos.col as usize) < self.cols
    }

    fn cell_index(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some(pos.row as usize * self.cols + pos.col as usize)
        } else {
            None
        }
    }

    /// the tile at a position, or None if the position is off the grid
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.cell_index(pos).map(|idx| &self.cells[idx])
    }

    /// all tiles, row-major
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// the current region
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// the color index of every cell, row-major
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|t| t.color().as_u8()).collect())
            .collect()
    }

    /// 1 for every cell in the region, 0 everywhere else
    pub fn region_mask(&self) -> Vec<Vec<u8>> {
        let mut mask = vec![vec![0; self.cols]; self.rows];
        for pos in self.region.iter() {
            mask[pos.row as usize][pos.col as usize] = 1;
        }
        mask
    }

    /// a serializable copy of the grid
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.rows,
            cols: self.cols,
            palette_size: self.palette_size,
            grid: self.to_grid(),
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = ColorfillError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        Board::from_grid(
            snapshot.rows,
            snapshot.cols,
            &snapshot.grid,
            snapshot.palette_size,
        )
    }
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        board.snapshot()
    }
}

/// Parses rows of standard palette short codes, one row per line. Whitespace inside a row is
/// ignored and blank lines are skipped, so
/// ```
/// # use colorfill_game_types::board::Board;
/// let board: Board = "B B K\nB K K\nR R K".parse().unwrap();
/// assert_eq!(board.rows(), 3);
/// ```
impl FromStr for Board {
    type Err = ColorfillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| {
                        STANDARD_PALETTE
                            .by_short_name(c.encode_utf8(&mut [0; 4]))
                            .map(|color| color.as_u8())
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .filter(|row| !matches!(row, Ok(r) if r.is_empty()))
            .collect::<Result<Vec<_>, _>>()?;

        let cols = grid.first().map(|r| r.len()).unwrap_or(0);
        Board::from_grid(grid.len(), cols, &grid, STANDARD_PALETTE_SIZE)
    }
}

/// prints one row per line using short codes, marking region tiles with `*`
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|tile| {
                    let glyph = match STANDARD_PALETTE.short_name(tile.color()) {
                        Some(short) if self.palette_size <= STANDARD_PALETTE_SIZE => {
                            short.to_string()
                        }
                        _ => tile.color().as_usize().to_string(),
                    };
                    let marker = if self.region.contains(&tile.position()) {
                        "*"
                    } else {
                        " "
                    };
                    format!("{}{}", glyph, marker)
                })
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        write!(
            f,
            "(region: {} of {} tiles, color {})",
            self.region.len(),
            self.cells.len(),
            self.region.filled_color()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompletableGame, LegalMovesGame, RegionQueryableGame};

    fn color(idx: usize) -> Color {
        Color::from_index(idx).unwrap()
    }

    #[test]
    fn test_zeroth_move_absorbs_anchor_neighbors() {
        let board: Board = "BBK\nBKK\nRRK".parse().unwrap();
        assert_eq!(
            board.region().positions(),
            &[Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)]
        );
        assert_eq!(board.region().filled_color(), color(0));
    }

    #[test]
    fn test_every_cell_holds_its_own_position() {
        let board = Board::seeded(&BoardConfig::default()).unwrap();
        assert_eq!(board.tiles().len(), DEFAULT_ROWS * DEFAULT_COLS);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let pos = Position::new(row as i32, col as i32);
                assert_eq!(board.tile(pos).unwrap().position(), pos);
            }
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let config = BoardConfig {
            seed: 99,
            ..BoardConfig::default()
        };
        assert_eq!(
            Board::seeded(&config).unwrap(),
            Board::seeded(&config).unwrap()
        );
        for row in Board::seeded(&config).unwrap().to_grid() {
            assert!(row.iter().all(|c| (*c as usize) < STANDARD_PALETTE_SIZE));
        }
    }

    #[test]
    fn test_random_respects_palette_size() {
        let config = BoardConfig {
            rows: 5,
            cols: 7,
            palette_size: 3,
            seed: 0,
        };
        let mut rng = SmallRng::seed_from_u64(1234);
        let board = Board::random(&config, &mut rng).unwrap();
        assert_eq!(board.rows(), 5);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.palette_size(), 3);
        assert!(board
            .to_grid()
            .iter()
            .flatten()
            .all(|c| (*c as usize) < 3));
    }

    #[test]
    fn test_from_grid_rejects_wrong_shape() {
        let grid = vec![vec![0, 1], vec![1, 0]];
        assert!(Board::from_grid(2, 2, &grid, 6).is_ok());
        assert!(matches!(
            Board::from_grid(3, 2, &grid, 6),
            Err(ColorfillError::OutOfBoundsGridDimensions { .. })
        ));
        assert!(matches!(
            Board::from_grid(2, 2, &[vec![0, 1], vec![1]], 6),
            Err(ColorfillError::OutOfBoundsGridDimensions { cols: 1, .. })
        ));
        assert!(matches!(
            Board::from_grid(0, 0, &[], 6),
            Err(ColorfillError::OutOfBoundsGridDimensions { .. })
        ));
    }

    #[test]
    fn test_from_grid_rejects_bad_colors() {
        assert_eq!(
            Board::from_grid(1, 2, &[vec![0, 6]], 6),
            Err(ColorfillError::InvalidColorIndex {
                index: 6,
                palette_size: 6
            })
        );
        assert!(matches!(
            Board::from_grid(1, 1, &[vec![0]], 0),
            Err(ColorfillError::InvalidPalette(_))
        ));
    }

    #[test]
    fn test_from_tiles_checks_positions() {
        let tile = |c: usize, r: i32, col: i32| Tile::new(color(c), Position::new(r, col));
        let good = vec![
            vec![tile(0, 0, 0), tile(1, 0, 1)],
            vec![tile(1, 1, 0), tile(1, 1, 1)],
        ];
        let board = Board::from_tiles(2, 2, good, 6).unwrap();
        assert_eq!(board.to_grid(), vec![vec![0, 1], vec![1, 1]]);

        let swapped = vec![
            vec![tile(0, 0, 0), tile(1, 1, 0)],
            vec![tile(1, 0, 1), tile(1, 1, 1)],
        ];
        assert!(matches!(
            Board::from_tiles(2, 2, swapped, 6),
            Err(ColorfillError::MalformedGrid { row: 0, col: 1, .. })
        ));

        let missing = vec![vec![tile(0, 0, 0), tile(1, 0, 1)], vec![tile(1, 1, 0)]];
        assert!(matches!(
            Board::from_tiles(2, 2, missing, 6),
            Err(ColorfillError::MalformedGrid { row: 1, col: 1, .. })
        ));

        let too_few_rows = vec![vec![tile(0, 0, 0), tile(1, 0, 1)]];
        assert!(matches!(
            Board::from_tiles(2, 2, too_few_rows, 6),
            Err(ColorfillError::OutOfBoundsGridDimensions { .. })
        ));

        let off_palette = vec![vec![tile(5, 0, 0)]];
        assert!(matches!(
            Board::from_tiles(1, 1, off_palette, 4),
            Err(ColorfillError::InvalidColorIndex { index: 5, .. })
        ));
    }

    #[test]
    fn test_encodings() {
        let board: Board = "BBK\nBKK\nRRK".parse().unwrap();
        assert_eq!(
            board.to_grid(),
            vec![vec![0, 0, 1], vec![0, 1, 1], vec![2, 2, 1]]
        );
        assert_eq!(
            board.region_mask(),
            vec![vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let board: Board = "BBK\nBKK\nRRK".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"{"rows":3,"cols":3,"palette_size":6,"grid":[[0,0,1],[0,1,1],[2,2,1]]}"#
        );
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        let bad = r#"{"rows":2,"cols":3,"grid":[[0,0,1],[0,1,1],[2,2,1]]}"#;
        assert!(serde_json::from_str::<Board>(bad).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!(
            "BX".parse::<Board>(),
            Err(ColorfillError::UnknownColorName("X".to_string()))
        );
        assert!("BB\nB".parse::<Board>().is_err());
        assert!("".parse::<Board>().is_err());
    }

    #[test]
    fn test_single_cell_board_is_complete() {
        let board = Board::from_grid(1, 1, &[vec![4]], 6).unwrap();
        assert!(board.is_complete());
        assert_eq!(board.region_size(), 1);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_display_marks_region() {
        let board: Board = "BK\nRK".parse().unwrap();
        assert_eq!(
            board.to_string(),
            "B* K\nR  K\n(region: 1 of 4 tiles, color Blue)"
        );
    }
}
