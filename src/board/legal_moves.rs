use std::cmp::Reverse;

use tracing::trace;

use crate::color::Color;
use crate::types::{GreedyMoveGame, LegalMovesGame, RandomLegalMoveGame};

use super::Board;

impl LegalMovesGame for Board {
    /// One pass over the region's border: every on-grid neighbor with a color other than the
    /// fill color is a legal move. Stops early once `palette_size - 1` colors are found, since
    /// that is every color there is besides the fill.
    fn legal_moves(&self) -> Vec<Color> {
        let fill = self.region.filled_color();
        let most = self.palette_size.saturating_sub(1);
        let mut moves = Vec::with_capacity(most);
        if most == 0 {
            return moves;
        }

        'region: for pos in self.region.iter() {
            for neighbor in pos.neighbors() {
                let neighbor_color = match self.tile(neighbor) {
                    Some(tile) => tile.color(),
                    None => continue,
                };
                if neighbor_color != fill && !moves.contains(&neighbor_color) {
                    moves.push(neighbor_color);
                    if moves.len() == most {
                        break 'region;
                    }
                }
            }
        }

        trace!(?moves, "legal moves");
        moves
    }
}

impl RandomLegalMoveGame for Board {}

impl GreedyMoveGame for Board {
    fn greedy_move(&self) -> Option<Color> {
        self.legal_moves()
            .into_iter()
            .map(|color| (color, self.grow_region(color).len()))
            // min_by_key keeps the first of equal keys, max_by_key would keep the last
            .min_by_key(|(_, size)| Reverse(*size))
            .map(|(color, _)| color)
    }
}
