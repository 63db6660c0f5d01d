use std::collections::VecDeque;

use tracing::{debug, instrument, trace};

use crate::color::Color;
use crate::error::ColorfillError;
use crate::position::Position;
use crate::region::Region;

use super::Board;

impl Board {
    /// Grows a copy of the current region through every tile of `color` reachable from it.
    ///
    /// Breadth first: the frontier starts as the whole region and each popped position has its
    /// four neighbors checked. A neighbor joins when it is on the grid, has `color`, and isn't
    /// in the region yet. Only positions that just joined get queued, so the frontier is always
    /// a subset of the new region and nothing is queued twice.
    ///
    /// The returned region still has the old fill color and nothing on the grid has changed.
    pub(super) fn grow_region(&self, color: Color) -> Region {
        let mut accepted = self.region.clone();
        let mut frontier: VecDeque<Position> = self.region.iter().copied().collect();

        while let Some(current) = frontier.pop_front() {
            for neighbor in current.neighbors() {
                let tile = match self.tile(neighbor) {
                    Some(tile) => tile,
                    None => continue,
                };
                if tile.color() != color {
                    continue;
                }
                if accepted.push(neighbor) {
                    trace!(%neighbor, "absorbed");
                    frontier.push_back(neighbor);
                }
            }
        }

        accepted
    }

    /// The region this board would have after playing `color`, without playing it
    pub fn preview_move(&self, color: Color) -> Result<Region, ColorfillError> {
        let color = color.check(self.palette_size)?;
        Ok(self.grow_region(color))
    }

    /// How many tiles playing `color` would add to the region
    pub fn absorption_count(&self, color: Color) -> Result<usize, ColorfillError> {
        Ok(self.preview_move(color)?.len() - self.region.len())
    }

    /// A new board as if `color` had been played on this one
    pub fn simulate_move(&self, color: Color) -> Result<Board, ColorfillError> {
        let mut next = self.clone();
        next.apply_move(color)?;
        Ok(next)
    }

    /// Plays `color`: the region absorbs every reachable tile of that color and the whole
    /// region is repainted. Playing the region's own color is a legal no-op.
    ///
    /// The color is checked before anything changes, so on error the board is untouched.
    #[instrument(level = "trace", skip_all, fields(color = %color))]
    pub fn apply_move(&mut self, color: Color) -> Result<(), ColorfillError> {
        let mut grown = self.preview_move(color)?;
        let absorbed = grown.len() - self.region.len();

        self.recolor(&mut grown, color);
        self.region = grown;

        debug!(absorbed, region_size = self.region.len(), "applied move");
        Ok(())
    }

    /// Paints every tile of `region` with `color` and makes it the region's fill color, in one
    /// step.
    pub(crate) fn recolor(&mut self, region: &mut Region, color: Color) {
        region.set_filled_color(color);
        for pos in region.iter() {
            if let Some(idx) = self.cell_index(*pos) {
                self.cells[idx].set_color(color);
            }
        }
    }
}
