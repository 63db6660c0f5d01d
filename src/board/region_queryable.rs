use crate::color::Color;
use crate::position::Position;
use crate::types::{CompletableGame, RegionQueryableGame};

use super::Board;

impl RegionQueryableGame for Board {
    fn region_size(&self) -> usize {
        self.region.len()
    }

    fn region_color(&self) -> Color {
        self.region.filled_color()
    }

    fn in_region(&self, pos: &Position) -> bool {
        self.region.contains(pos)
    }
}

impl CompletableGame for Board {
    fn is_complete(&self) -> bool {
        self.region.len() == self.cells.len()
    }
}
