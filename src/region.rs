//! the filled region ("blob") grown from the anchor cell
use crate::color::Color;
use crate::position::Position;
use crate::tile::Tile;
use fxhash::FxHashSet;
use std::slice::Iter;

/// The tiles filled so far, as an ordered, deduplicated list of positions plus the color they
/// are filled with.
///
/// A region holds no tiles of its own, only where they are. The board owns every tile and is
/// the only thing that repaints them, so a region can be copied around as a snapshot without
/// ever disagreeing with the grid about colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    positions: Vec<Position>,
    members: FxHashSet<Position>,
    filled_color: Color,
}

impl Region {
    /// a region holding only `seed`, filled with the seed's color
    pub fn new(seed: Tile) -> Self {
        let mut members = FxHashSet::default();
        members.insert(seed.position());
        Region {
            positions: vec![seed.position()],
            members,
            filled_color: seed.color(),
        }
    }

    /// number of tiles in the region
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// a region always has its seed, so this is only ever false
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[allow(missing_docs)]
    pub fn contains(&self, pos: &Position) -> bool {
        self.members.contains(pos)
    }

    /// adds a position if it isn't already present, returning whether it was added
    pub fn push(&mut self, pos: Position) -> bool {
        if self.members.insert(pos) {
            self.positions.push(pos);
            true
        } else {
            false
        }
    }

    /// positions in the order they joined the region
    pub fn iter(&self) -> Iter<'_, Position> {
        self.positions.iter()
    }

    #[allow(missing_docs)]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[allow(missing_docs)]
    pub fn filled_color(&self) -> Color {
        self.filled_color
    }

    pub(crate) fn set_filled_color(&mut self, color: Color) {
        self.filled_color = color;
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Position;
    type IntoIter = Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
