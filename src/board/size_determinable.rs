use crate::types::SizeDeterminableGame;

use super::Board;

impl SizeDeterminableGame for Board {
    fn get_rows(&self) -> u32 {
        self.rows as u32
    }

    fn get_cols(&self) -> u32 {
        self.cols as u32
    }
}
