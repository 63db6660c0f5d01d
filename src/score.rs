//! move scoring
use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use std::fmt;

/// Points for a single move.
///
/// A move absorbing `n > 0` tiles is worth `(1000 + 100 * (n - 1)) * n`, so big single moves
/// pay off more than the same tiles taken over several moves. A move absorbing nothing is worth
/// nothing. The move that ends the game also earns `end_of_game_bonus(move_number)`, whatever it
/// absorbed. `move_number` is 1-based and counts this move.
pub fn move_score(absorbed: u32, is_game_end: bool, move_number: u32) -> i64 {
    let n = absorbed as i64;
    let mut score = if n == 0 { 0 } else { (1000 + 100 * (n - 1)) * n };
    if is_game_end {
        score += end_of_game_bonus(move_number);
    }
    score
}

/// `2000 * m^2 - 100000 * m + 1300000` for a game ending on move `m`.
///
/// This is a parabola bottoming out at move 25 rather than a reward that shrinks the longer a
/// game runs, so finishing later is not always worth less.
pub fn end_of_game_bonus(move_number: u32) -> i64 {
    let m = move_number as i64;
    2000 * m * m - 100_000 * m + 1_300_000
}

/// Running total of a game's move scores
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    moves: Vec<i64>,
    total: i64,
}

impl ScoreSheet {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// scores the next move and adds it to the sheet, returning its points
    pub fn record(&mut self, absorbed: u32, is_game_end: bool) -> i64 {
        let move_number = self.moves.len() as u32 + 1;
        let points = move_score(absorbed, is_game_end, move_number);
        self.moves.push(points);
        self.total += points;
        points
    }

    #[allow(missing_docs)]
    pub fn total(&self) -> i64 {
        self.total
    }

    /// points of every recorded move, in order
    pub fn moves(&self) -> &[i64] {
        &self.moves
    }
}

impl fmt::Display for ScoreSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} points over {} moves",
            self.total.to_formatted_string(&Locale::en),
            self.moves.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorption_is_rewarded_quadratically() {
        assert_eq!(move_score(0, false, 3), 0);
        assert_eq!(move_score(1, false, 3), 1000);
        assert_eq!(move_score(2, false, 3), 2200);
        assert_eq!(move_score(6, false, 4), 9000);
        assert!(move_score(6, false, 1) > 2 * move_score(3, false, 1));
    }

    #[test]
    fn test_move_number_only_matters_at_the_end() {
        assert_eq!(move_score(6, false, 1), move_score(6, false, 40));
        assert_eq!(move_score(6, true, 10), 9000 + end_of_game_bonus(10));
    }

    #[test]
    fn test_end_bonus_is_a_parabola() {
        assert_eq!(end_of_game_bonus(1), 1_202_000);
        assert_eq!(end_of_game_bonus(20), 100_000);
        assert_eq!(end_of_game_bonus(25), 50_000);
        assert_eq!(end_of_game_bonus(30), 100_000);
        assert!(end_of_game_bonus(24) > end_of_game_bonus(25));
        assert!(end_of_game_bonus(26) > end_of_game_bonus(25));
    }

    #[test]
    fn test_wasted_final_move_still_earns_the_bonus() {
        assert_eq!(move_score(0, true, 25), 50_000);
    }

    #[test]
    fn test_score_sheet() {
        let mut sheet = ScoreSheet::new();
        assert_eq!(sheet.record(6, false), 9000);
        assert_eq!(sheet.record(0, false), 0);
        assert_eq!(sheet.record(1, true), 1000 + end_of_game_bonus(3));
        assert_eq!(sheet.moves().len(), 3);
        assert_eq!(sheet.total(), 9000 + 1000 + end_of_game_bonus(3));
        assert_eq!(sheet.to_string(), "1,028,000 points over 3 moves");
    }
}
