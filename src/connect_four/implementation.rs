//! Connect Four implementation of the engine's game-state trait.

use crate::engine::GameState;

use super::board::{ConnectFourBoard, COLS};
use super::evaluate;

impl GameState for ConnectFourBoard {
    fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// One successor per non-full column, in column order. Column order is
    /// what makes tie-breaking deterministic: among equally scored moves
    /// the engine keeps the leftmost.
    fn successors(&self) -> Vec<Self> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.is_column_full(col))
            .map(|col| {
                self.add_piece(col)
                    .expect("column was checked non-full")
            })
            .collect()
    }

    fn terminal_score(&self, maximize: bool) -> i16 {
        evaluate::endgame_score_faster(self, maximize)
    }
}
