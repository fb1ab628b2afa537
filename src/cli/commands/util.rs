//! Shared utilities for CLI commands.

use gametree::connect_four::{ConnectFourBoard, Player};
use gametree::engine::SearchResult;

/// Scores are always reported from player one's point of view.
pub(crate) fn maximize_for(board: &ConnectFourBoard) -> bool {
    board.whose_turn() == Player::One
}

/// The column played by the first move of the principal line.
pub(crate) fn chosen_column(result: &SearchResult<ConnectFourBoard>) -> Option<usize> {
    result.path.get(1).and_then(|board| board.last_move())
}

/// Columns are one-indexed at the terminal.
pub(crate) fn display_column(col: usize) -> usize {
    col + 1
}
