//! Endgame scoring and the chain heuristic for Connect Four.
//!
//! Scores follow the engine's convention: `|score| >= 1000` for proven
//! outcomes, `|score| < 1000` for heuristic estimates, always from the
//! maximizer's point of view. At a finished game the player to move is
//! the loser, since the winner made the last move.

use std::cmp::Ordering;

use crate::engine::{Heuristic, ENDGAME_SCORE_FLOOR};

use super::board::{ConnectFourBoard, COLS, ROWS};

/// Scores a finished game: 0 for a full board, otherwise ±1000 depending
/// on whether the maximizer is the player left to move (the loser).
pub fn endgame_score(board: &ConnectFourBoard, maximize: bool) -> i16 {
    if board.is_full() {
        return 0;
    }
    if maximize {
        -ENDGAME_SCORE_FLOOR
    } else {
        ENDGAME_SCORE_FLOOR
    }
}

/// Like [`endgame_score`], but scaled by the number of unplayed pieces so
/// that faster wins (and slower losses) score larger magnitudes.
pub fn endgame_score_faster(board: &ConnectFourBoard, maximize: bool) -> i16 {
    if board.is_full() {
        return 0;
    }
    let speed_bonus = ((ROWS * COLS) as i16 - board.count_pieces() as i16) * 10;
    if maximize {
        -ENDGAME_SCORE_FLOOR - speed_bonus
    } else {
        ENDGAME_SCORE_FLOOR + speed_bonus
    }
}

/// Static evaluation for unfinished games, comparing the players' chain
/// structure: whoever has the longer best chain, and more multi-piece
/// chains, is ahead.
///
/// The score thresholds are tunable policy rather than engine logic; the
/// defaults reproduce the classic 500/10/0/-10/-500 ladder.
#[derive(Clone, Debug)]
pub struct ChainHeuristic {
    /// Awarded when one side has both the longer best chain and more
    /// multi-piece chains.
    pub dominant: i16,
    /// Awarded for a partial advantage (longer chain or more chains, but
    /// not both).
    pub edge: i16,
}

impl Default for ChainHeuristic {
    fn default() -> Self {
        Self {
            dominant: 500,
            edge: 10,
        }
    }
}

impl Heuristic<ConnectFourBoard> for ChainHeuristic {
    fn evaluate(&self, board: &ConnectFourBoard, maximize: bool) -> i16 {
        // Too early for chain structure to mean anything.
        if board.count_pieces() < 4 {
            return 0;
        }

        let mover = board.whose_turn();
        let opponent = mover.opposite();

        let multi_piece = |chains: &[super::board::Chain]| -> isize {
            chains.iter().filter(|chain| chain.len() > 1).count() as isize
        };
        let mover_chains = board.chains(mover);
        let opponent_chains = board.chains(opponent);

        let chain_count = multi_piece(&mover_chains) - multi_piece(&opponent_chains);
        let length_edge =
            board.longest_chain(mover) as isize - board.longest_chain(opponent) as isize;

        // Score from the mover's point of view.
        let mover_score = match length_edge.cmp(&0) {
            Ordering::Greater => {
                if chain_count > 0 {
                    self.dominant
                } else {
                    self.edge
                }
            }
            Ordering::Equal => match chain_count.cmp(&0) {
                Ordering::Greater => self.edge,
                Ordering::Equal => 0,
                Ordering::Less => -self.edge,
            },
            Ordering::Less => {
                if chain_count < 0 {
                    -self.dominant
                } else {
                    -self.edge
                }
            }
        };

        if maximize {
            mover_score
        } else {
            -mover_score
        }
    }
}
