//! Generic adversarial search over two-player zero-sum games.
//!
//! The engine knows nothing about any concrete game. A rule module plugs in
//! through the [`GameState`] trait (terminal check, successor generation,
//! endgame scoring) and optionally a [`Heuristic`] for depth-limited
//! searches. Five strategies share one return contract, [`SearchResult`]:
//!
//! - [`dfs_maximize`]: exhaustive depth-first maximization, a baseline that
//!   ignores the opponent's incentive to minimize.
//! - [`minimax_endgame`]: full minimax down to terminal states.
//! - [`minimax`]: minimax with a depth limit and heuristic cutoff.
//! - [`minimax_alphabeta`]: depth-limited minimax with branch pruning.
//! - [`progressive_deepen`]: repeated alpha-beta at increasing depth limits,
//!   recording an anytime result per depth in an [`AnytimeValue`].
//!
//! Scores are always in the maximizer's frame: `|score| >= 1000` marks a
//! proven endgame outcome, smaller magnitudes are heuristic estimates. Ties
//! between equally scored lines go to the earliest-generated successor.

mod alpha_beta;
mod deepening;
mod dfs;
mod minimax;
mod result;
mod traits;


pub use alpha_beta::minimax_alphabeta;
pub use deepening::progressive_deepen;
pub use dfs::dfs_maximize;
pub use minimax::{minimax, minimax_endgame};
pub use result::{AnytimeValue, SearchResult};
pub use traits::{FnHeuristic, GameState, Heuristic, ZeroHeuristic, ENDGAME_SCORE_FLOOR};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// A non-terminal state produced no successors. The game rules are
    /// ambiguous: no legal moves, but not flagged terminal. This is a
    /// configuration error in the plug-in, never resolved as a draw.
    #[error("non-terminal state has no successors")]
    NoSuccessors,
    #[error("search depth must be at least 1")]
    DepthTooLow,
    /// An alpha-beta root window with `alpha >= beta` would prune every
    /// successor before searching any of them.
    #[error("empty search window: alpha ({alpha}) must be below beta ({beta})")]
    EmptyWindow { alpha: i16, beta: i16 },
}
