//! Common types re-exported for convenience.

pub use crate::connect_four::{ChainHeuristic, ConnectFourBoard, Player};
pub use crate::engine::{
    dfs_maximize, minimax, minimax_alphabeta, minimax_endgame, progressive_deepen, AnytimeValue,
    FnHeuristic, GameState, Heuristic, SearchError, SearchResult, ZeroHeuristic,
    ENDGAME_SCORE_FLOOR,
};
