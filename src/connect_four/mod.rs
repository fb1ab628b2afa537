//! Connect Four rules, plugged into the search engine through the
//! [`GameState`](crate::engine::GameState) trait.

pub mod board;
pub mod evaluate;
mod implementation;

#[cfg(test)]
mod tests;

pub use board::{BoardError, Chain, ConnectFourBoard, Player, COLS, EMPTY_POSITION, ROWS};
pub use evaluate::{endgame_score, endgame_score_faster, ChainHeuristic};
