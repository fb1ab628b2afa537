//! Progressive deepening with anytime reporting.

use log::debug;

use super::{minimax_alphabeta, AnytimeValue, GameState, Heuristic, SearchError, SearchResult};

/// Runs alpha-beta once per depth limit 1, 2, ..., `depth_limit`, appending
/// each completed pass to an [`AnytimeValue`]. Every pass restarts from the
/// full `(i16::MIN, i16::MAX)` window; no bounds or partial trees carry
/// over between depths.
///
/// The returned accumulator's [`latest`](AnytimeValue::latest) is the
/// deepest result; its [`history`](AnytimeValue::history) holds one entry
/// per depth, in order, for callers that want a usable answer before the
/// full-depth search finishes.
pub fn progressive_deepen<S, H>(
    root: &S,
    heuristic: &H,
    depth_limit: u8,
    maximize: bool,
) -> Result<AnytimeValue<S>, SearchError>
where
    S: GameState,
    H: Heuristic<S>,
{
    if depth_limit < 1 {
        return Err(SearchError::DepthTooLow);
    }

    let mut anytime = AnytimeValue::new();
    for depth in 1..=depth_limit {
        let result: SearchResult<S> =
            minimax_alphabeta(root, i16::MIN, i16::MAX, heuristic, Some(depth), maximize)?;
        debug!(
            "progressive deepening: depth {} scored {} after {} evaluations",
            depth, result.score, result.evaluations
        );
        anytime.set(result);
    }
    Ok(anytime)
}
