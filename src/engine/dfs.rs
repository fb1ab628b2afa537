//! Exhaustive depth-first maximization.

use super::{GameState, SearchError, SearchResult};

/// Searches every line to its end and returns the path to the terminal
/// state with the highest endgame score, scored as if the maximizer made
/// every move. This is a baseline strategy, not an adversarially correct
/// one: it does not model an opponent.
///
/// `evaluations` in the returned result equals the number of terminal
/// leaves visited. The game must have finite depth; callers are
/// responsible for not handing this an unbounded game.
pub fn dfs_maximize<S: GameState>(root: &S) -> Result<SearchResult<S>, SearchError> {
    dfs_subtree(vec![root.clone()])
}

fn dfs_subtree<S: GameState>(path: Vec<S>) -> Result<SearchResult<S>, SearchError> {
    let current = path.last().expect("search paths always contain the root");

    if current.is_terminal() {
        let score = current.terminal_score(true);
        return Ok(SearchResult {
            path,
            score,
            evaluations: 1,
        });
    }

    let successors = current.successors();
    if successors.is_empty() {
        return Err(SearchError::NoSuccessors);
    }

    let mut best: Option<SearchResult<S>> = None;
    let mut evaluations = 0;

    for successor in successors {
        let mut child_path = path.clone();
        child_path.push(successor);
        let result = dfs_subtree(child_path)?;
        evaluations += result.evaluations;

        // Strict comparison keeps the earliest-generated leaf on ties.
        let improved = match best {
            None => true,
            Some(ref incumbent) => result.score > incumbent.score,
        };
        if improved {
            best = Some(result);
        }
    }

    let mut best = best.expect("at least one successor was searched");
    best.evaluations = evaluations;
    Ok(best)
}
