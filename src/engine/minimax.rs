//! Full-depth and depth-limited minimax.

use super::{GameState, Heuristic, SearchError, SearchResult, ZeroHeuristic};

/// Minimax over every line down to its terminal state, alternating between
/// maximizing and minimizing players. `maximize` is true when the player
/// to move at the root is the maximizer.
///
/// Requires a game whose move chains all terminate. Unbounded games must
/// use [`minimax`] with a finite depth limit instead.
pub fn minimax_endgame<S: GameState>(
    root: &S,
    maximize: bool,
) -> Result<SearchResult<S>, SearchError> {
    minimax_subtree(vec![root.clone()], &ZeroHeuristic, None, maximize)
}

/// Depth-limited minimax. Once a line is `depth_limit` moves long, a
/// non-terminal position is statically scored with `heuristic` instead of
/// being expanded, and that cutoff counts as one evaluation. A limit of
/// `None` searches to the end of every line, matching
/// [`minimax_endgame`].
pub fn minimax<S, H>(
    root: &S,
    heuristic: &H,
    depth_limit: Option<u8>,
    maximize: bool,
) -> Result<SearchResult<S>, SearchError>
where
    S: GameState,
    H: Heuristic<S>,
{
    minimax_subtree(vec![root.clone()], heuristic, depth_limit, maximize)
}

pub(super) fn minimax_subtree<S, H>(
    path: Vec<S>,
    heuristic: &H,
    depth_limit: Option<u8>,
    maximize: bool,
) -> Result<SearchResult<S>, SearchError>
where
    S: GameState,
    H: Heuristic<S>,
{
    let current = path.last().expect("search paths always contain the root");

    if current.is_terminal() {
        let score = current.terminal_score(maximize);
        return Ok(SearchResult {
            path,
            score,
            evaluations: 1,
        });
    }

    // The root contributes no depth: a path of length n is n - 1 moves in.
    let current_depth = path.len() - 1;
    if depth_limit.map_or(false, |limit| current_depth >= limit as usize) {
        let score = heuristic.evaluate(current, maximize);
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
        let result = minimax_subtree(child_path, heuristic, depth_limit, !maximize)?;
        evaluations += result.evaluations;

        // Strict comparison keeps the earliest-generated line on ties.
        let improved = match best {
            None => true,
            Some(ref incumbent) => {
                if maximize {
                    result.score > incumbent.score
                } else {
                    result.score < incumbent.score
                }
            }
        };
        if improved {
            best = Some(result);
        }
    }

    let mut best = best.expect("at least one successor was searched");
    best.evaluations = evaluations;
    Ok(best)
}
