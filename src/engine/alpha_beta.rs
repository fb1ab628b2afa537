//! Alpha-beta pruned minimax.
//!
//! Alpha-beta pruning maintains a window `[alpha, beta]` of scores that can
//! still influence the result: `alpha` is the best score the maximizer can
//! already guarantee at this node, `beta` the best the minimizer can.
//! Once `alpha >= beta` the remaining successors cannot change the outcome
//! and are skipped without being generated into the search. Pruning never
//! changes the returned score relative to plain minimax at the same depth
//! limit and heuristic; only the evaluation count and explored set differ.

use log::debug;

use super::{GameState, Heuristic, SearchError, SearchResult};

/// Depth-limited minimax with alpha-beta pruning. Terminal and cutoff
/// handling match [`minimax`](super::minimax) exactly; pruned subtrees
/// contribute zero evaluations.
///
/// The usual root window is `(i16::MIN, i16::MAX)`. A root window with
/// `alpha >= beta` would prune everything and is rejected as
/// [`SearchError::EmptyWindow`].
pub fn minimax_alphabeta<S, H>(
    root: &S,
    alpha: i16,
    beta: i16,
    heuristic: &H,
    depth_limit: Option<u8>,
    maximize: bool,
) -> Result<SearchResult<S>, SearchError>
where
    S: GameState,
    H: Heuristic<S>,
{
    if alpha >= beta {
        return Err(SearchError::EmptyWindow { alpha, beta });
    }
    debug!(
        "alpha-beta search: window [{}, {}], depth limit {:?}, maximize {}",
        alpha, beta, depth_limit, maximize
    );
    alphabeta_subtree(vec![root.clone()], alpha, beta, heuristic, depth_limit, maximize)
}

fn alphabeta_subtree<S, H>(
    path: Vec<S>,
    mut alpha: i16,
    mut beta: i16,
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
        // The window is re-checked before every expansion, so a bound
        // raised by an earlier sibling prunes all the ones that follow.
        if alpha >= beta {
            break;
        }

        let mut child_path = path.clone();
        child_path.push(successor);
        let result = alphabeta_subtree(child_path, alpha, beta, heuristic, depth_limit, !maximize)?;
        evaluations += result.evaluations;

        if maximize {
            if result.score > alpha {
                alpha = result.score;
            }
        } else if result.score < beta {
            beta = result.score;
        }

        // Best-of-visited selection, first-generated winning ties.
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

    // Every call enters with alpha < beta, so the first successor is
    // always visited.
    let mut best = best.expect("alpha-beta visits at least one successor");
    best.evaluations = evaluations;
    Ok(best)
}
