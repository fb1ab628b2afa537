//! Core traits for generic adversarial search.

/// Magnitude at which a score represents a proven endgame outcome rather
/// than a heuristic estimate.
pub const ENDGAME_SCORE_FLOOR: i16 = 1000;

/// A position in a two-player zero-sum game.
///
/// Implementations must be pure: terminal checks, successor generation and
/// scoring are functions of the position alone, with no side effects.
pub trait GameState: Clone {
    /// Returns true if the game is over at this position.
    fn is_terminal(&self) -> bool;

    /// Returns every position reachable in one move, or an empty list if
    /// the position is terminal. The order must be deterministic: ties
    /// between equally scored lines are broken in favor of the
    /// earliest-generated successor.
    fn successors(&self) -> Vec<Self>;

    /// Scores a terminal position from the maximizer's point of view.
    /// `maximize` is true when the player to move here is the maximizer.
    /// Only called when [`is_terminal`](Self::is_terminal) returns true.
    ///
    /// Implementations must keep `|score| >= ENDGAME_SCORE_FLOOR` for
    /// decisive outcomes so that proven wins always outrank heuristic
    /// estimates, and must satisfy `score(true) == -score(false)`.
    fn terminal_score(&self, maximize: bool) -> i16;
}

/// Statically evaluates a non-terminal position at a depth cutoff.
pub trait Heuristic<S: GameState> {
    /// Evaluates the given state from the maximizer's point of view.
    /// `maximize` is true when the player to move is the maximizer.
    /// Implementations must keep `|score| < ENDGAME_SCORE_FLOOR`.
    fn evaluate(&self, state: &S, maximize: bool) -> i16;
}

/// The default heuristic: scores every position as dead even.
#[derive(Clone, Copy, Default, Debug)]
pub struct ZeroHeuristic;

impl<S: GameState> Heuristic<S> for ZeroHeuristic {
    #[inline(always)]
    fn evaluate(&self, _state: &S, _maximize: bool) -> i16 {
        0
    }
}

/// Adapts a plain function or closure to the [`Heuristic`] trait.
#[derive(Clone, Copy, Debug)]
pub struct FnHeuristic<F>(pub F);

impl<S: GameState, F> Heuristic<S> for FnHeuristic<F>
where
    F: Fn(&S, bool) -> i16,
{
    fn evaluate(&self, state: &S, maximize: bool) -> i16 {
        (self.0)(state, maximize)
    }
}
