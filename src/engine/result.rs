//! The common return contract shared by every search strategy.

/// The outcome of one search: the line from the root to the scored leaf,
/// the score of that leaf, and how many static evaluations were performed.
#[derive(Clone, Debug)]
pub struct SearchResult<S> {
    /// Root-to-leaf sequence of states, starting with the searched root.
    /// Never empty.
    pub path: Vec<S>,
    /// Score of the leaf from the maximizer's point of view.
    pub score: i16,
    /// Number of terminal-or-cutoff positions statically scored within the
    /// searched subtree. Pruned branches contribute zero. Always >= 1.
    pub evaluations: usize,
}

impl<S> SearchResult<S> {
    /// The scored state at the end of the principal line.
    pub fn leaf(&self) -> &S {
        self.path.last().expect("search paths always contain the root")
    }

    /// Number of moves between the root and the scored leaf.
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }
}

/// Accumulates the best-so-far result across progressive deepening passes.
///
/// Created at the start of one deepening invocation, appended to once per
/// completed depth in increasing order, then handed to the caller
/// read-only. [`latest`](Self::latest) is the deepest (best) result;
/// [`history`](Self::history) keeps every recorded pass for anytime
/// reporting.
#[derive(Clone, Debug)]
pub struct AnytimeValue<S> {
    history: Vec<SearchResult<S>>,
}

impl<S> Default for AnytimeValue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> AnytimeValue<S> {
    pub fn new() -> Self {
        Self { history: Vec::new() }
    }

    pub(crate) fn set(&mut self, result: SearchResult<S>) {
        self.history.push(result);
    }

    /// The most recently recorded result, if any depth has completed.
    pub fn latest(&self) -> Option<&SearchResult<S>> {
        self.history.last()
    }

    /// Every recorded result, in increasing depth order.
    pub fn history(&self) -> &[SearchResult<S>] {
        &self.history
    }

    /// Total static evaluations across all recorded passes.
    pub fn total_evaluations(&self) -> usize {
        self.history.iter().map(|result| result.evaluations).sum()
    }
}
