//! The observation contract: a synchronous, read-only view of the search,
//! reported once per node expansion.

use std::collections::{HashMap, HashSet};

use gridpath_core::Position;

use crate::astar::SearchNode;

/// Best recorded scores for a position, for observer introspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeScores {
    /// Estimated total cost through this position (`g + h`).
    pub f: f64,
    /// Best known cost from the start.
    pub g: f64,
    /// Heuristic estimate to the goal.
    pub h: f64,
    /// Predecessor position on the best known route, `None` for the start.
    pub parent: Option<Position>,
}

/// Borrowed snapshot of the search state, handed to a [`SearchObserver`]
/// once per expansion.
///
/// Everything is behind shared references: an observer can inspect the
/// frontier, the visited set, and the score table, but cannot mutate them.
pub struct SearchView<'a> {
    pub(crate) open: &'a HashSet<Position>,
    pub(crate) visited: &'a HashSet<Position>,
    pub(crate) nodes: &'a [SearchNode],
    pub(crate) best: &'a HashMap<Position, usize>,
    pub(crate) current: Position,
}

impl SearchView<'_> {
    /// Positions currently in the open set (frontier candidates).
    #[inline]
    pub fn open_positions(&self) -> &HashSet<Position> {
        self.open
    }

    /// Positions whose cost has been finalized.
    #[inline]
    pub fn visited_positions(&self) -> &HashSet<Position> {
        self.visited
    }

    /// The position expanded this step.
    #[inline]
    pub fn current(&self) -> Position {
        self.current
    }

    /// Best recorded scores for `p`, if the search has reached it.
    pub fn score_of(&self, p: Position) -> Option<NodeScores> {
        let &i = self.best.get(&p)?;
        let n = &self.nodes[i];
        Some(NodeScores {
            f: n.f,
            g: n.g,
            h: n.h,
            parent: n.parent.map(|pi| self.nodes[pi].pos),
        })
    }

    /// Iterate over every position with recorded scores.
    pub fn scores(&self) -> impl Iterator<Item = (Position, NodeScores)> + '_ {
        self.best
            .keys()
            .filter_map(|&p| self.score_of(p).map(|s| (p, s)))
    }
}

/// Observer of search progress.
///
/// Called synchronously once per node expansion, after the expanded
/// position enters the visited set and before its neighbors are examined.
/// The search loop does not resume until the call returns. Supplying no
/// observer runs the identical search without the per-step call.
pub trait SearchObserver {
    fn on_expand(&mut self, view: &SearchView<'_>);
}

impl<F: FnMut(&SearchView<'_>)> SearchObserver for F {
    fn on_expand(&mut self, view: &SearchView<'_>) {
        self(view)
    }
}
