//! A* shortest-path search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use gridpath_core::Position;

use crate::observer::{SearchObserver, SearchView};
use crate::stats::AlgorithmStats;
use crate::traits::AstarPather;

/// A candidate state in the search space.
///
/// Nodes are immutable once pushed into the frontier: a better route to the
/// same position produces a new node rather than mutating an existing one,
/// and `f` is always `g + h` as of creation time.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    /// The cell this node stands on.
    pub pos: Position,
    /// Cost from the start along the route this node was created for.
    pub g: f64,
    /// Heuristic estimate to the goal.
    pub h: f64,
    /// Estimated total cost through this node (`g + h`).
    pub f: f64,
    /// Arena index of the predecessor node, `None` for the start.
    pub parent: Option<usize>,
}

/// Frontier entry referencing a node in the arena.
///
/// Orders by ascending f-score with ties broken by insertion sequence
/// (first pushed pops first), which keeps runs reproducible.
#[derive(Clone, Copy, PartialEq)]
struct OpenEntry {
    f: f64,
    seq: u64,
    node: usize,
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the lowest f first. Scores
        // are finite sums of finite costs, so the NaN fallback never fires.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search engine.
///
/// Owns all per-run state (node arena, frontier, score tables, neighbor
/// scratch) and reuses the allocations across runs. Each call to
/// [`find_path`](AstarSearch::find_path) starts from a clean slate; nothing
/// leaks from one run into the next, and the engine holds no state other
/// than these caches.
#[derive(Default)]
pub struct AstarSearch {
    nodes: Vec<SearchNode>,
    open: BinaryHeap<OpenEntry>,
    best: HashMap<Position, usize>,
    visited: HashSet<Position>,
    open_positions: HashSet<Position>,
    nbuf: Vec<Position>,
    seq: u64,
}

impl AstarSearch {
    /// Create a new engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the shortest path from `from` to `to` over `pather`.
    ///
    /// Returns the full path including both endpoints, or `None` when the
    /// goal is unreachable or either endpoint is unwalkable. When `from`
    /// equals `to` the path is the single cell `[from]` at cost 0.
    ///
    /// If `stats` is supplied its counters are populated as the run
    /// progresses; if `observer` is supplied it is called synchronously
    /// once per node expansion. Neither changes the search outcome.
    pub fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Position,
        to: Position,
        mut observer: Option<&mut dyn SearchObserver>,
        mut stats: Option<&mut AlgorithmStats>,
    ) -> Option<Vec<Position>> {
        let started = Instant::now();

        if !pather.walkable(from) || !pather.walkable(to) {
            if let Some(s) = stats {
                s.execution_time = started.elapsed();
            }
            return None;
        }

        self.clear();
        log::trace!("astar: searching {from} -> {to}");

        let h0 = pather.estimate(from, to);
        self.push_node(SearchNode {
            pos: from,
            g: 0.0,
            h: h0,
            f: h0,
            parent: None,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let open_len = self.open.len();
            let Some(entry) = self.open.pop() else {
                break None;
            };
            if let Some(s) = stats.as_deref_mut() {
                s.iterations += 1;
                s.nodes_in_open = open_len;
                s.max_open_size = s.max_open_size.max(open_len);
            }

            let ci = entry.node;
            let pos = self.nodes[ci].pos;

            // Stale duplicate for an already-finalized position.
            if self.visited.contains(&pos) {
                continue;
            }

            self.visited.insert(pos);
            self.open_positions.remove(&pos);
            if let Some(s) = stats.as_deref_mut() {
                s.nodes_explored += 1;
            }

            if let Some(obs) = observer.as_deref_mut() {
                obs.on_expand(&SearchView {
                    open: &self.open_positions,
                    visited: &self.visited,
                    nodes: &self.nodes,
                    best: &self.best,
                    current: pos,
                });
            }

            if pos == to {
                break Some(ci);
            }

            let current_g = self.nodes[ci].g;
            nbuf.clear();
            pather.neighbors(pos, &mut nbuf);

            for &np in nbuf.iter() {
                if self.visited.contains(&np) {
                    continue;
                }
                let tentative = current_g + pather.cost(pos, np);
                // Strict improvement only, to avoid no-op duplicates.
                if let Some(&bi) = self.best.get(&np) {
                    if tentative >= self.nodes[bi].g {
                        continue;
                    }
                }
                let h = pather.estimate(np, to);
                self.push_node(SearchNode {
                    pos: np,
                    g: tentative,
                    h,
                    f: tentative + h,
                    parent: Some(ci),
                });
            }
        };

        self.nbuf = nbuf;

        match found {
            Some(goal) => {
                let path = self.reconstruct(goal);
                if let Some(s) = stats.as_deref_mut() {
                    s.path_length = path.len();
                    s.path_cost = self.nodes[goal].g;
                    s.execution_time = started.elapsed();
                }
                log::debug!(
                    "astar: found path {from} -> {to}, {} cells, cost {:.3}",
                    path.len(),
                    self.nodes[goal].g
                );
                Some(path)
            }
            None => {
                if let Some(s) = stats.as_deref_mut() {
                    s.execution_time = started.elapsed();
                }
                log::debug!("astar: frontier exhausted, {to} unreachable from {from}");
                None
            }
        }
    }

    /// Reset per-run state, keeping allocations.
    fn clear(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.best.clear();
        self.visited.clear();
        self.open_positions.clear();
        self.seq = 0;
    }

    /// Append a node to the arena and push it into the frontier, recording
    /// it as the best route to its position.
    fn push_node(&mut self, node: SearchNode) {
        let idx = self.nodes.len();
        let pos = node.pos;
        let f = node.f;
        self.nodes.push(node);
        self.best.insert(pos, idx);
        self.open_positions.insert(pos);
        self.open.push(OpenEntry {
            f,
            seq: self.seq,
            node: idx,
        });
        self.seq += 1;
    }

    /// Walk predecessor links from the goal node back to the start, then
    /// reverse so the path runs start -> goal.
    fn reconstruct(&self, goal: usize) -> Vec<Position> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(i) = cur {
            path.push(self.nodes[i].pos);
            cur = self.nodes[i].parent;
        }
        path.reverse();
        path
    }
}
