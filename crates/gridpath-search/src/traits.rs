//! Trait seam between the search loop and the terrain it runs over.

use gridpath_core::{Grid, Position};

use crate::cost::{euclidean, step_cost};

/// Minimal terrain interface: walkability and neighbor enumeration.
pub trait Pather {
    /// Whether `p` can be stepped on.
    fn walkable(&self, p: Position) -> bool;

    /// Append the walkable neighbors of `p` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Position, to: Position) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Position, to: Position) -> f64;
}

impl Pather for Grid {
    fn walkable(&self, p: Position) -> bool {
        self.is_walkable(p)
    }

    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        self.neighbors_into(p, buf);
    }
}

impl WeightedPather for Grid {
    fn cost(&self, from: Position, to: Position) -> f64 {
        step_cost(from, to)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Position, to: Position) -> f64 {
        euclidean(from, to)
    }
}
