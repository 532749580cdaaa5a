//! **gridpath-core** — Grid model for grid-based pathfinding.
//!
//! This crate provides the types the *gridpath* ecosystem searches over:
//! integer cell coordinates, per-cell terrain classification, and the
//! [`Grid`] with its bounds, walkability, and neighbor queries.

pub mod cell;
pub mod grid;
pub mod pos;

pub use cell::CellKind;
pub use grid::Grid;
pub use pos::Position;
