//! Obstacle-pattern generators for gridpath grids.
//!
//! Three generators for setting up interesting terrain before a search:
//! walled corridors with gaps ([`maze`]), concentric obstacle arcs
//! ([`spiral`]), and uniformly random obstacles ([`scatter`]). All of them
//! write through [`Grid::set_cell`] only, and none of them touch designated
//! start/end cells.

pub mod patterns;

pub use patterns::{MazeRule, SpiralRule, maze, maze_with, scatter, spiral, spiral_with};
