//! Obstacle-pattern generators.
//!
//! Each generator writes obstacles through [`Grid::set_cell`], clipping to
//! the grid bounds (out-of-range writes are no-ops) and sparing cells
//! designated or marked as start/end.

use gridpath_core::{CellKind, Grid, Position};
use rand::{Rng, RngExt};

/// Place an obstacle at `p` unless the cell is a designated or marked
/// endpoint.
fn place_obstacle(grid: &mut Grid, p: Position) {
    if grid.start == Some(p) || grid.end == Some(p) {
        return;
    }
    if matches!(grid.get_cell(p), CellKind::Start | CellKind::End) {
        return;
    }
    grid.set_cell(p, CellKind::Obstacle);
}

/// Parameters for [`maze_with`]: wall lines broken by periodic gaps.
#[derive(Debug, Clone)]
pub struct MazeRule {
    /// X coordinates of vertical wall columns.
    pub wall_columns: Vec<i32>,
    /// A vertical wall leaves a gap at every row divisible by this.
    pub column_gap_every: i32,
    /// Y coordinates of horizontal wall rows.
    pub wall_rows: Vec<i32>,
    /// A horizontal wall leaves a gap at every column divisible by this.
    pub row_gap_every: i32,
}

impl Default for MazeRule {
    fn default() -> Self {
        Self {
            wall_columns: vec![8, 16, 24],
            column_gap_every: 4,
            wall_rows: vec![6, 12],
            row_gap_every: 5,
        }
    }
}

/// Carve the default maze pattern into `grid`.
pub fn maze(grid: &mut Grid) {
    maze_with(grid, &MazeRule::default());
}

/// Carve walls-with-gaps into `grid` according to `rule`.
pub fn maze_with(grid: &mut Grid, rule: &MazeRule) {
    let col_gap = rule.column_gap_every.max(1);
    let row_gap = rule.row_gap_every.max(1);

    for &x in &rule.wall_columns {
        for y in 0..grid.height() {
            if y % col_gap != 0 {
                place_obstacle(grid, Position::new(x, y));
            }
        }
    }

    for &y in &rule.wall_rows {
        for x in 0..grid.width() {
            if x % row_gap != 0 {
                place_obstacle(grid, Position::new(x, y));
            }
        }
    }
}

/// Parameters for [`spiral_with`]: concentric obstacle arcs around the grid
/// center.
#[derive(Debug, Clone)]
pub struct SpiralRule {
    /// Radius of the innermost arc.
    pub inner_radius: i32,
    /// Distance between successive arcs.
    pub radius_step: i32,
    /// Each arc sweeps from 0° up to this angle, leaving the remainder open.
    pub sweep_degrees: i32,
    /// Angular distance between obstacles along an arc.
    pub angle_step_degrees: i32,
}

impl Default for SpiralRule {
    fn default() -> Self {
        Self {
            inner_radius: 2,
            radius_step: 3,
            sweep_degrees: 270,
            angle_step_degrees: 5,
        }
    }
}

/// Carve the default spiral pattern into `grid`.
pub fn spiral(grid: &mut Grid) {
    spiral_with(grid, &SpiralRule::default());
}

/// Carve concentric obstacle arcs into `grid` according to `rule`.
pub fn spiral_with(grid: &mut Grid, rule: &SpiralRule) {
    let cx = grid.width() / 2;
    let cy = grid.height() / 2;
    let max_radius = cx.min(cy);
    let radius_step = rule.radius_step.max(1);
    let angle_step = rule.angle_step_degrees.max(1);

    let mut radius = rule.inner_radius;
    while radius < max_radius {
        let mut angle = 0;
        while angle < rule.sweep_degrees {
            let rad = f64::from(angle).to_radians();
            let x = cx + (f64::from(radius) * rad.cos()) as i32;
            let y = cy + (f64::from(radius) * rad.sin()) as i32;
            place_obstacle(grid, Position::new(x, y));
            angle += angle_step;
        }
        radius += radius_step;
    }
}

/// Scatter obstacles uniformly at random over `grid`.
///
/// Each cell independently becomes an obstacle with probability `density`
/// (clamped to `0.0..=1.0`). Endpoint cells are spared.
pub fn scatter(grid: &mut Grid, rng: &mut impl Rng, density: f64) {
    let density = density.clamp(0.0, 1.0);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if rng.random_bool(density) {
                place_obstacle(grid, Position::new(x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn obstacle_count(grid: &Grid) -> usize {
        let mut n = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get_cell(Position::new(x, y)) == CellKind::Obstacle {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn maze_walls_have_gaps() {
        let mut grid = Grid::new(35, 20);
        maze(&mut grid);

        // Vertical wall at x=8: gap where y % 4 == 0, wall elsewhere.
        assert_eq!(grid.get_cell(Position::new(8, 0)), CellKind::Empty);
        assert_eq!(grid.get_cell(Position::new(8, 1)), CellKind::Obstacle);
        assert_eq!(grid.get_cell(Position::new(8, 4)), CellKind::Empty);
        // Horizontal wall at y=6: gap where x % 5 == 0.
        assert_eq!(grid.get_cell(Position::new(0, 6)), CellKind::Empty);
        assert_eq!(grid.get_cell(Position::new(1, 6)), CellKind::Obstacle);
        assert_eq!(grid.get_cell(Position::new(5, 6)), CellKind::Empty);
    }

    #[test]
    fn maze_is_deterministic() {
        let mut a = Grid::new(35, 20);
        let mut b = Grid::new(35, 20);
        maze(&mut a);
        maze(&mut b);
        for y in 0..20 {
            for x in 0..35 {
                let p = Position::new(x, y);
                assert_eq!(a.get_cell(p), b.get_cell(p));
            }
        }
    }

    #[test]
    fn maze_clips_to_small_grids() {
        // All default wall lines lie outside a 5x5 grid; nothing changes.
        let mut grid = Grid::new(5, 5);
        maze(&mut grid);
        assert_eq!(obstacle_count(&grid), 0);
    }

    #[test]
    fn maze_spares_endpoints() {
        let mut grid = Grid::new(35, 20);
        let start = Position::new(8, 1);
        grid.start = Some(start);
        grid.set_cell(start, CellKind::Start);
        maze(&mut grid);
        assert_eq!(grid.get_cell(start), CellKind::Start);
    }

    #[test]
    fn spiral_marks_arcs_around_center() {
        let mut grid = Grid::new(20, 20);
        spiral(&mut grid);
        // Innermost arc, angle 0: two cells right of center (10, 10).
        assert_eq!(grid.get_cell(Position::new(12, 10)), CellKind::Obstacle);
        assert!(obstacle_count(&grid) > 0);
    }

    #[test]
    fn spiral_leaves_tiny_grids_alone() {
        // max radius 2 is not greater than the inner radius: no arcs fit.
        let mut grid = Grid::new(4, 4);
        spiral(&mut grid);
        assert_eq!(obstacle_count(&grid), 0);
    }

    #[test]
    fn scatter_respects_density_extremes() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut none = Grid::new(10, 10);
        scatter(&mut none, &mut rng, 0.0);
        assert_eq!(obstacle_count(&none), 0);

        let mut all = Grid::new(10, 10);
        all.end = Some(Position::new(9, 9));
        scatter(&mut all, &mut rng, 1.0);
        assert_eq!(obstacle_count(&all), 99);
        assert_eq!(all.get_cell(Position::new(9, 9)), CellKind::Empty);
    }

    #[test]
    fn scatter_is_seed_deterministic() {
        let mut a = Grid::new(15, 15);
        let mut b = Grid::new(15, 15);
        scatter(&mut a, &mut StdRng::seed_from_u64(7), 0.3);
        scatter(&mut b, &mut StdRng::seed_from_u64(7), 0.3);
        for y in 0..15 {
            for x in 0..15 {
                let p = Position::new(x, y);
                assert_eq!(a.get_cell(p), b.get_cell(p));
            }
        }
        let n = obstacle_count(&a);
        assert!(n > 0 && n < 225);
    }
}
