//! Shared demo scenario: a walled grid, a search across it, and a
//! plain-text rendering of the result.

use std::collections::HashSet;
use std::fmt::Write as _;

use gridpath_core::{CellKind, Grid, Position};
use gridpath_gen::maze;
use gridpath_search::{AlgorithmStats, SearchObserver, SearchView};

pub const WIDTH: i32 = 35;
pub const HEIGHT: i32 = 20;
pub const START: Position = Position::new(2, 2);
pub const END: Position = Position::new(32, 17);

/// Build the demo grid: walled corridors with gaps, endpoints designated.
pub fn build_scenario() -> Grid {
    let mut grid = Grid::new(WIDTH, HEIGHT);
    grid.start = Some(START);
    grid.end = Some(END);
    grid.set_cell(START, CellKind::Start);
    grid.set_cell(END, CellKind::End);
    maze(&mut grid);
    grid
}

/// Observer that keeps the open/visited sets of the latest expansion, for
/// rendering how much of the grid the search touched.
#[derive(Default)]
pub struct TraceObserver {
    pub open: HashSet<Position>,
    pub visited: HashSet<Position>,
}

impl SearchObserver for TraceObserver {
    fn on_expand(&mut self, view: &SearchView<'_>) {
        self.open = view.open_positions().clone();
        self.visited = view.visited_positions().clone();
    }
}

/// Render the grid as ASCII: `S`/`E` endpoints, `#` walls, `*` the path,
/// `x` visited cells, `o` frontier cells, `.` untouched.
pub fn render(grid: &Grid, path: Option<&[Position]>, trace: &TraceObserver) -> String {
    let on_path: HashSet<Position> = path.into_iter().flatten().copied().collect();
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Position::new(x, y);
            let ch = if grid.start == Some(p) {
                'S'
            } else if grid.end == Some(p) {
                'E'
            } else if on_path.contains(&p) {
                '*'
            } else if grid.get_cell(p) == CellKind::Obstacle {
                '#'
            } else if trace.visited.contains(&p) {
                'x'
            } else if trace.open.contains(&p) {
                'o'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Format a stats block the way the run summary prints it.
pub fn format_stats(stats: &AlgorithmStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Iterations:     {}", stats.iterations);
    let _ = writeln!(out, "Nodes explored: {}", stats.nodes_explored);
    let _ = writeln!(out, "Open set size:  {}", stats.nodes_in_open);
    let _ = writeln!(out, "Max open size:  {}", stats.max_open_size);
    let _ = writeln!(out, "Path length:    {}", stats.path_length);
    let _ = writeln!(out, "Path cost:      {:.2}", stats.path_cost);
    let _ = writeln!(
        out,
        "Time:           {:.1}ms",
        stats.execution_time.as_secs_f64() * 1000.0
    );
    out
}
