//! Run one search over the demo scenario and print the result.
//!
//! Run: cargo run --bin pathdemo

use gridpath_demos::{END, START, TraceObserver, build_scenario, format_stats, render};
use gridpath_search::{AlgorithmStats, AstarSearch};

fn main() {
    let grid = build_scenario();
    let mut search = AstarSearch::new();
    let mut stats = AlgorithmStats::new();
    let mut trace = TraceObserver::default();

    let path = search.find_path(&grid, START, END, Some(&mut trace), Some(&mut stats));

    match &path {
        Some(p) => println!("Path found: {} cells, cost {:.2}\n", p.len(), stats.path_cost),
        None => println!("No path from {START} to {END}\n"),
    }
    print!("{}", render(&grid, path.as_deref(), &trace));
    println!();
    print!("{}", format_stats(&stats));
}
