//! Greedy best-first grid search demo.
//!
//! Run: cargo run --bin greedy-demo

use trove_demos::{GRID_GOAL, START, demo_grid, render};
use trove_search::{CardinalGrid, SearchRange};

fn main() {
    let grid = demo_grid();
    if let Err(e) = grid.ensure_walkable(START).and_then(|_| grid.ensure_walkable(GRID_GOAL)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("=== Greedy best-first search ===");
    println!("Start: {START}, Goal: {GRID_GOAL}");
    println!();

    let mut sr = SearchRange::new(grid.bounds());
    let out = sr.greedy_path_with(&CardinalGrid(&grid), START, GRID_GOAL, |p, h| {
        println!("Exploring {p} -> h={h}");
    });

    println!();
    if out.found {
        println!("Goal found! Path length = {}, cells explored = {}", out.path.len(), out.cells_explored);
        println!();
        println!("Final path (S=start, G=goal, *=path):");
        print!("{}", render(&grid, &out.path, START, GRID_GOAL));
    } else {
        println!("No path found after exploring {} cells.", out.cells_explored);
    }
}
