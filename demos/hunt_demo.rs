//! End-to-end hunt demo on a random map.
//!
//! Run: cargo run --bin hunt-demo

use trove_demos::render;
use trove_hunt::{HuntEvent, Phase, random_hunt_map, solve_with};

fn main() {
    let map = random_hunt_map(12, 10, 3, rand::rng());

    println!("=== Treasure hunt on a random 12x10 map ===");
    println!("Start: {}, Goal: {}", map.start, map.goal);
    for (i, t) in map.treasures.iter().enumerate() {
        println!("T{} -> {t}", i + 1);
    }
    println!();
    print!("{}", render(&map.grid, &[], map.start, map.goal));
    println!();

    let result = solve_with(&map, |ev| match ev {
        HuntEvent::Phase(Phase::Preprocessing) => println!("Computing shortest legs..."),
        HuntEvent::Phase(Phase::Ordering) => println!("Searching treasure orderings..."),
        HuntEvent::Phase(Phase::Stitching) => println!("Stitching final path..."),
        HuntEvent::Route { order, total_distance, improved } if improved => {
            let legs: Vec<String> = order.iter().map(|i| format!("T{}", i + 1)).collect();
            println!("  best so far: {} (distance {total_distance})", legs.join(" -> "));
        }
        _ => {}
    });

    match result {
        Ok(report) => {
            println!();
            println!(
                "Collected {} treasures in {} steps ({} cells explored, {} orderings tried).",
                report.order.len(),
                report.total_distance,
                report.cells_explored,
                report.permutations_evaluated,
            );
            println!();
            print!("{}", render(&map.grid, &report.complete_path, map.start, map.goal));
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
