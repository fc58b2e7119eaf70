//! Waypoint-routing demo: exhaustive search over treasure orderings.
//!
//! Run: cargo run --bin route-demo

use trove_demos::{ROUTE_GOAL, START, TREASURES};
use trove_search::plan_route_with;

fn main() {
    println!("=== Waypoint routing (exhaustive search) ===");
    println!("Start: {START}, Goal: {ROUTE_GOAL}");
    println!();
    println!("Treasures:");
    for (i, t) in TREASURES.iter().enumerate() {
        println!("T{} -> {t}", i + 1);
    }
    println!();

    let mut route_no = 0u64;
    let plan = plan_route_with(START, ROUTE_GOAL, &TREASURES, |order, total, improved| {
        route_no += 1;
        let legs: Vec<String> = order.iter().map(|i| format!("T{}", i + 1)).collect();
        print!("Route #{route_no}: Start -> {} -> Goal (Distance = {total})", legs.join(" -> "));
        println!("{}", if improved { "  * new best" } else { "" });
    });

    println!();
    println!("=== Best route ===");
    let legs: Vec<String> = plan.order.iter().map(|i| format!("T{}", i + 1)).collect();
    println!("Start -> {} -> Goal", legs.join(" -> "));
    println!("Total distance = {}", plan.total_distance);
    println!("Routes evaluated = {}", plan.permutations_evaluated);
}
