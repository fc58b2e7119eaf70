//! Search algorithms for small route-planning problems on 2D grids.
//!
//! This crate provides:
//!
//! - **Greedy best-first** grid search ([`SearchRange::greedy_path`]) —
//!   frontier ranked by heuristic alone, the defining behavior of greedy
//!   search (intentionally not A*; paths are valid but not necessarily
//!   shortest).
//! - **A\*** shortest-path search ([`SearchRange::astar_path`])
//! - **Flood fill** / connectivity queries ([`SearchRange::flood`],
//!   [`SearchRange::connected`])
//! - **Exhaustive permutation routing** ([`plan_route`]) — the optimal
//!   order to visit a handful of waypoints between a start and a goal.
//!
//! Grid algorithms operate through [`SearchRange`], which owns and reuses
//! internal caches so repeated queries incur no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Topology`] | flood fill |
//! | [`Heuristic`] : [`Topology`] | greedy best-first |
//! | [`Weighted`] : [`Topology`] | A* (with [`Heuristic`]) |

mod astar;
mod distance;
mod flood;
mod greedy;
mod range;
mod route;
mod topology;

pub use distance::{chebyshev, manhattan};
pub use greedy::{GreedyOutcome, solve_grid_path};
pub use range::{SearchRange, UNREACHABLE};
pub use route::{RoutePlan, plan_route, plan_route_with};
pub use topology::{CardinalGrid, Heuristic, Topology, Weighted};
