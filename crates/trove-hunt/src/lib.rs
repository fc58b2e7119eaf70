//! **trove-hunt** — the combined treasure-hunt pipeline.
//!
//! A [`HuntMap`] holds an obstacle grid plus a start, a goal, and a set
//! of treasures. [`solve`] finds the cheapest way to collect every
//! treasure and reach the goal in three phases: all-pairs A* distances,
//! exhaustive ordering, and path stitching. [`MapGen`] produces random
//! solvable maps for demos and tests.

pub mod error;
pub mod map;
pub mod mapgen;
pub mod solver;

pub use error::HuntError;
pub use map::HuntMap;
pub use mapgen::{MapGen, random_hunt_map};
pub use solver::{HuntEvent, HuntReport, Phase, solve, solve_with};
