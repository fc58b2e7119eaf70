//! **trove-core** — foundational types for the trove route-planning crates.
//!
//! Provides the geometry primitives ([`Point`], [`Range`]), the obstacle
//! grid ([`Grid`], [`Terrain`]), and the boundary-validation error type
//! ([`InputError`]) shared by the search and hunt crates.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::InputError;
pub use geom::{Point, Range};
pub use grid::{Grid, Terrain};
