//! Boundary-validation errors.
//!
//! The search algorithms themselves never fail: an unreachable goal is an
//! ordinary outcome. Malformed input, on the other hand, is rejected here
//! before any search state is built.

use std::error::Error;
use std::fmt;

use crate::geom::Point;

/// Invalid problem input detected before a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The grid has zero area.
    EmptyGrid,
    /// A start, goal, or waypoint lies outside the grid.
    OutOfBounds(Point),
    /// A start, goal, or waypoint sits on a blocked cell.
    Blocked(Point),
    /// Grid rows of unequal length were supplied.
    RaggedRows,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyGrid => write!(f, "grid has zero area"),
            InputError::OutOfBounds(p) => write!(f, "position {p} is outside the grid"),
            InputError::Blocked(p) => write!(f, "position {p} is blocked"),
            InputError::RaggedRows => write!(f, "grid rows have unequal lengths"),
        }
    }
}

impl Error for InputError {}
