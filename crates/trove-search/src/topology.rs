use trove_core::{Grid, Point};

use crate::distance::manhattan;

/// Minimal search interface — provides neighbor enumeration.
pub trait Topology {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Topology with weighted (positive-cost) edges, for A*.
pub trait Weighted: Topology {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Topology with a distance estimate, for heuristic-ranked searches.
pub trait Heuristic: Topology {
    /// Estimate of the remaining distance from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// 4-directional movement over a [`Grid`]: walkable cardinal neighbors,
/// unit step cost, Manhattan estimate.
#[derive(Clone, Copy)]
pub struct CardinalGrid<'a>(pub &'a Grid);

impl Topology for CardinalGrid<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.0.walkable(n) {
                buf.push(n);
            }
        }
    }
}

impl Weighted for CardinalGrid<'_> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl Heuristic for CardinalGrid<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
