//! Greedy best-first grid search.
//!
//! The frontier is ranked by the heuristic alone — accumulated path cost
//! never participates. The search therefore expands few cells on open
//! terrain but may return a non-shortest path around obstacles. That is
//! the defining behavior of greedy search and is preserved here; use
//! [`astar_path`](crate::SearchRange::astar_path) when the shortest path
//! matters.

use std::collections::BinaryHeap;

use trove_core::{Grid, InputError, Point};

use crate::SearchRange;
use crate::range::NodeRef;
use crate::topology::{CardinalGrid, Heuristic};

/// Result of a greedy best-first search.
///
/// An unreachable goal is an ordinary outcome: `found` is false and
/// `path` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyOutcome {
    /// Start-to-goal positions, inclusive; empty when no path exists.
    pub path: Vec<Point>,
    /// Whether the goal was reached.
    pub found: bool,
    /// Number of cells dequeued and expanded.
    pub cells_explored: usize,
}

impl GreedyOutcome {
    fn not_found(cells_explored: usize) -> Self {
        Self {
            path: Vec::new(),
            found: false,
            cells_explored,
        }
    }
}

impl SearchRange {
    /// Greedy best-first search from `from` to `to`.
    ///
    /// Equivalent to [`greedy_path_with`](Self::greedy_path_with) without
    /// an observer.
    pub fn greedy_path<T: Heuristic>(&mut self, topo: &T, from: Point, to: Point) -> GreedyOutcome {
        self.greedy_path_with(topo, from, to, |_, _| {})
    }

    /// Greedy best-first search, invoking `observe(position, h)` for each
    /// cell as it is dequeued and expanded.
    ///
    /// Positions outside the range produce a not-found outcome with zero
    /// cells explored. When `from == to`, the start is still expanded
    /// like any other cell, so `cells_explored` is 1.
    pub fn greedy_path_with<T: Heuristic>(
        &mut self,
        topo: &T,
        from: Point,
        to: Point,
        mut observe: impl FnMut(Point, i32),
    ) -> GreedyOutcome {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return GreedyOutcome::not_found(0);
        };

        // Bump generation to lazily invalidate all nodes.
        self.greedy_generation = self.greedy_generation.wrapping_add(1);
        let cur_gen = self.greedy_generation;

        {
            let node = &mut self.greedy_nodes[start_idx];
            node.key = topo.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            key: self.greedy_nodes[start_idx].key,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut explored = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale duplicates of already-expanded cells.
            if self.greedy_nodes[ci].generation != cur_gen || !self.greedy_nodes[ci].open {
                continue;
            }

            self.greedy_nodes[ci].open = false;
            explored += 1;
            let current_point = self.point(ci);
            observe(current_point, self.greedy_nodes[ci].key);

            if ci == goal_idx {
                break 'search true;
            }

            nbuf.clear();
            topo.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };

                let n = &mut self.greedy_nodes[ni];
                if n.generation == cur_gen && !n.open {
                    // Already expanded; never revisited.
                    continue;
                }

                // Discovery (or re-discovery while still pending): rank by
                // the heuristic only, and re-point the predecessor. A
                // duplicate frontier entry is pushed rather than updating
                // the old one; lazy deletion discards it above.
                n.key = topo.estimate(np, to);
                n.parent = ci;
                n.generation = cur_gen;
                n.open = true;

                open.push(NodeRef { idx: ni, key: n.key });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return GreedyOutcome::not_found(explored);
        }

        // Walk predecessors goal → start, then reverse.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.greedy_nodes[ci].parent;
        }
        path.reverse();

        GreedyOutcome {
            path,
            found: true,
            cells_explored: explored,
        }
    }
}

/// Validated greedy search over a [`Grid`] with 4-directional movement.
///
/// Rejects an empty grid and out-of-bounds or blocked endpoints before
/// running; an unreachable goal is not an error.
pub fn solve_grid_path(grid: &Grid, start: Point, goal: Point) -> Result<GreedyOutcome, InputError> {
    grid.ensure_walkable(start)?;
    grid.ensure_walkable(goal)?;
    let mut sr = SearchRange::new(grid.bounds());
    Ok(sr.greedy_path(&CardinalGrid(grid), start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use trove_core::Terrain;

    // Grid from the classic demo: 8x8 with three wall clusters.
    fn demo_grid() -> Grid {
        Grid::from_rows(&[
            "........",
            "..###...",
            "..#.....",
            "..#..##.",
            ".....##.",
            "###.....",
            "........",
            "........",
        ])
        .unwrap()
    }

    fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, goal: Point) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for p in path {
            assert!(grid.walkable(*p), "path crosses blocked cell {p}");
        }
        for w in path.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1, "non-unit step {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn finds_path_on_demo_grid() {
        let grid = demo_grid();
        let out = solve_grid_path(&grid, Point::new(0, 0), Point::new(7, 7)).unwrap();
        assert!(out.found);
        assert_valid_path(&grid, &out.path, Point::new(0, 0), Point::new(7, 7));
        assert!(out.cells_explored >= out.path.len());
    }

    #[test]
    fn start_equals_goal_explores_one_cell() {
        let grid = Grid::new(5, 5);
        let p = Point::new(2, 2);
        let out = solve_grid_path(&grid, p, p).unwrap();
        assert!(out.found);
        assert_eq!(out.path, vec![p]);
        assert_eq!(out.cells_explored, 1);
    }

    #[test]
    fn walled_off_goal_is_not_found() {
        let grid = Grid::from_rows(&[
            ".....",
            ".###.",
            ".#.#.",
            ".###.",
            ".....",
        ])
        .unwrap();
        let out = solve_grid_path(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert!(!out.found);
        assert!(out.path.is_empty());
        // Everything outside the box gets expanded before giving up.
        assert_eq!(out.cells_explored, 25 - 8 - 1);
    }

    #[test]
    fn observer_reports_each_expansion_once() {
        let grid = Grid::new(4, 4);
        let goal = Point::new(3, 3);
        let mut sr = SearchRange::new(grid.bounds());
        let mut seen = Vec::new();
        let out = sr.greedy_path_with(&CardinalGrid(&grid), Point::ZERO, goal, |p, h| {
            assert_eq!(h, manhattan(p, goal));
            seen.push(p);
        });
        assert_eq!(seen.len(), out.cells_explored);
        assert_eq!(seen.first(), Some(&Point::ZERO));
        assert_eq!(seen.last(), Some(&goal));
        // No cell is ever expanded twice.
        let mut uniq = seen.clone();
        uniq.sort();
        uniq.dedup();
        assert_eq!(uniq.len(), seen.len());
    }

    #[test]
    fn open_terrain_walks_straight_to_goal() {
        // With no obstacles the heuristic strictly decreases along the
        // expansion, so the path has Manhattan length.
        let grid = Grid::new(10, 10);
        let start = Point::new(1, 2);
        let goal = Point::new(8, 6);
        let out = solve_grid_path(&grid, start, goal).unwrap();
        assert!(out.found);
        assert_eq!(out.path.len() as i32, manhattan(start, goal) + 1);
    }

    #[test]
    fn rerun_is_deterministic_for_found_and_length() {
        let grid = demo_grid();
        let mut sr = SearchRange::new(grid.bounds());
        let a = sr.greedy_path(&CardinalGrid(&grid), Point::new(0, 0), Point::new(7, 7));
        let b = sr.greedy_path(&CardinalGrid(&grid), Point::new(0, 0), Point::new(7, 7));
        assert_eq!(a.found, b.found);
        assert_eq!(a.path.len(), b.path.len());
        assert_eq!(a.cells_explored, b.cells_explored);
    }

    #[test]
    fn validation_rejects_bad_endpoints() {
        let mut grid = Grid::new(3, 3);
        grid.set(Point::new(1, 1), Terrain::Wall);
        assert_eq!(
            solve_grid_path(&grid, Point::new(9, 0), Point::ZERO),
            Err(InputError::OutOfBounds(Point::new(9, 0)))
        );
        assert_eq!(
            solve_grid_path(&grid, Point::ZERO, Point::new(1, 1)),
            Err(InputError::Blocked(Point::new(1, 1)))
        );
        let empty = Grid::new(0, 3);
        assert_eq!(
            solve_grid_path(&empty, Point::ZERO, Point::ZERO),
            Err(InputError::EmptyGrid)
        );
    }

    #[test]
    fn greedy_detour_may_exceed_shortest_length() {
        // A pocket facing the goal lures the heuristic in; the resulting
        // path is valid but longer than optimal. This behavior is part of
        // the contract — greedy must not be quietly turned into A*.
        let grid = Grid::from_rows(&[
            "........",
            "...##...",
            "...#.#..",
            "...#.#..",
            "...###..",
            "........",
        ])
        .unwrap();
        let start = Point::new(0, 3);
        let goal = Point::new(7, 3);
        let out = solve_grid_path(&grid, start, goal).unwrap();
        assert!(out.found);
        assert_valid_path(&grid, &out.path, start, goal);
        assert!(out.path.len() as i32 >= manhattan(start, goal) + 1);
    }
}
