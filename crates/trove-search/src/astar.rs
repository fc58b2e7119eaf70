use std::collections::BinaryHeap;

use trove_core::Point;

use crate::SearchRange;
use crate::range::{NodeRef, UNREACHABLE};
use crate::topology::{Heuristic, Weighted};

impl SearchRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no
    /// path exists within the current range.
    pub fn astar_path<T: Weighted + Heuristic>(
        &mut self,
        topo: &T,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.astar_path_with(topo, from, to, |_| {})
    }

    /// A* with an observer invoked for each cell as it is expanded.
    pub fn astar_path_with<T: Weighted + Heuristic>(
        &mut self,
        topo: &T,
        from: Point,
        to: Point,
        mut observe: impl FnMut(Point),
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            observe(from);
            return Some(vec![from]);
        }

        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.key = topo.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            key: self.astar_nodes[start_idx].key,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.astar_nodes[ci].generation != cur_gen || !self.astar_nodes[ci].open {
                continue;
            }

            self.astar_nodes[ci].open = false;
            let current_point = self.point(ci);
            observe(current_point);

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.astar_nodes[ci].g;

            nbuf.clear();
            topo.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + topo.cost(current_point, np);

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.key = tentative_g + topo.estimate(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, key: n.key });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.astar_nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::topology::CardinalGrid;
    use trove_core::Grid;

    #[test]
    fn shortest_on_open_grid() {
        let grid = Grid::new(10, 10);
        let mut sr = SearchRange::new(grid.bounds());
        let path = sr
            .astar_path(&CardinalGrid(&grid), Point::ZERO, Point::new(9, 4))
            .unwrap();
        assert_eq!(path.len() as i32, manhattan(Point::ZERO, Point::new(9, 4)) + 1);
        assert_eq!(path[0], Point::ZERO);
        assert_eq!(path[path.len() - 1], Point::new(9, 4));
    }

    #[test]
    fn shortest_around_wall() {
        let grid = Grid::from_rows(&[
            ".....",
            ".....",
            "####.",
            ".....",
            ".....",
        ])
        .unwrap();
        let mut sr = SearchRange::new(grid.bounds());
        let path = sr
            .astar_path(&CardinalGrid(&grid), Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        // Only opening is column 4: 4 right + 4 down + 4 left = 12 steps.
        assert_eq!(path.len(), 13);
        for w in path.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1);
        }
    }

    #[test]
    fn no_path_returns_none() {
        let grid = Grid::from_rows(&["..#..", "..#..", "..#.."]).unwrap();
        let mut sr = SearchRange::new(grid.bounds());
        assert_eq!(
            sr.astar_path(&CardinalGrid(&grid), Point::ZERO, Point::new(4, 0)),
            None
        );
    }

    #[test]
    fn same_cell_is_trivial() {
        let grid = Grid::new(3, 3);
        let mut sr = SearchRange::new(grid.bounds());
        let p = Point::new(1, 1);
        assert_eq!(sr.astar_path(&CardinalGrid(&grid), p, p), Some(vec![p]));
    }

    #[test]
    fn observer_reports_expansions() {
        let grid = Grid::new(5, 5);
        let mut sr = SearchRange::new(grid.bounds());
        let mut count = 0usize;
        sr.astar_path_with(&CardinalGrid(&grid), Point::ZERO, Point::new(4, 4), |_| {
            count += 1;
        });
        assert!(count >= 9); // at least the path cells
    }
}
