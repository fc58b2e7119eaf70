//! The three-phase hunt solver.
//!
//! 1. **Preprocessing** — A* between every pair of key points (start,
//!    treasures, goal) to build a distance matrix and segment paths.
//! 2. **Ordering** — exhaustive backtracking over the matrix for the
//!    cheapest treasure visiting order.
//! 3. **Stitching** — concatenation of the segment paths along the
//!    chosen order into one walkable start-to-goal path.

use trove_core::Point;
use trove_search::{CardinalGrid, SearchRange, UNREACHABLE};

use crate::error::HuntError;
use crate::map::HuntMap;

/// Solver phase, reported through [`HuntEvent::Phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Preprocessing,
    Ordering,
    Stitching,
}

/// Progress notifications emitted by [`solve_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntEvent<'a> {
    /// A new phase began.
    Phase(Phase),
    /// A cell was expanded during preprocessing A*.
    Explored(Point),
    /// A complete treasure ordering was evaluated. `order` holds indices
    /// into the map's treasure list.
    Route {
        order: &'a [usize],
        total_distance: i32,
        improved: bool,
    },
}

/// Result of a successful hunt solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntReport {
    /// Treasures in optimal visiting order.
    pub order: Vec<Point>,
    /// Total step count of the full route.
    pub total_distance: i32,
    /// Walkable path start → treasures → goal, inclusive.
    pub complete_path: Vec<Point>,
    /// Cells expanded across all preprocessing searches.
    pub cells_explored: usize,
    /// Complete treasure orderings evaluated.
    pub permutations_evaluated: u64,
}

/// Solve a hunt without progress reporting.
pub fn solve(map: &HuntMap) -> Result<HuntReport, HuntError> {
    solve_with(map, |_| {})
}

/// Solve a hunt, emitting a [`HuntEvent`] stream along the way.
pub fn solve_with(
    map: &HuntMap,
    mut events: impl FnMut(HuntEvent<'_>),
) -> Result<HuntReport, HuntError> {
    map.validate()?;

    // Key points: index 0 is the start, 1..=t are treasures, last is the goal.
    let mut points = Vec::with_capacity(map.treasures.len() + 2);
    points.push(map.start);
    points.extend_from_slice(&map.treasures);
    points.push(map.goal);
    let n = points.len();

    // Phase 1: all-pairs shortest legs.
    log::debug!("preprocessing: {} key points on {}", n, map.grid.bounds());
    events(HuntEvent::Phase(Phase::Preprocessing));

    let mut dist = vec![vec![UNREACHABLE; n]; n];
    let mut legs: Vec<Vec<Vec<Point>>> = vec![vec![Vec::new(); n]; n];
    let mut sr = SearchRange::new(map.grid.bounds());
    let topo = CardinalGrid(&map.grid);
    let mut cells_explored = 0usize;

    for i in 0..n {
        dist[i][i] = 0;
        for j in (i + 1)..n {
            let found = sr.astar_path_with(&topo, points[i], points[j], |p| {
                cells_explored += 1;
                events(HuntEvent::Explored(p));
            });
            if let Some(path) = found {
                // Unit step cost: leg distance is the edge count.
                dist[i][j] = (path.len() - 1) as i32;
                dist[j][i] = dist[i][j];
                let mut rev = path.clone();
                rev.reverse();
                legs[i][j] = path;
                legs[j][i] = rev;
            }
        }
    }

    for t in 1..n - 1 {
        if dist[0][t] == UNREACHABLE || dist[t][n - 1] == UNREACHABLE {
            return Err(HuntError::UnreachableTreasure(points[t]));
        }
    }

    // Phase 2: optimal visiting order over the matrix.
    log::debug!("ordering: {} treasures", n - 2);
    events(HuntEvent::Phase(Phase::Ordering));

    let mut ordering = OrderSearch {
        dist: &dist,
        n,
        best_order: Vec::new(),
        best_distance: i32::MAX,
        evaluated: 0,
        events: &mut events,
    };
    let mut order = Vec::with_capacity(n - 2);
    let mut visited = vec![false; n - 2];
    ordering.backtrack(&mut order, &mut visited, 0, 0);

    let best_order = ordering.best_order;
    let best_distance = ordering.best_distance;
    let evaluated = ordering.evaluated;
    if best_distance == i32::MAX {
        return Err(HuntError::NoRoute);
    }

    // Phase 3: stitch segment paths along the best order.
    log::debug!("stitching: distance {}", best_distance);
    events(HuntEvent::Phase(Phase::Stitching));

    let mut route = Vec::with_capacity(n);
    route.push(0);
    route.extend(best_order.iter().map(|&t| t + 1));
    route.push(n - 1);

    let mut complete_path: Vec<Point> = Vec::new();
    for w in route.windows(2) {
        let seg = &legs[w[0]][w[1]];
        // Segments share their endpoints; skip the duplicate join point.
        let skip = usize::from(!complete_path.is_empty());
        complete_path.extend_from_slice(&seg[skip..]);
    }

    Ok(HuntReport {
        order: best_order.iter().map(|&t| map.treasures[t]).collect(),
        total_distance: best_distance,
        complete_path,
        cells_explored,
        permutations_evaluated: evaluated,
    })
}

/// Backtracking over the leg matrix. Indices in `best_order` refer to
/// treasures (matrix row t + 1).
struct OrderSearch<'a, F> {
    dist: &'a [Vec<i32>],
    n: usize,
    best_order: Vec<usize>,
    best_distance: i32,
    evaluated: u64,
    events: &'a mut F,
}

impl<F: FnMut(HuntEvent<'_>)> OrderSearch<'_, F> {
    /// `at` is a matrix index; treasure t is matrix index t + 1.
    fn backtrack(&mut self, order: &mut Vec<usize>, visited: &mut [bool], at: usize, cost: i32) {
        let treasures = self.n - 2;
        if order.len() == treasures {
            let to_goal = self.dist[at][self.n - 1];
            if to_goal == UNREACHABLE {
                return;
            }
            let total = cost + to_goal;
            self.evaluated += 1;
            let improved = total < self.best_distance;
            (self.events)(HuntEvent::Route {
                order,
                total_distance: total,
                improved,
            });
            if improved {
                self.best_distance = total;
                self.best_order.clear();
                self.best_order.extend_from_slice(order);
            }
            return;
        }

        for t in 0..treasures {
            if visited[t] {
                continue;
            }
            let leg = self.dist[at][t + 1];
            if leg == UNREACHABLE {
                continue;
            }
            visited[t] = true;
            order.push(t);
            self.backtrack(order, visited, t + 1, cost + leg);
            order.pop();
            visited[t] = false;
        }
    }
}
