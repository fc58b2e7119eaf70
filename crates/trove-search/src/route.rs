//! Exhaustive waypoint-order routing.
//!
//! Enumerates every ordering of a small waypoint set between a fixed
//! start and goal, keeping the order with the least total Manhattan
//! distance. All N! orderings are evaluated; there is no pruning. Only
//! practical for a handful of waypoints, which is the intended use.

use trove_core::Point;

use crate::distance::manhattan;

/// Result of a [`plan_route`] search. The search always succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// Best visiting order, as indices into the waypoint slice.
    pub order: Vec<usize>,
    /// Total Manhattan distance of start → order → goal.
    pub total_distance: i32,
    /// Number of complete orderings evaluated (N!, with 0! = 1).
    pub permutations_evaluated: u64,
}

/// Find the waypoint visiting order minimizing total Manhattan distance.
///
/// With no waypoints the single trivial route start → goal is evaluated.
/// Duplicate waypoint coordinates are legal and kept as distinct indices.
/// Ties keep the earliest-found order.
pub fn plan_route(start: Point, goal: Point, waypoints: &[Point]) -> RoutePlan {
    plan_route_with(start, goal, waypoints, |_, _, _| {})
}

/// [`plan_route`] with an observer invoked once per complete ordering,
/// with `(order, total_distance, improved)`.
pub fn plan_route_with(
    start: Point,
    goal: Point,
    waypoints: &[Point],
    observe: impl FnMut(&[usize], i32, bool),
) -> RoutePlan {
    let n = waypoints.len();
    let mut search = RouteSearch {
        waypoints,
        goal,
        best_order: Vec::new(),
        best_distance: i32::MAX,
        evaluated: 0,
        observe,
    };
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    search.backtrack(&mut order, &mut visited, start, 0);

    RoutePlan {
        order: search.best_order,
        total_distance: search.best_distance,
        permutations_evaluated: search.evaluated,
    }
}

/// Recursive search state, threaded through the call instead of living
/// in globals so independent searches cannot interfere.
struct RouteSearch<'a, F> {
    waypoints: &'a [Point],
    goal: Point,
    best_order: Vec<usize>,
    best_distance: i32,
    evaluated: u64,
    observe: F,
}

impl<F: FnMut(&[usize], i32, bool)> RouteSearch<'_, F> {
    fn backtrack(&mut self, order: &mut Vec<usize>, visited: &mut [bool], pos: Point, dist: i32) {
        if order.len() == self.waypoints.len() {
            let total = dist + manhattan(pos, self.goal);
            self.evaluated += 1;

            // Strict less-than: ties keep the earliest-found order.
            let improved = total < self.best_distance;
            (self.observe)(order, total, improved);
            if improved {
                self.best_distance = total;
                self.best_order.clear();
                self.best_order.extend_from_slice(order);
            }
            return;
        }

        for i in 0..self.waypoints.len() {
            if visited[i] {
                continue;
            }
            visited[i] = true;
            order.push(i);
            let wp = self.waypoints[i];
            self.backtrack(order, visited, wp, dist + manhattan(pos, wp));
            order.pop();
            visited[i] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial(n: u64) -> u64 {
        (1..=n).product::<u64>().max(1)
    }

    /// Independent oracle: materialize all permutations of 0..n and sum
    /// legs directly.
    fn oracle_best(start: Point, goal: Point, wps: &[Point]) -> i32 {
        fn perms(items: Vec<usize>) -> Vec<Vec<usize>> {
            if items.is_empty() {
                return vec![Vec::new()];
            }
            let mut out = Vec::new();
            for (k, &i) in items.iter().enumerate() {
                let mut rest = items.clone();
                rest.remove(k);
                for mut tail in perms(rest) {
                    tail.insert(0, i);
                    out.push(tail);
                }
            }
            out
        }
        perms((0..wps.len()).collect())
            .into_iter()
            .map(|order| route_length(start, goal, wps, &order))
            .min()
            .unwrap_or(manhattan(start, goal))
    }

    fn route_length(start: Point, goal: Point, wps: &[Point], order: &[usize]) -> i32 {
        let mut pos = start;
        let mut total = 0;
        for &i in order {
            total += manhattan(pos, wps[i]);
            pos = wps[i];
        }
        total + manhattan(pos, goal)
    }

    #[test]
    fn evaluates_exactly_n_factorial_orderings() {
        let start = Point::ZERO;
        let goal = Point::new(6, 6);
        for n in 0..=5usize {
            let wps: Vec<Point> = (0..n).map(|i| Point::new(i as i32, 2 * i as i32)).collect();
            let plan = plan_route(start, goal, &wps);
            assert_eq!(plan.permutations_evaluated, factorial(n as u64));
            assert_eq!(plan.order.len(), n);
        }
    }

    #[test]
    fn empty_waypoints_is_the_direct_route() {
        let plan = plan_route(Point::ZERO, Point::new(10, 10), &[]);
        assert!(plan.order.is_empty());
        assert_eq!(plan.total_distance, 20);
        assert_eq!(plan.permutations_evaluated, 1);
    }

    #[test]
    fn classic_four_treasure_instance() {
        let start = Point::ZERO;
        let goal = Point::new(10, 10);
        let wps = [
            Point::new(2, 3),
            Point::new(7, 2),
            Point::new(5, 8),
            Point::new(9, 5),
        ];
        let plan = plan_route(start, goal, &wps);
        assert_eq!(plan.permutations_evaluated, 24);
        assert_eq!(plan.total_distance, oracle_best(start, goal, &wps));
        // Returned distance must match the legs of the returned order.
        assert_eq!(
            plan.total_distance,
            route_length(start, goal, &wps, &plan.order)
        );
        // The order is a permutation of all indices.
        let mut sorted = plan.order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn ties_keep_the_earliest_order() {
        // Identical waypoints: every ordering ties, so the first complete
        // permutation (ascending indices) wins.
        let wps = [Point::new(3, 3); 3];
        let plan = plan_route(Point::ZERO, Point::new(5, 5), &wps);
        assert_eq!(plan.order, vec![0, 1, 2]);
        assert_eq!(plan.permutations_evaluated, 6);
    }

    #[test]
    fn observer_sees_every_route_and_improvements() {
        let start = Point::ZERO;
        let goal = Point::new(10, 10);
        let wps = [Point::new(2, 3), Point::new(7, 2), Point::new(5, 8)];
        let mut routes = 0u64;
        let mut best_seen = i32::MAX;
        let plan = plan_route_with(start, goal, &wps, |order, total, improved| {
            routes += 1;
            assert_eq!(total, route_length(start, goal, &wps, order));
            assert_eq!(improved, total < best_seen);
            if improved {
                best_seen = total;
            }
        });
        assert_eq!(routes, 6);
        assert_eq!(routes, plan.permutations_evaluated);
        assert_eq!(best_seen, plan.total_distance);
    }

    #[test]
    fn rerun_is_identical() {
        let wps = [Point::new(1, 9), Point::new(9, 1), Point::new(4, 4)];
        let a = plan_route(Point::ZERO, Point::new(9, 9), &wps);
        let b = plan_route(Point::ZERO, Point::new(9, 9), &wps);
        assert_eq!(a, b);
    }
}
