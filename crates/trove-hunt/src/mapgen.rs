//! Random hunt-map generation.
//!
//! Walls are scattered over the grid interior at a configurable
//! probability, a corridor repair keeps the goal reachable, and
//! treasures land only on cells the start can actually reach, so every
//! generated map is solvable.

use rand::{Rng, RngExt};

use trove_core::{Grid, Point, Terrain};
use trove_search::{CardinalGrid, SearchRange};

use crate::map::HuntMap;

/// Default interior wall probability.
pub const DEFAULT_WALL_PCT: f64 = 0.4;

/// Map generator owning a grid under construction.
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator over the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Scatter walls over the grid interior (the border rows and columns
    /// stay clear) with probability `wall_pct` per cell. Returns the
    /// number of walls placed.
    pub fn random_obstacles(&mut self, wall_pct: f64) -> usize {
        let mut placed = 0;
        for y in 1..self.grid.height() - 1 {
            for x in 1..self.grid.width() - 1 {
                if self.rng.random_bool(wall_pct.clamp(0.0, 1.0)) {
                    self.grid.set(Point::new(x, y), Terrain::Wall);
                    placed += 1;
                }
            }
        }
        placed
    }

    /// Clear an L-shaped corridor (left column, bottom row) if `goal` is
    /// not reachable from `start`.
    pub fn ensure_connected(&mut self, start: Point, goal: Point) {
        let mut sr = SearchRange::new(self.grid.bounds());
        if sr.connected(&CardinalGrid(&self.grid), start, goal) {
            return;
        }
        for y in 0..self.grid.height() {
            self.grid.set(Point::new(0, y), Terrain::Floor);
        }
        for x in 0..self.grid.width() {
            self.grid.set(Point::new(x, self.grid.height() - 1), Terrain::Floor);
        }
    }

    /// Place up to `count` treasures on distinct floor cells reachable
    /// from `start`, avoiding `start` and `goal`. Placement gives up
    /// after a bounded number of attempts, so fewer treasures can be
    /// returned on crowded maps.
    pub fn place_treasures(&mut self, count: usize, start: Point, goal: Point) -> Vec<Point> {
        let mut sr = SearchRange::new(self.grid.bounds());
        let reachable = sr.flood(&CardinalGrid(&self.grid), start);

        let mut treasures: Vec<Point> = Vec::with_capacity(count);
        let mut attempts = 0;
        while treasures.len() < count && attempts < 100 {
            attempts += 1;
            let p = reachable[self.rng.random_range(0..reachable.len())];
            if p != start && p != goal && !treasures.contains(&p) {
                treasures.push(p);
            }
        }
        treasures
    }
}

/// Generate a random solvable [`HuntMap`]: start at the top-left corner,
/// goal at the bottom-right, [`DEFAULT_WALL_PCT`] walls, `treasures`
/// treasures.
pub fn random_hunt_map<R: Rng>(width: i32, height: i32, treasures: usize, rng: R) -> HuntMap {
    let start = Point::ZERO;
    let goal = Point::new(width - 1, height - 1);

    let mut generator = MapGen::with_grid(Grid::new(width, height), rng);
    generator.random_obstacles(DEFAULT_WALL_PCT);
    generator.ensure_connected(start, goal);
    let treasures = generator.place_treasures(treasures, start, goal);

    HuntMap {
        grid: generator.grid,
        start,
        goal,
        treasures,
    }
}
