//! Shared fixtures for the trove demo binaries.

use trove_core::{Grid, Point};

/// Start corner used by all demos.
pub const START: Point = Point::ZERO;

/// Goal of the waypoint-routing demo.
pub const ROUTE_GOAL: Point = Point::new(10, 10);

/// The classic four-treasure routing instance.
pub const TREASURES: [Point; 4] = [
    Point::new(2, 3),
    Point::new(7, 2),
    Point::new(5, 8),
    Point::new(9, 5),
];

/// Goal of the grid-search demo.
pub const GRID_GOAL: Point = Point::new(7, 7);

/// The classic 8×8 obstacle grid.
pub fn demo_grid() -> Grid {
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
    .expect("demo grid literal is well formed")
}

/// Render a grid with a path overlay: `S` start, `G` goal, `*` path,
/// `#` wall, `.` floor.
pub fn render(grid: &Grid, path: &[Point], start: Point, goal: Point) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if path.contains(&p) {
                '*'
            } else if grid.walkable(p) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
            out.push(' ');
        }
        out.pop();
        out.push('\n');
    }
    out
}
