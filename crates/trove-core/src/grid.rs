//! A rectangular grid of free and blocked cells.

use crate::error::InputError;
use crate::geom::{Point, Range};

/// Cell state: free to walk on, or blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Floor,
    Wall,
}

/// A 2D obstacle grid with fixed bounds.
///
/// Cells are addressed by [`Point`]; out-of-bounds positions read as
/// blocked via [`walkable`](Grid::walkable).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Terrain>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given size, all floor.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Terrain::Floor; bounds.len()],
            bounds,
        }
    }

    /// Parse a grid from text rows, `.` for floor and `#` for wall.
    ///
    /// Returns [`InputError::EmptyGrid`] for no rows / empty rows and
    /// [`InputError::RaggedRows`] when row lengths differ.
    pub fn from_rows(rows: &[&str]) -> Result<Self, InputError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 || height == 0 {
            return Err(InputError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let mut n = 0;
            for ch in row.chars() {
                cells.push(if ch == '#' { Terrain::Wall } else { Terrain::Floor });
                n += 1;
            }
            if n != width {
                return Err(InputError::RaggedRows);
            }
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The terrain at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the terrain at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, t: Terrain) {
        if let Some(i) = self.index(p) {
            self.cells[i] = t;
        }
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn walkable(&self, p: Point) -> bool {
        self.at(p) == Some(Terrain::Floor)
    }

    /// Validate that `p` is a legal start/goal/waypoint position.
    pub fn ensure_walkable(&self, p: Point) -> Result<(), InputError> {
        if self.bounds.is_empty() {
            return Err(InputError::EmptyGrid);
        }
        match self.at(p) {
            None => Err(InputError::OutOfBounds(p)),
            Some(Terrain::Wall) => Err(InputError::Blocked(p)),
            Some(Terrain::Floor) => Ok(()),
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }
}
