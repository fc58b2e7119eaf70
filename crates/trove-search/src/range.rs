use trove_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

/// Per-cell search state, lazily invalidated via a generation counter.
#[derive(Clone)]
pub(crate) struct Node {
    /// Accumulated cost (A* only; unused by greedy search).
    pub(crate) g: i32,
    /// Ranking key: g + estimate for A*, bare heuristic for greedy.
    pub(crate) key: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// True while the cell sits on the frontier; cleared at expansion.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            key: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `key` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "no path exists".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a grid rectangle.
///
/// `SearchRange` owns all internal caches (node arrays, flood-fill labels,
/// a neighbor scratch buffer) so that repeated queries incur no
/// allocations after the first use. Each value is independent; separate
/// searches share no state.
pub struct SearchRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // greedy best-first caches
    pub(crate) greedy_nodes: Vec<Node>,
    pub(crate) greedy_generation: u32,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    // flood-fill caches
    pub(crate) flood_labels: Vec<i32>,
    pub(crate) flood_stack: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchRange {
    /// Create a new `SearchRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            greedy_nodes: vec![Node::default(); len],
            greedy_generation: 0,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            flood_labels: vec![-1; len],
            flood_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are preserved
    /// and only generation counters are bumped so stale entries are
    /// ignored. Otherwise caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.greedy_nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.greedy_generation = self.greedy_generation.wrapping_add(1);
            self.astar_generation = self.astar_generation.wrapping_add(1);
            return;
        }

        self.greedy_nodes.clear();
        self.greedy_nodes.resize(new_len, Node::default());
        self.greedy_generation = 0;

        self.astar_nodes.clear();
        self.astar_nodes.resize(new_len, Node::default());
        self.astar_generation = 0;

        self.flood_labels.clear();
        self.flood_labels.resize(new_len, -1);
        self.flood_stack.clear();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
