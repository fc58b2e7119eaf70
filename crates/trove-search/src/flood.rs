//! Flood fill and connectivity queries.

use trove_core::Point;

use crate::SearchRange;
use crate::topology::Topology;

impl SearchRange {
    /// Flood-fill from `from` and return every connected position.
    ///
    /// Connectivity is defined by the topology's neighbor relation. The
    /// result always contains `from` itself when it lies in the range.
    pub fn flood<T: Topology>(&mut self, topo: &T, from: Point) -> Vec<Point> {
        for v in self.flood_labels.iter_mut() {
            *v = -1;
        }

        let mut result = Vec::new();
        let Some(si) = self.idx(from) else {
            return result;
        };

        let mut nbuf = std::mem::take(&mut self.nbuf);

        // Iterative DFS over the label cache.
        self.flood_stack.clear();
        self.flood_stack.push(si);
        self.flood_labels[si] = 0;
        result.push(from);

        while let Some(ci) = self.flood_stack.pop() {
            let cp = self.point(ci);
            nbuf.clear();
            topo.neighbors(cp, &mut nbuf);

            for i in 0..nbuf.len() {
                let np = nbuf[i];
                if let Some(ni) = self.idx(np) {
                    if self.flood_labels[ni] < 0 {
                        self.flood_labels[ni] = 0;
                        self.flood_stack.push(ni);
                        result.push(np);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        result
    }

    /// Whether `b` can be reached from `a`.
    pub fn connected<T: Topology>(&mut self, topo: &T, a: Point, b: Point) -> bool {
        let Some(bi) = self.idx(b) else {
            return false;
        };
        self.flood(topo, a);
        self.flood_labels[bi] >= 0
    }
}
