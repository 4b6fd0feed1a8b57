use trek_core::{Bounds, Position};

/// One A* result: the tiles walked from start to goal inclusive and the
/// total cost of entering every tile after the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSegment {
    pub positions: Vec<Position>,
    pub cost: i32,
}

impl PathSegment {
    /// First tile of the segment.
    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    /// Last tile of the segment.
    pub fn goal(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    /// Number of moves (tiles minus one).
    pub fn steps(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    /// The same tiles walked backwards, keeping the cost unchanged.
    pub fn reversed(&self) -> PathSegment {
        let mut positions = self.positions.clone();
        positions.reverse();
        PathSegment {
            positions,
            cost: self.cost,
        }
    }
}

// ---------------------------------------------------------------------------
// Internal node for A* priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` then by push order for use
/// in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the earliest pushed.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel g-score of a tile not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Reusable search state for one map layer.
///
/// `PathRange` owns the node array and scratch buffers, so repeated
/// searches over grids of the same size incur no allocations after the
/// first use.
pub struct PathRange {
    pub(crate) bounds: Bounds,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Position>,
}

impl PathRange {
    /// Create a new `PathRange` for grids of the given extent.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the extent, reallocating the node array only when the new
    /// extent does not fit the existing one.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        let new_len = bounds.len();
        self.bounds = bounds;
        if new_len <= self.nodes.len() {
            // Stale entries are ignored once the generation moves on.
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The extent being searched.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub(crate) fn idx(&self, p: Position) -> Option<usize> {
        self.bounds.index(p)
    }

    #[inline]
    pub(crate) fn position(&self, idx: usize) -> Position {
        self.bounds.position(idx)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn segment_round_trip() {
        let seg = PathSegment {
            positions: vec![Position::new(3, 7), Position::new(3, 8)],
            cost: 42,
        };
        let json = serde_json::to_string(&seg).unwrap();
        let back: PathSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(seg, back);
    }
}
