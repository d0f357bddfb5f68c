use std::collections::{BinaryHeap, HashMap};

use crate::traits::GridNode;

/// An ordered route returned by a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N> {
    /// Nodes from start to goal, both included.
    pub nodes: Vec<N>,
    /// Sum of the step costs of every node after the start.
    pub cost: i32,
}

impl<N> Path<N> {
    /// Number of nodes in the path (steps + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for paths produced by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of moves along the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Convert every node, keeping the order and the cost.
    pub fn map<M>(self, f: impl FnMut(N) -> M) -> Path<M> {
        Path {
            nodes: self.nodes.into_iter().map(f).collect(),
            cost: self.cost,
        }
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Internal per-node search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Frontier entry. Ordered so `BinaryHeap` (a max-heap) pops the lowest
/// `f`, then the lowest `h`, then the earliest pushed.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable A* search state.
///
/// `PathSearch` owns the frontier, the node table and the scratch buffers,
/// so repeated searches on the same value only allocate when they visit
/// more nodes than any previous one. Every call starts from a clean state.
pub struct PathSearch<N: GridNode> {
    pub(crate) nodes: Vec<N>,
    pub(crate) states: Vec<Node>,
    pub(crate) index: HashMap<N, usize>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) seq: u64,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<N>,
    pub(crate) max_expansions: Option<usize>,
    pub(crate) expanded: usize,
}

impl<N: GridNode> Default for PathSearch<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: GridNode> PathSearch<N> {
    /// Create an unbounded search.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            states: Vec::new(),
            index: HashMap::new(),
            open: BinaryHeap::new(),
            seq: 0,
            nbuf: Vec::with_capacity(6),
            max_expansions: None,
            expanded: 0,
        }
    }

    /// Create a search that gives up (reporting no path) after expanding
    /// `limit` nodes.
    pub fn with_max_expansions(limit: usize) -> Self {
        Self {
            max_expansions: Some(limit),
            ..Self::new()
        }
    }

    /// The expansion limit, if any.
    #[inline]
    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Number of nodes expanded by the last search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.states.clear();
        self.index.clear();
        self.open.clear();
        self.seq = 0;
        self.expanded = 0;
    }

    /// Register `n` as seen, returning its slot.
    pub(crate) fn intern(&mut self, n: N) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(n);
        self.states.push(Node {
            g: i32::MAX,
            parent: NO_PARENT,
            closed: false,
        });
        self.index.insert(n, idx);
        idx
    }

    pub(crate) fn push_open(&mut self, idx: usize, g: i32, h: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.open.push(NodeRef {
            idx,
            g,
            f: g.saturating_add(h),
            h,
            seq,
        });
    }
}
