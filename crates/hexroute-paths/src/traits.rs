use std::fmt::Debug;
use std::hash::Hash;

/// A node the A* search can walk.
///
/// Implementors are cheap handles (a coordinate plus a borrowed grid, an
/// index, ...) compared and hashed by identity of the cell they denote.
pub trait GridNode: Copy + Eq + Hash + Debug {
    /// Append the nodes reachable from `self` in one step into `buf`. The
    /// caller clears `buf` before calling.
    ///
    /// Impassable cells must already be filtered out here; the search does
    /// not check passability.
    fn neighbors(&self, buf: &mut Vec<Self>);

    /// Cost of stepping into `self` from the adjacent node `from`. Must be
    /// non-negative.
    fn step_cost(&self, from: &Self) -> i32;

    /// Estimate of the cost from `self` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn heuristic(&self, to: &Self) -> i32;
}
