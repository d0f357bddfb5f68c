//! Path search for hexagonal grids.
//!
//! This crate provides a generic A\* engine ([`PathSearch::search`]) over
//! any type implementing [`GridNode`]: something that can enumerate its
//! passable neighbors, report the cost of stepping into it and estimate the
//! remaining cost to a goal.
//!
//! [`PathSearch`] owns and reuses its internal tables so that repeated
//! queries avoid reallocating after warm-up. [`search`] is a one-shot
//! convenience over a fresh state.
//!
//! An unreachable goal is reported as `None`, never as an error.

mod astar;
mod distance;
mod search;
mod traits;

pub use astar::search;
pub use distance::{hex_distance, scaled_hex_distance};
pub use search::{Path, PathSearch};
pub use traits::GridNode;
