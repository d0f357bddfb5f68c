//! Hex tile grids for tactics games: tiles with passability, travel cost and
//! biome, cached neighbor sets, and click/hover path selection.
//!
//! [`HexGrid`] is the coordinate lookup; [`TileNode`] adapts its tiles to
//! the [`hexroute_paths::GridNode`] capability so any search in
//! `hexroute-paths` can walk them.

pub mod config;
pub mod error;
pub mod grid;
pub mod pathfinder;
pub mod tile;

pub use config::{GridConfig, PathfinderConfig};
pub use error::GridError;
pub use grid::{HexGrid, TileNode};
pub use pathfinder::{Pathfinder, Selection};
pub use tile::{Biome, Tile};
