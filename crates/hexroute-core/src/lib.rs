//! **hexroute-core**: hexagonal grid geometry.
//!
//! This crate provides the coordinate algebra the rest of the *hexroute*
//! workspace builds on: cube coordinates with adjacency and distance, the
//! offset (col, row) storage conversions, and grid-to-screen layout.

pub mod error;
pub mod hex;
pub mod layout;
pub mod offset;

pub use error::HexError;
pub use hex::{DIAGONALS, DIRECTIONS, FractionalHex, Hex};
pub use layout::{Layout, Orientation};
pub use offset::{
    OffsetCoord, OffsetLayout, Parity, qoffset_from_cube, qoffset_to_cube, roffset_from_cube,
    roffset_to_cube,
};
