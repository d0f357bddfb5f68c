use std::fmt;

use hexroute_core::HexError;

/// Errors that can occur while building a [`HexGrid`](crate::HexGrid).
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Invalid geometry (coordinate, parity or hex size).
    Hex(HexError),
    /// The requested grid has no cells.
    EmptyGrid { width: i32, height: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(e) => write!(f, "grid: {e}"),
            Self::EmptyGrid { width, height } => {
                write!(f, "grid: {width}x{height} has no cells")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hex(e) => Some(e),
            Self::EmptyGrid { .. } => None,
        }
    }
}

impl From<HexError> for GridError {
    fn from(e: HexError) -> Self {
        Self::Hex(e)
    }
}
