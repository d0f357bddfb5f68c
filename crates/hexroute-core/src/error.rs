use std::fmt;

/// Errors raised while building hex geometry values.
///
/// These are caller data errors: they surface where the value is built and
/// are never produced by operations on already-valid values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HexError {
    /// A cube coordinate whose components do not sum to zero.
    InvalidCoordinate { q: i32, r: i32, s: i32 },
    /// A raw parity value other than `+1` (even) or `-1` (odd).
    InvalidParity(i32),
    /// A layout hex size that is not strictly positive and finite.
    InvalidHexSize { width: f32, height: f32 },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { q, r, s } => {
                write!(f, "invalid cube coordinate ({q}, {r}, {s}): q + r + s must be 0")
            }
            Self::InvalidParity(p) => {
                write!(f, "invalid offset parity {p}: must be EVEN (+1) or ODD (-1)")
            }
            Self::InvalidHexSize { width, height } => {
                write!(f, "invalid hex size {width}x{height}: must be positive and finite")
            }
        }
    }
}

impl std::error::Error for HexError {}
