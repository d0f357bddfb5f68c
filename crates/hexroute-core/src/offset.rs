//! Offset (col, row) storage indices and their conversion to cube
//! coordinates.
//!
//! Two families exist: *Q-offset* shifts alternate columns (flat-top
//! layouts), *R-offset* shifts alternate rows (pointy-top layouts). A
//! [`Parity`] picks whether the even or the odd columns/rows are pushed by
//! half a hex. Each `*_from_cube` is the exact inverse of the matching
//! `*_to_cube` for the same parity.

use std::fmt;

use crate::error::HexError;
use crate::hex::Hex;

// ---------------------------------------------------------------------------
// Parity
// ---------------------------------------------------------------------------

/// Which alternating rows/columns are shifted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// The signed factor used by the conversion formulas: `+1` or `-1`.
    #[inline]
    pub const fn offset(self) -> i32 {
        match self {
            Self::Even => 1,
            Self::Odd => -1,
        }
    }
}

impl TryFrom<i32> for Parity {
    type Error = HexError;

    fn try_from(v: i32) -> Result<Self, HexError> {
        match v {
            1 => Ok(Self::Even),
            -1 => Ok(Self::Odd),
            other => Err(HexError::InvalidParity(other)),
        }
    }
}

impl From<Parity> for i32 {
    fn from(p: Parity) -> Self {
        p.offset()
    }
}

// ---------------------------------------------------------------------------
// OffsetCoord
// ---------------------------------------------------------------------------

/// A rectangular storage index for a hex grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoord {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for OffsetCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

// Half-step shift for index `i`. The numerator is always even, so the
// division is exact for negative indices too.
#[inline]
const fn shift(parity: Parity, i: i32) -> i32 {
    (i + parity.offset() * (i & 1)) / 2
}

/// Flat-top: cube → offset.
#[inline]
pub const fn qoffset_from_cube(parity: Parity, h: Hex) -> OffsetCoord {
    OffsetCoord::new(h.q(), h.r() + shift(parity, h.q()))
}

/// Flat-top: offset → cube.
#[inline]
pub const fn qoffset_to_cube(parity: Parity, o: OffsetCoord) -> Hex {
    Hex::axial(o.col, o.row - shift(parity, o.col))
}

/// Pointy-top: cube → offset.
#[inline]
pub const fn roffset_from_cube(parity: Parity, h: Hex) -> OffsetCoord {
    OffsetCoord::new(h.q() + shift(parity, h.r()), h.r())
}

/// Pointy-top: offset → cube.
#[inline]
pub const fn roffset_to_cube(parity: Parity, o: OffsetCoord) -> Hex {
    Hex::axial(o.col - shift(parity, o.row), o.row)
}

// ---------------------------------------------------------------------------
// OffsetLayout
// ---------------------------------------------------------------------------

/// Selects the offset family used to lay out a rectangular grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetLayout {
    /// Column-major, flat-top hexes.
    QOffset,
    /// Row-major, pointy-top hexes.
    #[default]
    ROffset,
}

impl OffsetLayout {
    pub const fn to_cube(self, parity: Parity, o: OffsetCoord) -> Hex {
        match self {
            Self::QOffset => qoffset_to_cube(parity, o),
            Self::ROffset => roffset_to_cube(parity, o),
        }
    }

    pub const fn from_cube(self, parity: Parity, h: Hex) -> OffsetCoord {
        match self {
            Self::QOffset => qoffset_from_cube(parity, h),
            Self::ROffset => roffset_from_cube(parity, h),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn parity_uses_integer_form() {
        assert_eq!(serde_json::to_string(&Parity::Odd).unwrap(), "-1");
        let p: Parity = serde_json::from_str("1").unwrap();
        assert_eq!(p, Parity::Even);
        assert!(serde_json::from_str::<Parity>("0").is_err());
    }
}
