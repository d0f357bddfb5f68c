//! Cube coordinates: [`Hex`] and [`FractionalHex`].
//!
//! A hexagon is addressed by three integer axes `(q, r, s)` constrained to
//! `q + r + s == 0`. All grid algebra (adjacency, distance, rotation, lines,
//! rings) is done in this system; offset indices only exist at the storage
//! boundary (see [`crate::offset`]).

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::HexError;

// ---------------------------------------------------------------------------
// Direction tables
// ---------------------------------------------------------------------------

/// The six edge-adjacent unit offsets, indexed 0–5.
pub const DIRECTIONS: [Hex; 6] = [
    Hex::raw(1, 0, -1),
    Hex::raw(1, -1, 0),
    Hex::raw(0, -1, 1),
    Hex::raw(-1, 0, 1),
    Hex::raw(-1, 1, 0),
    Hex::raw(0, 1, -1),
];

/// The six diagonal offsets (neighbor of two neighbors), indexed 0–5.
pub const DIAGONALS: [Hex; 6] = [
    Hex::raw(2, -1, -1),
    Hex::raw(1, -2, 1),
    Hex::raw(-1, -1, 2),
    Hex::raw(-2, 1, 1),
    Hex::raw(-1, 2, -1),
    Hex::raw(1, 1, -2),
];

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

/// An immutable cube coordinate.
///
/// The components are private so the zero-sum invariant cannot be broken
/// after construction. Every operation returns a new value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HexRepr", into = "HexRepr")
)]
pub struct Hex {
    q: i32,
    r: i32,
    s: i32,
}

impl Hex {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::raw(0, 0, 0);

    const fn raw(q: i32, r: i32, s: i32) -> Self {
        Self { q, r, s }
    }

    /// Create a cube coordinate, failing if `q + r + s != 0`.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if q as i64 + r as i64 + s as i64 != 0 {
            return Err(HexError::InvalidCoordinate { q, r, s });
        }
        Ok(Self::raw(q, r, s))
    }

    /// Create a coordinate from its two axial components, deriving `s`.
    #[inline]
    pub const fn axial(q: i32, r: i32) -> Self {
        Self::raw(q, r, -q - r)
    }

    #[inline]
    pub const fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub const fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub const fn s(self) -> i32 {
        self.s
    }

    /// Component-wise sum. Also available via `a + b`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, b: Hex) -> Self {
        Self::raw(self.q + b.q, self.r + b.r, self.s + b.s)
    }

    /// Component-wise difference. Also available via `a - b`.
    #[inline]
    pub const fn subtract(self, b: Hex) -> Self {
        Self::raw(self.q - b.q, self.r - b.r, self.s - b.s)
    }

    /// Multiply every component by `k`. Also available via `a * k`.
    #[inline]
    pub const fn scale(self, k: i32) -> Self {
        Self::raw(self.q * k, self.r * k, self.s * k)
    }

    /// Rotate 60° anti-clockwise about the origin.
    #[inline]
    pub const fn rotate_left(self) -> Self {
        Self::raw(-self.s, -self.q, -self.r)
    }

    /// Rotate 60° clockwise about the origin.
    #[inline]
    pub const fn rotate_right(self) -> Self {
        Self::raw(-self.r, -self.s, -self.q)
    }

    /// Grid distance from the origin.
    #[inline]
    pub const fn length(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Grid distance between two hexes.
    #[inline]
    pub const fn distance(self, b: Hex) -> i32 {
        self.subtract(b).length()
    }

    /// The unit offset for `direction`. Indices wrap modulo 6.
    #[inline]
    pub const fn direction(direction: usize) -> Hex {
        DIRECTIONS[direction % 6]
    }

    /// The edge-adjacent hex in `direction`. Indices wrap modulo 6.
    #[inline]
    pub const fn neighbor(self, direction: usize) -> Self {
        self.add(Self::direction(direction))
    }

    /// The diagonally adjacent hex in `direction`. Indices wrap modulo 6.
    #[inline]
    pub const fn diagonal_neighbor(self, direction: usize) -> Self {
        self.add(DIAGONALS[direction % 6])
    }

    /// All six edge-adjacent hexes, in [`DIRECTIONS`] order.
    #[inline]
    pub fn neighbors(self) -> [Hex; 6] {
        DIRECTIONS.map(|d| self.add(d))
    }

    /// All six diagonal hexes, in [`DIAGONALS`] order.
    #[inline]
    pub fn diagonals(self) -> [Hex; 6] {
        DIAGONALS.map(|d| self.add(d))
    }

    /// The hexes at exactly `radius` steps, walking the ring in direction
    /// order starting from the hex `radius` steps along direction 4.
    ///
    /// A radius of 0 yields just `self`.
    pub fn ring(self, radius: u32) -> Vec<Hex> {
        if radius == 0 {
            return vec![self];
        }
        let radius = radius as i32;
        let mut out = Vec::with_capacity(6 * radius as usize);
        let mut h = self.add(Self::direction(4).scale(radius));
        for dir in 0..6 {
            for _ in 0..radius {
                out.push(h);
                h = h.neighbor(dir);
            }
        }
        out
    }

    /// Every hex within `radius` steps: `self` first, then each ring outward.
    pub fn spiral(self, radius: u32) -> Vec<Hex> {
        let n = radius as usize;
        let mut out = Vec::with_capacity(1 + 3 * n * (n + 1));
        out.push(self);
        for k in 1..=radius {
            out.extend(self.ring(k));
        }
        out
    }

    /// The `distance + 1` hexes on the straight line from `self` to `b`,
    /// endpoints included.
    pub fn line_to(self, b: Hex) -> Vec<Hex> {
        let n = self.distance(b);
        if n == 0 {
            return vec![self];
        }
        // Nudge both endpoints off hex edges so ties round the same way
        // every time.
        let a = FractionalHex::from(self).nudge();
        let b = FractionalHex::from(b).nudge();
        let step = 1.0 / n as f32;
        (0..=n)
            .filter_map(|i| a.lerp(b, step * i as f32).round())
            .collect()
    }
}

impl Add for Hex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Hex::add(self, rhs)
    }
}

impl Sub for Hex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<i32> for Hex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Hex {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.scale(-1)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// Wire form of [`Hex`]; deserialization re-checks the invariant.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct HexRepr {
    q: i32,
    r: i32,
    s: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<HexRepr> for Hex {
    type Error = HexError;
    fn try_from(v: HexRepr) -> Result<Self, HexError> {
        Hex::new(v.q, v.r, v.s)
    }
}

#[cfg(feature = "serde")]
impl From<Hex> for HexRepr {
    fn from(h: Hex) -> Self {
        HexRepr {
            q: h.q,
            r: h.r,
            s: h.s,
        }
    }
}

// ---------------------------------------------------------------------------
// FractionalHex
// ---------------------------------------------------------------------------

/// A cube coordinate with real components, produced by pixel picking and
/// line interpolation. Convert back to the grid with [`round`](Self::round).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FractionalHex {
    pub q: f32,
    pub r: f32,
    pub s: f32,
}

impl FractionalHex {
    /// Largest magnitude a component may have and still round to a [`Hex`].
    pub const MAX_COMPONENT: f32 = (1u32 << 29) as f32;

    pub const fn new(q: f32, r: f32, s: f32) -> Self {
        Self { q, r, s }
    }

    /// Linear interpolation towards `b` by `t`.
    #[inline]
    pub fn lerp(self, b: FractionalHex, t: f32) -> Self {
        Self::new(
            self.q + (b.q - self.q) * t,
            self.r + (b.r - self.r) * t,
            self.s + (b.s - self.s) * t,
        )
    }

    /// Round to the nearest hex.
    ///
    /// Each axis is rounded independently, then the axis with the largest
    /// rounding error is recomputed from the other two so the result keeps
    /// `q + r + s == 0`. Returns `None` for non-finite input or components
    /// beyond [`FractionalHex::MAX_COMPONENT`].
    pub fn round(self) -> Option<Hex> {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let mut s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        } else {
            s = -q - r;
        }
        // Also rejects NaN.
        if [q, r, s].iter().any(|c| !(c.abs() <= Self::MAX_COMPONENT)) {
            return None;
        }
        Some(Hex::axial(q as i32, r as i32))
    }

    fn nudge(self) -> Self {
        Self::new(self.q + 1e-6, self.r + 1e-6, self.s - 2e-6)
    }
}

impl From<Hex> for FractionalHex {
    fn from(h: Hex) -> Self {
        Self::new(h.q as f32, h.r as f32, h.s as f32)
    }
}
