//! Grid-to-screen mapping for hexagonal tessellations.
//!
//! A [`Layout`] places hex centers in a 2D plane given an [`Orientation`],
//! the hex size (center-to-corner, per axis) and the pixel position of the
//! origin hex. Picking goes the other way through [`FractionalHex::round`].

use std::f32::consts::PI;

use glam::Vec2;

use crate::error::HexError;
use crate::hex::{FractionalHex, Hex};
use crate::offset::OffsetLayout;

const SQRT_3: f32 = 1.732_050_8;

/// Forward (hex → pixel) and backward (pixel → hex) 2x2 matrices plus the
/// angle of the first corner, in sixths of a turn.
struct Matrix {
    f: [f32; 4],
    b: [f32; 4],
    start_angle: f32,
}

static POINTY: Matrix = Matrix {
    f: [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
    b: [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
    start_angle: 0.5,
};

static FLAT: Matrix = Matrix {
    f: [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
    b: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
    start_angle: 0.0,
};

/// Hexagon orientation on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// A vertex points up; rows are straight.
    #[default]
    Pointy,
    /// An edge is on top; columns are straight.
    Flat,
}

impl Orientation {
    fn matrix(self) -> &'static Matrix {
        match self {
            Self::Pointy => &POINTY,
            Self::Flat => &FLAT,
        }
    }
}

impl From<OffsetLayout> for Orientation {
    /// The orientation whose straight axis matches the offset family.
    fn from(l: OffsetLayout) -> Self {
        match l {
            OffsetLayout::QOffset => Self::Flat,
            OffsetLayout::ROffset => Self::Pointy,
        }
    }
}

/// Maps hexes to pixel positions and back.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    orientation: Orientation,
    size: Vec2,
    origin: Vec2,
}

impl Layout {
    /// Create a layout. Both size components must be positive and finite.
    pub fn new(orientation: Orientation, size: Vec2, origin: Vec2) -> Result<Self, HexError> {
        if !(size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(HexError::InvalidHexSize {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self {
            orientation,
            size,
            origin,
        })
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Pixel position of the center of `h`.
    pub fn hex_to_pixel(&self, h: Hex) -> Vec2 {
        let m = &self.orientation.matrix().f;
        let (q, r) = (h.q() as f32, h.r() as f32);
        let x = (m[0] * q + m[1] * r) * self.size.x;
        let y = (m[2] * q + m[3] * r) * self.size.y;
        Vec2::new(x, y) + self.origin
    }

    /// Fractional cube coordinate under pixel `p`.
    pub fn pixel_to_fractional(&self, p: Vec2) -> FractionalHex {
        let m = &self.orientation.matrix().b;
        let pt = (p - self.origin) / self.size;
        let q = m[0] * pt.x + m[1] * pt.y;
        let r = m[2] * pt.x + m[3] * pt.y;
        FractionalHex::new(q, r, -q - r)
    }

    /// The hex containing pixel `p`, or `None` when `p` is too far from the
    /// origin to be addressed by a [`Hex`].
    #[inline]
    pub fn pixel_to_hex(&self, p: Vec2) -> Option<Hex> {
        self.pixel_to_fractional(p).round()
    }

    /// Offset of `corner` (0–5) from a hex center.
    pub fn corner_offset(&self, corner: usize) -> Vec2 {
        let angle = 2.0 * PI * (self.orientation.matrix().start_angle + corner as f32) / 6.0;
        Vec2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// The six corners of `h`, in pixel space.
    pub fn polygon_corners(&self, h: Hex) -> [Vec2; 6] {
        let center = self.hex_to_pixel(h);
        std::array::from_fn(|i| center + self.corner_offset(i))
    }
}
