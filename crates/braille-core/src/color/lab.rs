//! CIELAB color type
//!
//! CIELAB (D65) is the space the CIEDE2000 formula is defined over. `L` is
//! lightness in `0..=100`; `a` and `b` are the green-red and blue-yellow
//! opponent axes.

use super::ciede2000::ciede2000;
use super::rgb::Color;
use super::xyz::Xyz;

/// D65 reference white in the 0..100 XYZ scale.
const REFERENCE_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.000,
    z: 108.883,
};

/// CIE companding threshold (approximately (6/29)^3).
const EPSILON: f64 = 0.008856;

/// CIE linear-segment slope (approximately (29/3)^3).
const KAPPA: f64 = 903.3;

/// A color in CIELAB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, clamped to be non-negative (0 = black, 100 = white)
    pub l: f64,
    /// Green (negative) to red (positive)
    pub a: f64,
    /// Blue (negative) to yellow (positive)
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma: distance from the neutral axis, `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIEDE2000 distance to `other`. See [`ciede2000`].
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        ciede2000(self, other)
    }
}

#[inline]
fn companding(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = companding(xyz.x / REFERENCE_WHITE.x);
        let fy = companding(xyz.y / REFERENCE_WHITE.y);
        let fz = companding(xyz.z / REFERENCE_WHITE.z);

        Self {
            l: (116.0 * fy - 16.0).max(0.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Color> for Lab {
    #[inline]
    fn from(color: Color) -> Self {
        Lab::from(Xyz::from(color))
    }
}
