//! CIE 1931 XYZ color type
//!
//! XYZ is the device-independent bridge between sRGB and CIELAB. Values are
//! scaled so that the D65 reference white has `Y = 100`.

use super::rgb::Color;

/// sRGB (D65) to XYZ conversion matrix, row-major.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// A color in CIE 1931 XYZ space, scaled to `0.0..=~108.9`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Undo the sRGB transfer curve for one normalized band (IEC 61966-2-1).
///
/// # Example
/// ```
/// use braille_core::inverse_srgb_companding;
///
/// assert_eq!(inverse_srgb_companding(0.0), 0.0);
/// assert!((inverse_srgb_companding(1.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn inverse_srgb_companding(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Color> for Xyz {
    /// Normalize, linearize each band, apply the D65 matrix, and scale by 100.
    fn from(color: Color) -> Self {
        let [r, g, b] = color.normalized().map(inverse_srgb_companding);
        let row = |m: [f64; 3]| (m[0] * r + m[1] * g + m[2] * b) * 100.0;
        Self {
            x: row(SRGB_TO_XYZ[0]),
            y: row(SRGB_TO_XYZ[1]),
            z: row(SRGB_TO_XYZ[2]),
        }
    }
}
