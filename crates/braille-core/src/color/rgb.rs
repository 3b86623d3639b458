//! 8-bit RGB color type

use crate::api::BrailleError;

use super::lab::Lab;

/// An 8-bit sRGB color.
///
/// Every band is a `u8`, so a constructed `Color` is always within
/// `0..=255`. Untyped input (configuration values, component slices) goes
/// through the [`TryFrom`] impls, which reject out-of-range bands and the
/// wrong number of components with [`BrailleError::InvalidColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    /// Create a new color from 8-bit bands.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Pack into a 24-bit integer `0xRRGGBB`.
    ///
    /// Distinct colors always have distinct packed values, which is what
    /// lets the difference cache key on them.
    ///
    /// # Example
    /// ```
    /// use braille_core::Color;
    /// assert_eq!(Color::new(0x12, 0x34, 0x56).packed(), 0x123456);
    /// ```
    #[inline]
    pub const fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Bands normalized to `0.0..=1.0`.
    #[inline]
    pub fn normalized(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Convert to CIELAB (D65).
    #[inline]
    pub fn to_lab(self) -> Lab {
        Lab::from(self)
    }

    /// Validate a single untyped band.
    fn band(value: i64) -> Result<u8, BrailleError> {
        u8::try_from(value).map_err(|_| {
            BrailleError::InvalidColor(format!("band {value} outside of range [0, 255]"))
        })
    }
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<(i64, i64, i64)> for Color {
    type Error = BrailleError;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Ok(Self::new(Self::band(r)?, Self::band(g)?, Self::band(b)?))
    }
}

impl TryFrom<&[i64]> for Color {
    type Error = BrailleError;

    /// Build a color from exactly three integer components.
    ///
    /// # Example
    /// ```
    /// use braille_core::{BrailleError, Color};
    ///
    /// let components: &[i64] = &[1, 2, 3];
    /// assert_eq!(Color::try_from(components).unwrap(), Color::new(1, 2, 3));
    ///
    /// let short: &[i64] = &[1, 2];
    /// assert!(matches!(Color::try_from(short), Err(BrailleError::InvalidColor(_))));
    /// ```
    fn try_from(components: &[i64]) -> Result<Self, Self::Error> {
        match *components {
            [r, g, b] => Self::try_from((r, g, b)),
            _ => Err(BrailleError::InvalidColor(format!(
                "expected 3 components, got {}",
                components.len()
            ))),
        }
    }
}
