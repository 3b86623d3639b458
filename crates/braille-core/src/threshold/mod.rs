//! Inclusion metric: decides whether a sub-pixel becomes a raised dot.
//!
//! A [`ThresholdMethod`] maps a color to a normalized brightness score in
//! `0.0..=1.0`. A [`Threshold`] pairs a method with a validated tolerance
//! and an invert flag and turns that score into a yes/no decision:
//!
//! ```text
//! included = (metric(color) < tolerance) XOR invert
//! ```
//!
//! A score exactly equal to the tolerance is not "less than", so such
//! pixels are excluded unless inverted.

use std::fmt;
use std::str::FromStr;

use crate::api::{BrailleError, ParseMethodError};
use crate::color::{Color, Lab};

/// Strategy for scoring the brightness of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdMethod {
    /// `0.299·r² + 0.587·g² + 0.114·b²` over normalized bands.
    ///
    /// The bands are squared directly rather than linearized, which weights
    /// bright channels more heavily than a gamma-correct luminance would.
    #[default]
    Luminance,
    /// CIELAB lightness `L / 100`.
    Lightness,
    /// Mean of the three bands, normalized.
    Average,
    /// Largest band, normalized (the HSV "value").
    Value,
    /// `0.299·r + 0.587·g + 0.114·b`, normalized.
    Weighted,
}

impl ThresholdMethod {
    /// All methods, in the order they are listed to users.
    pub const ALL: [ThresholdMethod; 5] = [
        ThresholdMethod::Luminance,
        ThresholdMethod::Lightness,
        ThresholdMethod::Average,
        ThresholdMethod::Value,
        ThresholdMethod::Weighted,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ThresholdMethod::Luminance => "luminance",
            ThresholdMethod::Lightness => "lightness",
            ThresholdMethod::Average => "average",
            ThresholdMethod::Value => "value",
            ThresholdMethod::Weighted => "weighted",
        }
    }

    /// Normalized brightness score of `color`.
    ///
    /// # Example
    /// ```
    /// use braille_core::{Color, ThresholdMethod};
    ///
    /// assert_eq!(ThresholdMethod::Luminance.metric(Color::new(255, 255, 255)), 1.0);
    /// assert_eq!(ThresholdMethod::Luminance.metric(Color::new(0, 0, 0)), 0.0);
    /// ```
    pub fn metric(self, color: Color) -> f64 {
        let [r, g, b] = color.normalized();
        match self {
            // Integer weights keep white at exactly 1.0.
            ThresholdMethod::Luminance => (299.0 * r * r + 587.0 * g * g + 114.0 * b * b) / 1000.0,
            ThresholdMethod::Lightness => Lab::from(color).l / 100.0,
            ThresholdMethod::Average => (r + g + b) / 3.0,
            ThresholdMethod::Value => r.max(g).max(b),
            ThresholdMethod::Weighted => (299.0 * r + 587.0 * g + 114.0 * b) / 1000.0,
        }
    }

    /// One-shot decision with tolerance validation.
    ///
    /// Prefer building a [`Threshold`] once when deciding many pixels.
    pub fn decide(self, color: Color, tolerance: f64, invert: bool) -> Result<bool, BrailleError> {
        Ok(Threshold::new(self, tolerance, invert)?.includes(color))
    }
}

impl fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThresholdMethod {
    type Err = ParseMethodError;

    /// Parse a method name, case-insensitively. The first letter of each
    /// name is accepted as a shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ThresholdMethod::ALL
            .into_iter()
            .find(|m| {
                let name = m.name();
                wanted == name || (wanted.len() == 1 && name.starts_with(wanted.as_str()))
            })
            .ok_or_else(|| ParseMethodError {
                kind: "threshold method",
                name: s.to_string(),
                expected: "luminance, lightness, average, value, weighted",
            })
    }
}

/// A validated inclusion policy.
///
/// Construction is the only place the tolerance is checked, so holding a
/// `Threshold` means every later decision is well-defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    method: ThresholdMethod,
    tolerance: f64,
    invert: bool,
}

impl Threshold {
    /// Create a threshold, rejecting tolerances outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidTolerance`] if `tolerance` is outside
    /// `0.0..=1.0` or NaN.
    pub fn new(method: ThresholdMethod, tolerance: f64, invert: bool) -> Result<Self, BrailleError> {
        if !(0.0..=1.0).contains(&tolerance) {
            return Err(BrailleError::InvalidTolerance { tolerance });
        }
        Ok(Self {
            method,
            tolerance,
            invert,
        })
    }

    #[inline]
    pub fn method(&self) -> ThresholdMethod {
        self.method
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[inline]
    pub fn invert(&self) -> bool {
        self.invert
    }

    /// Whether `color` should become a raised dot.
    #[inline]
    pub fn includes(&self, color: Color) -> bool {
        (self.method.metric(color) < self.tolerance) ^ self.invert
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            method: ThresholdMethod::Luminance,
            tolerance: 0.5,
            invert: false,
        }
    }
}
