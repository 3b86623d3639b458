//! Unified error type for the braille-core public API.
//!
//! Every failure in this crate is a local validation failure: nothing is
//! retried, and a failed call never disturbs output already produced.

use thiserror::Error;

/// Error type for all fallible braille-core operations.
///
/// # Example
///
/// ```
/// use braille_core::{BrailleError, Threshold, ThresholdMethod};
///
/// let err = Threshold::new(ThresholdMethod::Luminance, 1.5, false).unwrap_err();
/// assert!(matches!(err, BrailleError::InvalidTolerance { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrailleError {
    /// Tolerance outside `[0, 1]` (or NaN)
    #[error("tolerance {tolerance} outside of range [0.0, 1.0]")]
    InvalidTolerance { tolerance: f64 },

    /// Pixel coordinate outside the image
    #[error("coordinate ({x}, {y}) outside of image bounds {width}x{height}")]
    InvalidCoordinate {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Color components out of range or of the wrong arity
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Nearest-color search given a population with no candidates
    #[error("population must contain at least one color")]
    InvalidPopulation,

    /// Average color requested on a segment with no colored bits
    #[error("segment has no colored bits to average")]
    UndefinedAverage,
}

/// Error returned when a threshold or color method name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} \"{name}\" (expected one of: {expected})")]
pub struct ParseMethodError {
    pub kind: &'static str,
    pub name: String,
    pub expected: &'static str,
}
