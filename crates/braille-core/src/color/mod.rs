//! Color types and conversion utilities
//!
//! This module provides the integer RGB [`Color`] used throughout the crate
//! and the two perceptual spaces needed to compare colors.
//!
//! # Color Spaces
//!
//! - **Color**: 8-bit sRGB as read from an image. Use for I/O and palettes.
//! - **Xyz**: CIE 1931 XYZ (D65), scaled so that white has `Y = 100`.
//! - **Lab**: CIELAB (D65), the space [`ciede2000`] operates in.
//!
//! # Example
//!
//! ```
//! use braille_core::{Color, Lab};
//!
//! let orange = Color::new(255, 128, 0);
//! let lab = Lab::from(orange);
//! assert!(lab.l > 60.0 && lab.l < 70.0);
//!
//! let red = Lab::from(Color::new(255, 0, 0));
//! assert!(lab.delta_e(red) > 0.0);
//! ```

mod ciede2000;
mod lab;
mod rgb;
mod xyz;

pub use ciede2000::ciede2000;
pub use lab::Lab;
pub use rgb::Color;
pub use xyz::{inverse_srgb_companding, Xyz};
