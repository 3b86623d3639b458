//! Palettes and perceptual nearest-color matching
//!
//! This module provides the memoizing [`DifferenceCache`], the
//! [`Population`] shapes that nearest-color search accepts, and the fixed
//! terminal and web palettes the color formatters quantize onto.

mod ansi;
mod cache;
mod nearest;
mod web;

pub use ansi::{AnsiColor, EIGHT_BIT_ANSI, FOUR_BIT_ANSI};
pub use cache::DifferenceCache;
pub use nearest::{Nearest, Population, PopulationKey};
pub use web::WEB_COLORS;
