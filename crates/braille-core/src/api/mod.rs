//! Public API for the braille-core crate.
//!
//! This module provides the high-level API: [`BrailleConverter`] builder and
//! the [`BrailleError`] error type.

mod builder;
mod error;

pub use builder::{BrailleConverter, DEFAULT_TOLERANCE};
pub use error::{BrailleError, ParseMethodError};
