//! Braillify - render images as Unicode Braille text
//!
//! Decoding, character-budget fitting and configuration live here; the
//! conversion itself is in the `braille-core` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
