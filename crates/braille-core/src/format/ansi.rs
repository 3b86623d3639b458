//! Terminal escape-sequence formatters.

use crate::color::Color;
use crate::palette::{
    DifferenceCache, Population, PopulationKey, EIGHT_BIT_ANSI, FOUR_BIT_ANSI,
};

use super::{ColorFormatter, ColorMethod};

/// SGR reset, appended after every colored run.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Index of the nearest entry in a positional palette.
fn nearest_index(cache: &mut DifferenceCache, color: Color, palette: &[Color]) -> usize {
    // Both palettes are non-empty constants, so the search cannot fail.
    match cache.find_nearest(color, Population::Sequence(palette)) {
        Ok(nearest) => match nearest.key {
            PopulationKey::Index(i) => i,
            PopulationKey::Name(_) => 0,
        },
        Err(_) => 0,
    }
}

/// RGB values of [`FOUR_BIT_ANSI`], for positional search.
const FOUR_BIT_COLORS: [Color; 16] = {
    let mut colors = [Color::new(0, 0, 0); 16];
    let mut i = 0;
    while i < 16 {
        colors[i] = FOUR_BIT_ANSI[i].color;
        i += 1;
    }
    colors
};

/// Quantizes to the 16 standard terminal colors (SGR 30-37, 90-97).
#[derive(Debug, Clone, Default)]
pub struct FourBitAnsi {
    cache: DifferenceCache,
}

impl FourBitAnsi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing cache, e.g. one shared with an earlier formatter.
    pub fn with_cache(cache: DifferenceCache) -> Self {
        Self { cache }
    }

    pub fn into_cache(self) -> DifferenceCache {
        self.cache
    }
}

impl ColorFormatter for FourBitAnsi {
    fn render(&mut self, text: &str, color: Color) -> String {
        let index = nearest_index(&mut self.cache, color, &FOUR_BIT_COLORS);
        format!("{}{text}{ANSI_RESET}", FOUR_BIT_ANSI[index].fg_escape())
    }

    fn method(&self) -> ColorMethod {
        ColorMethod::FourBitAnsi
    }

    fn cache(&self) -> Option<&DifferenceCache> {
        Some(&self.cache)
    }

    fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Quantizes to the 256 extended terminal colors (SGR `38;5;n`).
#[derive(Debug, Clone, Default)]
pub struct EightBitAnsi {
    cache: DifferenceCache,
}

impl EightBitAnsi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: DifferenceCache) -> Self {
        Self { cache }
    }

    pub fn into_cache(self) -> DifferenceCache {
        self.cache
    }
}

impl ColorFormatter for EightBitAnsi {
    fn render(&mut self, text: &str, color: Color) -> String {
        let index = nearest_index(&mut self.cache, color, &EIGHT_BIT_ANSI);
        format!("\x1b[38;5;{index}m{text}{ANSI_RESET}")
    }

    fn method(&self) -> ColorMethod {
        ColorMethod::EightBitAnsi
    }

    fn cache(&self) -> Option<&DifferenceCache> {
        Some(&self.cache)
    }

    fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Emits the exact color as a 24-bit escape (SGR `38;2;r;g;b`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueColorAnsi;

impl ColorFormatter for TrueColorAnsi {
    fn render(&mut self, text: &str, color: Color) -> String {
        format!(
            "\x1b[38;2;{};{};{}m{text}{ANSI_RESET}",
            color.r, color.g, color.b
        )
    }

    fn method(&self) -> ColorMethod {
        ColorMethod::TrueColorAnsi
    }
}
