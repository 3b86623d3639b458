//! Memoized CIEDE2000 distances keyed by unordered color pair.

use std::collections::HashMap;

use crate::color::{ciede2000, Color};

/// Cache of perceptual distances between pairs of colors.
///
/// Keys are the two colors' packed 24-bit values ordered as
/// `(min, max)`, so `difference(a, b)` and `difference(b, a)` share one
/// entry. The cache only grows; call [`clear`](Self::clear) to reset it.
///
/// A cache belongs to whatever performs quantization (usually a color
/// formatter) and lives as long as its owner, so one cache can serve a
/// single conversion or many.
///
/// # Example
///
/// ```
/// use braille_core::{Color, DifferenceCache};
///
/// let mut cache = DifferenceCache::new();
/// let red = Color::new(255, 0, 0);
/// let blue = Color::new(0, 0, 255);
///
/// let d = cache.difference(red, blue);
/// assert!(d > 0.0);
/// assert_eq!(cache.difference(blue, red), d);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DifferenceCache {
    distances: HashMap<(u32, u32), f64>,
}

impl DifferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Drop every memoized distance.
    pub fn clear(&mut self) {
        self.distances.clear();
    }

    /// Canonical unordered key for a pair of colors.
    #[inline]
    fn key(a: Color, b: Color) -> (u32, u32) {
        let (pa, pb) = (a.packed(), b.packed());
        (pa.min(pb), pa.max(pb))
    }

    /// Memoized distance for `(a, b)`, if it has been computed.
    pub fn get(&self, a: Color, b: Color) -> Option<f64> {
        self.distances.get(&Self::key(a, b)).copied()
    }

    /// CIEDE2000 distance between two colors.
    ///
    /// Identical colors return `0.0` without touching the cache. Otherwise
    /// the distance is looked up, or computed through CIELAB and stored.
    pub fn difference(&mut self, a: Color, b: Color) -> f64 {
        if a == b {
            return 0.0;
        }
        *self
            .distances
            .entry(Self::key(a, b))
            .or_insert_with(|| ciede2000(a.to_lab(), b.to_lab()))
    }
}
