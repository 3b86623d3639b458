//! Nearest-color search over a finite population.

use crate::api::BrailleError;
use crate::color::Color;

use super::cache::DifferenceCache;

/// The candidates a nearest-color search runs over.
///
/// Both shapes are ordered: search visits entries front to back, and on a
/// tie the earlier entry wins.
#[derive(Debug, Clone, Copy)]
pub enum Population<'a> {
    /// Colors addressed by position.
    Sequence(&'a [Color]),
    /// Colors addressed by name, in the given order.
    Mapping(&'a [(&'a str, Color)]),
}

impl Population<'_> {
    pub fn len(&self) -> usize {
        match self {
            Population::Sequence(colors) => colors.len(),
            Population::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How the winning candidate is addressed within its population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationKey<'a> {
    Index(usize),
    Name(&'a str),
}

/// Result of a nearest-color search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub key: PopulationKey<'a>,
    pub color: Color,
    pub distance: f64,
}

impl DifferenceCache {
    /// Find the candidate in `population` perceptually closest to `color`.
    ///
    /// Distances come from [`difference`](Self::difference), so repeated
    /// searches against the same palette are served from the cache.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidPopulation`] if the population is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use braille_core::{Color, DifferenceCache, Population, PopulationKey};
    ///
    /// let mut cache = DifferenceCache::new();
    /// let named = [("a", Color::new(10, 10, 10)), ("b", Color::new(200, 200, 200))];
    ///
    /// let nearest = cache
    ///     .find_nearest(Color::new(0, 0, 0), Population::Mapping(&named))
    ///     .unwrap();
    /// assert_eq!(nearest.key, PopulationKey::Name("a"));
    /// ```
    pub fn find_nearest<'p>(
        &mut self,
        color: Color,
        population: Population<'p>,
    ) -> Result<Nearest<'p>, BrailleError> {
        let candidates: Box<dyn Iterator<Item = (PopulationKey<'p>, Color)> + 'p> = match population {
            Population::Sequence(colors) => Box::new(
                colors
                    .iter()
                    .enumerate()
                    .map(|(i, &c)| (PopulationKey::Index(i), c)),
            ),
            Population::Mapping(entries) => Box::new(
                entries
                    .iter()
                    .map(|&(name, c)| (PopulationKey::Name(name), c)),
            ),
        };

        let mut best: Option<Nearest<'p>> = None;
        for (key, candidate) in candidates {
            let distance = self.difference(color, candidate);
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(Nearest {
                    key,
                    color: candidate,
                    distance,
                });
            }
        }

        best.ok_or(BrailleError::InvalidPopulation)
    }
}
