//! Weighted random selection.
//!
//! Every random decision in the game (wandering encounters, venue events,
//! outcomes) draws from a [`WeightedTable`]. Tables are validated once, when
//! content is loaded; drawing never re-checks the probability sum.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, ErrorKind, Result};

/// Tolerance applied when checking that probabilities sum to one.
pub const PROBABILITY_TOLERANCE: f64 = 0.001;

/// A cumulative-probability table.
///
/// Entries are ordered by `(probability, value)` descending before
/// accumulating, so equal-probability entries are ordered by value and the
/// table layout does not depend on authoring order.
#[derive(Clone, PartialEq)]
pub struct WeightedTable<T> {
    entries: Vec<(f64, T)>,
}

impl<T: Ord> WeightedTable<T> {
    /// Builds a table from `(probability, value)` pairs.
    ///
    /// `name` identifies the table in error messages. Zero-probability entries
    /// are dropped since they can never be drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if a probability is negative or not finite, if the
    /// probabilities do not sum to one within [`PROBABILITY_TOLERANCE`], or if
    /// no drawable entry remains.
    pub fn build(name: &str, pairs: impl IntoIterator<Item = (f64, T)>) -> Result<Self> {
        let mut pairs: Vec<(f64, T)> = pairs.into_iter().collect();

        if let Some((p, _)) = pairs.iter().find(|(p, _)| !p.is_finite() || *p < 0.0) {
            return Err(Error::new(ErrorKind::InvalidProbability {
                table: name.to_string(),
                probability: *p,
            }));
        }

        pairs.retain(|(p, _)| *p > 0.0);
        if pairs.is_empty() {
            return Err(Error::new(ErrorKind::EmptyTable(name.to_string())));
        }

        let sum: f64 = pairs.iter().map(|(p, _)| p).sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(Error::new(ErrorKind::ProbabilitySum {
                table: name.to_string(),
                sum,
            }));
        }

        pairs.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

        let mut cumulative = 0.0;
        let entries = pairs
            .into_iter()
            .map(|(p, value)| {
                cumulative += p;
                (cumulative, value)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Builds a single-entry table that always yields `value`.
    #[must_use]
    pub fn certain(value: T) -> Self {
        Self {
            entries: vec![(1.0, value)],
        }
    }
}

impl<T> WeightedTable<T> {
    /// Draws `r` uniformly from `[0, 1)` and returns the first entry whose
    /// cumulative probability exceeds it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TableExhausted`] if the draw lands past the last
    /// cumulative value. This can only happen for a table whose sum fell just
    /// short of one, and indicates a content-authoring bug.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T> {
        let r: f64 = rng.gen_range(0.0..1.0);
        self.pick(r)
    }

    /// Returns the first entry whose cumulative probability exceeds `r`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TableExhausted`] if no entry exceeds `r`.
    pub fn pick(&self, r: f64) -> Result<&T> {
        self.entries
            .iter()
            .find(|(cumulative, _)| *cumulative > r)
            .map(|(_, value)| value)
            .ok_or_else(|| {
                Error::new(ErrorKind::TableExhausted {
                    draw: r,
                    total: self.total(),
                })
            })
    }

    /// The last cumulative probability (within tolerance of one).
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.last().map_or(0.0, |(c, _)| *c)
    }

    /// Number of drawable entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(cumulative probability, value)` in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &T)> {
        self.entries.iter().map(|(c, v)| (*c, v))
    }

    /// Iterates the values in draw order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<T: fmt::Debug> fmt::Debug for WeightedTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

/// Picks one element uniformly at random, or `None` for an empty slice.
pub fn choose_uniform<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}
