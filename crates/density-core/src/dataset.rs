//! Owned sample collections

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An ordered collection of samples produced by one regeneration.
///
/// A dataset is never mutated after construction; a new one replaces it.
/// Estimators only rely on its multiset contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    samples: Vec<f64>,
}

impl Dataset {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.samples
    }

    /// Number of distinct values (NaN never compares equal and counts once each)
    pub fn distinct_count(&self) -> usize {
        distinct_count(&self.samples)
    }
}

impl Deref for Dataset {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.samples
    }
}

impl AsRef<[f64]> for Dataset {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<f64> for Dataset {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Count distinct values in a slice
pub fn distinct_count(data: &[f64]) -> usize {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}
