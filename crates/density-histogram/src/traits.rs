//! Core traits for histogram building

use crate::types::Histogram;
use density_core::{Numeric, Result};

/// Trait for building histograms from sample data
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build<T: Numeric>(&self, sample: &[T]) -> Result<Histogram>;

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
