//! Sample standard deviation

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use density_core::{math, Error, Result};
use density_quantile::QuantileEstimator;

/// Sample standard deviation with the n - 1 denominator
///
/// Requires at least two samples; a single sample has no defined deviation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDeviation;

impl StandardDeviation {
    pub fn new() -> Self {
        Self
    }

    /// Compute directly, without a quantile estimator
    pub fn compute(&self, data: &[f64]) -> Result<f64> {
        if data.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("standard deviation sample"));
        }
        math::sample_std_dev(data).ok_or(Error::DegenerateDataset {
            distinct: data.len(),
        })
    }
}

impl SpreadEstimatorProperties for StandardDeviation {
    fn name(&self) -> &str {
        "SD"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for StandardDeviation {
    fn estimate(&self, data: &mut [f64], _quantile_est: &Q) -> Result<f64> {
        self.compute(data)
    }

    fn estimate_sorted(&self, sorted_data: &[f64], _quantile_est: &Q) -> Result<f64> {
        self.compute(sorted_data)
    }
}
