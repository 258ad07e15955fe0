//! Core traits for spread estimation

use density_core::Result;
use density_quantile::{DefaultQuantileEstimator, QuantileEstimator};

/// Intrinsic properties of a spread estimator that don't depend on implementation details
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;
}

/// Parameterized trait for spread/scale estimators
///
/// Estimators are parameterized by the quantile estimator they need rather
/// than storing one internally.
pub trait SpreadEstimator<Q: QuantileEstimator = DefaultQuantileEstimator>:
    SpreadEstimatorProperties
{
    /// Estimate spread with provided quantile estimator (sorts `data` in place)
    fn estimate(&self, data: &mut [f64], quantile_est: &Q) -> Result<f64>;

    /// Compute spread from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64>;
}
