//! Interquartile Range (IQR) estimator

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use density_core::{Error, Result};
use density_quantile::{sort_sample, QuantileEstimator};

/// Divisor Silverman's rule applies to the IQR (≈ IQR of a unit normal)
pub const SILVERMAN_IQR_DIVISOR: f64 = 1.34;

/// Interquartile range `Q(0.75) - Q(0.25)`, optionally multiplied by a scale factor
///
/// The quantiles come from the quantile estimator passed at estimation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iqr {
    scale: f64,
}

impl Iqr {
    /// Raw IQR
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    /// IQR divided by 1.34, comparable to a standard deviation in Silverman's rule
    pub fn silverman() -> Self {
        Self {
            scale: 1.0 / SILVERMAN_IQR_DIVISOR,
        }
    }

    /// IQR scaled by a custom factor
    pub fn with_factor(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::invalid_config("IQR scale", scale, "must be positive and finite"));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn from_sorted<Q: QuantileEstimator>(&self, sorted: &[f64], quantile_est: &Q) -> Result<f64> {
        let qs = quantile_est.quantiles_sorted(sorted, &[0.25, 0.75])?;
        Ok((qs[1] - qs[0]) * self.scale)
    }
}

impl Default for Iqr {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadEstimatorProperties for Iqr {
    fn name(&self) -> &str {
        if self.scale == 1.0 {
            "IQR"
        } else {
            "Scaled IQR"
        }
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.25
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for Iqr {
    fn estimate(&self, data: &mut [f64], quantile_est: &Q) -> Result<f64> {
        sort_sample(data)?;
        self.from_sorted(data, quantile_est)
    }

    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        self.from_sorted(sorted_data, quantile_est)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use density_quantile::LinearInterpolation;

    #[test]
    fn test_raw_iqr() {
        let mut data = vec![4.0, 1.0, 3.0, 2.0];
        let iqr = Iqr::new().estimate(&mut data, &LinearInterpolation).unwrap();
        // Q1 = 1.75, Q3 = 3.25
        assert_relative_eq!(iqr, 1.5);
    }

    #[test]
    fn test_silverman_scaling() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        let iqr = Iqr::silverman()
            .estimate_sorted(&sorted, &LinearInterpolation)
            .unwrap();
        assert_relative_eq!(iqr, 1.5 / 1.34, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_sample() {
        let sorted = [5.0, 5.0, 5.0, 5.0];
        let iqr = Iqr::new().estimate_sorted(&sorted, &LinearInterpolation).unwrap();
        assert_eq!(iqr, 0.0);
    }

    #[test]
    fn test_empty_sample() {
        let result = Iqr::new().estimate_sorted(&[], &LinearInterpolation);
        assert!(matches!(result, Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_invalid_factor() {
        assert!(Iqr::with_factor(0.0).is_err());
        assert!(Iqr::with_factor(f64::NAN).is_err());
        assert_eq!(Iqr::with_factor(2.0).unwrap().scale(), 2.0);
    }
}
