//! Linear interpolation between order statistics (Hyndman-Fan type 7)

use crate::traits::QuantileEstimator;
use crate::{Error, Result};

/// Quantile estimator interpolating between adjacent order statistics.
///
/// For `n` sorted values the position is `h = (n - 1) * p`; the estimate is
/// `x[⌊h⌋] + (h - ⌊h⌋) * (x[⌊h⌋ + 1] - x[⌊h⌋])`. This is the default of R,
/// NumPy and d3, so `p = 0` and `p = 1` return the sample extremes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl QuantileEstimator for LinearInterpolation {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        Error::check_non_empty(sorted_data)?;
        Error::check_probability(p)?;

        let n = sorted_data.len();
        if n == 1 {
            return Ok(sorted_data[0]);
        }

        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        if lo + 1 >= n {
            return Ok(sorted_data[n - 1]);
        }

        let lower = sorted_data[lo];
        let upper = sorted_data[lo + 1];
        Ok(lower + (upper - lower) * (h - lo as f64))
    }

    fn name(&self) -> &str {
        "linear"
    }
}
