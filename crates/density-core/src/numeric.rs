//! Numeric sample types
//!
//! Estimators accept any primitive numeric sample type and do their arithmetic
//! in `f64`. The trait is a thin alias over [`num_traits::AsPrimitive`].

use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Base trait for numeric types that can be used as samples
pub trait Numeric: AsPrimitive<f64> + PartialOrd + Debug + Send + Sync {
    /// Widen the sample to `f64`
    #[inline]
    fn as_f64(self) -> f64 {
        self.as_()
    }
}

impl<T> Numeric for T where T: AsPrimitive<f64> + PartialOrd + Debug + Send + Sync {}

/// Copy a sample slice into a fresh `Vec<f64>`
pub fn to_f64_vec<T: Numeric>(data: &[T]) -> Vec<f64> {
    data.iter().map(|&x| x.as_f64()).collect()
}

/// Check that every sample is finite once widened to `f64`
pub fn all_finite<T: Numeric>(data: &[T]) -> bool {
    data.iter().all(|&x| x.as_f64().is_finite())
}
