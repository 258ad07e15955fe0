//! Quantile estimator implementations

mod linear;

pub use linear::LinearInterpolation;

/// Create the default order-statistic estimator
pub fn linear() -> LinearInterpolation {
    LinearInterpolation
}
