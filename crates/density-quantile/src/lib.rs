//! Order-statistic quantile estimation
//!
//! This crate provides the linear-interpolation quantile estimator used for
//! interquartile ranges in bandwidth selection.
//!
//! # Example
//!
//! ```rust
//! use density_quantile::{estimators::linear, QuantileEstimator};
//!
//! let est = linear();
//! let mut data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
//! let median = est.quantile(&mut data, 0.5).unwrap();
//! assert_eq!(median, 3.0);
//! ```

pub mod error;
pub mod estimators;
pub mod traits;

// Re-export main types
pub use error::{Error, Result};
pub use estimators::LinearInterpolation;
pub use traits::{sort_sample, QuantileEstimator};

/// Type alias for the estimator used when none is specified
pub type DefaultQuantileEstimator = LinearInterpolation;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, LinearInterpolation, QuantileEstimator, Result};
}
