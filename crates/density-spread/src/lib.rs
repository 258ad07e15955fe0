//! Spread measurements for bandwidth selection
//!
//! Provides the two scale estimates Silverman's rule compares: the classical
//! sample standard deviation and the (scaled) interquartile range.
//!
//! # Example
//!
//! ```rust
//! use density_spread::{Iqr, SpreadEstimator, StandardDeviation};
//! use density_quantile::LinearInterpolation;
//!
//! let mut data = vec![-1.1, -0.9, 1.8, 2.0, 2.2, 2.5];
//! let q = LinearInterpolation;
//!
//! let sd = StandardDeviation.estimate(&mut data, &q).unwrap();
//! let iqr = Iqr::silverman().estimate(&mut data, &q).unwrap();
//! println!("sd = {sd:.3}, IQR/1.34 = {iqr:.3}");
//! ```

pub mod iqr;
pub mod std_dev;
pub mod traits;

pub use iqr::{Iqr, SILVERMAN_IQR_DIVISOR};
pub use std_dev::StandardDeviation;
pub use traits::{SpreadEstimator, SpreadEstimatorProperties};
