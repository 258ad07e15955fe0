//! Histogram and kernel density explorer
//!
//! Facade over the density-lab crates: generate a bimodal sample, bin it over
//! a fixed domain, estimate its density with a Gaussian KDE, and lay both out
//! as a chart.
//!
//! ```rust
//! use density_lab::prelude::*;
//!
//! let data = SampleGenerator::seeded(1).generate(1000);
//! let histogram = bin(&data, Domain::default(), 0.5).unwrap();
//! let h = bandwidth(&data).unwrap();
//! let chart = render(&data, &ChartConfig::default()).unwrap();
//!
//! assert_eq!(histogram.total_count(), 3000);
//! assert_eq!(chart.bandwidth, h);
//! ```

pub use density_chart;
pub use density_core;
pub use density_histogram;
pub use density_kde;
pub use density_quantile;
pub use density_sampling;
pub use density_spread;

pub use density_core::{Dataset, Domain, Error, Result};

/// Common imports
pub mod prelude {
    pub use density_chart::{render, ChartConfig, ChartSession, DrawableChart};
    pub use density_core::{Dataset, Domain, Error, Result};
    pub use density_histogram::{bin, DomainBinner, Histogram, HistogramBin};
    pub use density_kde::{bandwidth, evaluate, nice_ticks, Bandwidth, DensityPoint, KernelDensity};
    pub use density_sampling::{GaussianMixture, SampleGenerator};
}
