//! Fixed-width histogram binning over a fixed domain
//!
//! Bins partition the domain exactly: thresholds sit at `lo + i * width`, the
//! final bin ends at `hi` and is closed on the right. Samples outside the
//! domain are dropped from the counts but reported through
//! [`Histogram::excluded`].
//!
//! # Examples
//!
//! ```rust
//! use density_core::Domain;
//! use density_histogram::{bin, DomainBinner, HistogramBuilder};
//!
//! let domain = Domain::new(0.0, 2.0).unwrap();
//! let histogram = bin(&[0.0, 0.0, 1.0, 1.0, 2.0], domain, 1.0).unwrap();
//! assert_eq!(histogram.counts(), vec![2, 3]);
//!
//! let binner = DomainBinner::new(Domain::default(), 0.5).unwrap();
//! let histogram = binner.build(&[-1.0, 2.0, 2.2]).unwrap();
//! for bin in histogram.bins().iter().filter(|b| b.count > 0) {
//!     println!("  {bin}");
//! }
//! ```

pub mod builders;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{bin, DomainBinner, MAX_BINS};
pub use ops::HistogramOps;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use density_core::Result;
