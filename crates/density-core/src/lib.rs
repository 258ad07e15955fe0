//! Core types shared by the density-lab crates
//!
//! This crate holds the pieces every estimator needs: the unified [`Error`]
//! type, the [`Numeric`] sample bound, the fixed [`Domain`] used for binning
//! and plotting, and the owned [`Dataset`] produced by a regeneration.
//!
//! # Example
//!
//! ```rust
//! use density_core::{math, Dataset, Domain};
//!
//! let data: Dataset = vec![-1.2, -0.8, 1.9, 2.1, 2.4].into();
//! let domain = Domain::default();
//!
//! let inside = data.iter().filter(|&&x| domain.contains(x)).count();
//! let sd = math::sample_std_dev(&data).unwrap();
//!
//! println!("{inside} samples inside {domain}, sd = {sd:.3}");
//! ```

pub mod dataset;
pub mod domain;
pub mod error;
pub mod math;
pub mod numeric;

// Re-export core types
pub use dataset::Dataset;
pub use domain::Domain;
pub use error::{ensure_non_empty, Error, Result};
pub use numeric::Numeric;
