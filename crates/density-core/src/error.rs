//! Error types for histogram and density estimation
//!
//! Provides a unified error type for all density-lab crates.

use thiserror::Error;

/// Core error type for density estimation and charting
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration value rejected before any computation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Dataset has no samples
    #[error("Empty dataset: at least one sample is required")]
    EmptyDataset,

    /// Dataset has too few distinct values to derive a spread
    #[error("Degenerate dataset: expected at least 2 distinct values, got {distinct}")]
    DegenerateDataset { distinct: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a rejected configuration value
    pub fn invalid_config(name: &str, value: impl std::fmt::Display, requirement: &str) -> Self {
        Self::InvalidConfiguration(format!("{name} = {value} {requirement}"))
    }

    /// Create an error for invalid quantile probability
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidInput(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}

/// Reject an empty slice with [`Error::EmptyDataset`]
pub fn ensure_non_empty<T>(data: &[T]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(())
}
