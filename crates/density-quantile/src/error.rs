//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute quantile of empty data")]
    EmptyData,

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// NaN in the sample, which has no place in an order statistic
    #[error("Cannot order a sample containing NaN")]
    Unordered,

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] density_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty(data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(())
    }
}

impl From<Error> for density_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::EmptyData => density_core::Error::EmptyDataset,
            Error::InvalidProbability { p } => density_core::Error::invalid_probability(p),
            Error::Unordered => density_core::Error::non_finite("quantile sample"),
            Error::Core(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_probability() {
        assert!(Error::check_probability(0.0).is_ok());
        assert!(Error::check_probability(1.0).is_ok());
        assert!(matches!(
            Error::check_probability(1.2),
            Err(Error::InvalidProbability { .. })
        ));
        assert!(Error::check_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_conversion_into_core() {
        let core: density_core::Error = Error::EmptyData.into();
        assert!(matches!(core, density_core::Error::EmptyDataset));

        let core: density_core::Error = Error::InvalidProbability { p: -0.5 }.into();
        assert!(matches!(core, density_core::Error::InvalidInput(_)));
    }
}
