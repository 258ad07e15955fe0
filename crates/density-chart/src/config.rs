//! Chart configuration

use density_core::{Domain, Error, Result};
use serde::{Deserialize, Serialize};

/// Everything a chart render depends on besides the data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Domain binned and plotted on the x axis
    pub domain: Domain,
    pub bin_width: f64,
    /// Mixture rounds per regeneration (three samples each)
    pub sample_count: usize,
    /// Approximate number of density evaluation points
    pub query_ticks: usize,
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl ChartConfig {
    pub const DEFAULT_BIN_WIDTH: f64 = 0.5;
    pub const DEFAULT_SAMPLE_COUNT: usize = 1000;
    pub const DEFAULT_QUERY_TICKS: usize = 600;
    pub const DEFAULT_WIDTH: f64 = 600.0;
    pub const DEFAULT_HEIGHT: f64 = 470.0;
    pub const DEFAULT_MARGIN: f64 = 20.0;
    /// Upper bound on `query_ticks`; the evaluation grid is O(samples * ticks)
    pub const MAX_QUERY_TICKS: usize = 100_000;

    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::default()
    }

    /// Check every field; used by the builder and after deserialization
    pub fn validate(&self) -> Result<()> {
        validate_bin_width(self.bin_width)?;
        if self.sample_count == 0 {
            return Err(Error::invalid_config("sample_count", 0, "must be at least 1"));
        }
        if self.query_ticks == 0 || self.query_ticks > Self::MAX_QUERY_TICKS {
            return Err(Error::invalid_config(
                "query_ticks",
                self.query_ticks,
                &format!("must be between 1 and {}", Self::MAX_QUERY_TICKS),
            ));
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid_config(name, value, "must be positive and finite"));
            }
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::invalid_config(
                "margin",
                self.margin,
                "must be non-negative and finite",
            ));
        }
        if 2.0 * self.margin >= self.width.min(self.height) {
            return Err(Error::invalid_config(
                "margin",
                self.margin,
                "leaves no drawable area",
            ));
        }
        Ok(())
    }

    /// Copy with a different bin width
    pub fn with_bin_width(&self, bin_width: f64) -> Result<Self> {
        validate_bin_width(bin_width)?;
        Ok(Self { bin_width, ..*self })
    }

    /// Horizontal pixel range of the plot area
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin, self.width - self.margin)
    }

    /// Vertical pixel range of the plot area, bottom first
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.margin, self.margin)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            domain: Domain::DEFAULT,
            bin_width: Self::DEFAULT_BIN_WIDTH,
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
            query_ticks: Self::DEFAULT_QUERY_TICKS,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            margin: Self::DEFAULT_MARGIN,
        }
    }
}

pub(crate) fn validate_bin_width(bin_width: f64) -> Result<()> {
    if !bin_width.is_finite() || bin_width <= 0.0 {
        return Err(Error::invalid_config("bin_width", bin_width, "must be positive and finite"));
    }
    Ok(())
}

/// Builder for [`ChartConfig`]
///
/// ```rust
/// use density_chart::ChartConfig;
///
/// let config = ChartConfig::builder()
///     .bin_width(0.25)
///     .sample_count(500)
///     .size(800.0, 400.0)
///     .build()
///     .unwrap();
/// assert_eq!(config.query_ticks, 600);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChartConfigBuilder {
    config: ChartConfig,
}

impl ChartConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(mut self, domain: Domain) -> Self {
        self.config.domain = domain;
        self
    }

    pub fn bin_width(mut self, bin_width: f64) -> Self {
        self.config.bin_width = bin_width;
        self
    }

    pub fn sample_count(mut self, sample_count: usize) -> Self {
        self.config.sample_count = sample_count;
        self
    }

    pub fn query_ticks(mut self, query_ticks: usize) -> Self {
        self.config.query_ticks = query_ticks;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.config.margin = margin;
        self
    }

    pub fn build(self) -> Result<ChartConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.domain, Domain::new(-3.0, 6.0).unwrap());
        assert_eq!(config.bin_width, 0.5);
        assert_eq!(config.sample_count, 1000);
        assert_eq!(config.query_ticks, 600);
        assert_eq!((config.width, config.height, config.margin), (600.0, 470.0, 20.0));
        assert!(config.validate().is_ok());
        assert_eq!(ChartConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            ChartConfig::builder().bin_width(0.0),
            ChartConfig::builder().bin_width(-0.5),
            ChartConfig::builder().bin_width(f64::NAN),
            ChartConfig::builder().sample_count(0),
            ChartConfig::builder().query_ticks(0),
            ChartConfig::builder().query_ticks(ChartConfig::MAX_QUERY_TICKS + 1),
            ChartConfig::builder().query_ticks(usize::MAX),
            ChartConfig::builder().size(0.0, 100.0),
            ChartConfig::builder().margin(-1.0),
            ChartConfig::builder().size(100.0, 100.0).margin(50.0),
        ];
        for builder in bad {
            assert!(matches!(builder.build(), Err(Error::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn test_query_ticks_upper_bound() {
        let config = ChartConfig::builder()
            .query_ticks(ChartConfig::MAX_QUERY_TICKS)
            .build()
            .unwrap();
        assert_eq!(config.query_ticks, ChartConfig::MAX_QUERY_TICKS);

        let mut deserialized = ChartConfig::default();
        deserialized.query_ticks = usize::MAX;
        assert!(matches!(deserialized.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_with_bin_width() {
        let config = ChartConfig::default();
        let narrow = config.with_bin_width(0.1).unwrap();
        assert_eq!(narrow.bin_width, 0.1);
        assert_eq!(narrow.domain, config.domain);
        assert!(config.with_bin_width(0.0).is_err());
    }

    #[test]
    fn test_plot_ranges() {
        let config = ChartConfig::default();
        assert_eq!(config.x_range(), (20.0, 580.0));
        assert_eq!(config.y_range(), (450.0, 20.0));
    }
}
