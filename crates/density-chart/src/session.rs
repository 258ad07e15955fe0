//! Interactive chart state
//!
//! A session owns the current dataset so that changing the bin width
//! re-renders the same sample instead of drawing a fresh one. Only an explicit
//! regeneration replaces the data.

use crate::config::{validate_bin_width, ChartConfig};
use crate::render::{render, DrawableChart};
use density_core::{Dataset, Error, Result};
use density_sampling::SampleGenerator;
use rand::Rng;
use tracing::debug;

/// Current dataset plus the bin width it was last drawn with
#[derive(Debug, Clone, Default)]
pub struct ChartSession {
    config: ChartConfig,
    dataset: Option<Dataset>,
    last_bin_width: Option<f64>,
}

impl ChartSession {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            dataset: None,
            last_bin_width: None,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn bin_width(&self) -> f64 {
        self.config.bin_width
    }

    /// Draw a fresh dataset of `config.sample_count` rounds, discarding the old one
    pub fn regenerate<R: Rng>(&mut self, generator: &mut SampleGenerator<R>) -> &Dataset {
        let data = generator.generate(self.config.sample_count);
        debug!(samples = data.len(), "regenerated dataset");
        self.last_bin_width = Some(self.config.bin_width);
        self.dataset.insert(data)
    }

    /// Change the bin width, keeping the current dataset
    pub fn set_bin_width(&mut self, bin_width: f64) -> Result<()> {
        self.config = self.config.with_bin_width(bin_width)?;
        self.last_bin_width = Some(bin_width);
        Ok(())
    }

    /// Offer a dataset together with the bin width to draw it with
    ///
    /// The first submission is cached as-is. Afterwards, a submission whose
    /// bin width differs from the previous one is treated as a pure bin width
    /// change: `data` is ignored and the cached dataset is kept. A submission
    /// with an unchanged bin width replaces the cached dataset. Returns the
    /// dataset that will be drawn.
    pub fn submit(&mut self, data: Dataset, bin_width: f64) -> Result<&Dataset> {
        validate_bin_width(bin_width)?;

        let keep_cached = matches!(
            (&self.dataset, self.last_bin_width),
            (Some(_), Some(last)) if last != bin_width
        );
        if keep_cached {
            debug!(bin_width, "bin width changed, reusing cached dataset");
        } else {
            self.dataset = Some(data);
        }

        self.config = self.config.with_bin_width(bin_width)?;
        self.last_bin_width = Some(bin_width);
        self.dataset.as_ref().ok_or(Error::EmptyDataset)
    }

    /// Render the current dataset with the session's configuration
    pub fn render(&self) -> Result<DrawableChart> {
        let data = self.dataset.as_ref().ok_or(Error::EmptyDataset)?;
        render(data, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(values: &[f64]) -> Dataset {
        Dataset::new(values.to_vec())
    }

    #[test]
    fn test_first_submit_caches() {
        let mut session = ChartSession::default();
        let drawn = session.submit(ds(&[1.0, 2.0]), 0.5).unwrap();
        assert_eq!(drawn.samples(), &[1.0, 2.0]);
        assert_eq!(session.bin_width(), 0.5);
    }

    #[test]
    fn test_bin_width_change_reuses_data() {
        let mut session = ChartSession::default();
        session.submit(ds(&[1.0, 2.0]), 0.5).unwrap();
        let drawn = session.submit(ds(&[9.0]), 0.25).unwrap();
        assert_eq!(drawn.samples(), &[1.0, 2.0]);
        assert_eq!(session.bin_width(), 0.25);
    }

    #[test]
    fn test_same_bin_width_replaces_data() {
        let mut session = ChartSession::default();
        session.submit(ds(&[1.0, 2.0]), 0.5).unwrap();
        let drawn = session.submit(ds(&[3.0, 4.0]), 0.5).unwrap();
        assert_eq!(drawn.samples(), &[3.0, 4.0]);
    }

    #[test]
    fn test_invalid_bin_width_leaves_state() {
        let mut session = ChartSession::default();
        session.submit(ds(&[1.0, 2.0]), 0.5).unwrap();
        assert!(session.submit(ds(&[3.0]), 0.0).is_err());
        assert!(session.set_bin_width(-1.0).is_err());
        assert_eq!(session.dataset().unwrap().samples(), &[1.0, 2.0]);
        assert_eq!(session.bin_width(), 0.5);
    }

    #[test]
    fn test_render_without_data() {
        let session = ChartSession::default();
        assert!(matches!(session.render(), Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_regenerate_then_set_bin_width() {
        let mut session = ChartSession::default();
        let mut generator = SampleGenerator::seeded(3);
        let first = session.regenerate(&mut generator).clone();
        assert_eq!(first.len(), 3000);

        session.set_bin_width(0.1).unwrap();
        assert_eq!(session.dataset(), Some(&first));
        let chart = session.render().unwrap();
        assert_eq!(chart.bars.len(), 90);

        session.regenerate(&mut generator);
        assert_ne!(session.dataset(), Some(&first));
    }
}
