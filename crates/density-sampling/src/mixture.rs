//! Gaussian mixtures drawn in fixed rounds

use crate::normal::BoxMullerNormal;
use density_core::{Error, Result};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One component of a mixture and how many draws it contributes per round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixtureComponent {
    pub normal: BoxMullerNormal,
    pub draws_per_round: usize,
}

impl MixtureComponent {
    pub fn new(mean: f64, std_dev: f64, draws_per_round: usize) -> Result<Self> {
        Ok(Self {
            normal: BoxMullerNormal::new(mean, std_dev)?,
            draws_per_round,
        })
    }
}

/// Ordered mixture of normal components.
///
/// Sampling is stratified rather than random: every round draws
/// `draws_per_round` samples from each component, in component order, so the
/// mixture weights are exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianMixture {
    components: Vec<MixtureComponent>,
}

impl GaussianMixture {
    pub fn new(components: Vec<MixtureComponent>) -> Result<Self> {
        let mixture = Self { components };
        if mixture.samples_per_round() == 0 {
            return Err(Error::InvalidConfiguration(
                "mixture must draw at least one sample per round".to_string(),
            ));
        }
        Ok(mixture)
    }

    /// One third N(-1, 0.5), two thirds N(2, 0.75)
    pub fn bimodal() -> Self {
        Self {
            components: vec![
                MixtureComponent {
                    normal: BoxMullerNormal::from_parts(-1.0, 0.5),
                    draws_per_round: 1,
                },
                MixtureComponent {
                    normal: BoxMullerNormal::from_parts(2.0, 0.75),
                    draws_per_round: 2,
                },
            ],
        }
    }

    pub fn components(&self) -> &[MixtureComponent] {
        &self.components
    }

    pub fn samples_per_round(&self) -> usize {
        self.components.iter().map(|c| c.draws_per_round).sum()
    }

    /// Weight of each component (draws per round over samples per round)
    pub fn weights(&self) -> Vec<f64> {
        let total = self.samples_per_round() as f64;
        self.components
            .iter()
            .map(|c| c.draws_per_round as f64 / total)
            .collect()
    }

    /// Append one round of draws to `out`
    pub fn draw_round<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut Vec<f64>) {
        for component in &self.components {
            for _ in 0..component.draws_per_round {
                out.push(component.normal.sample(rng));
            }
        }
    }
}

impl Default for GaussianMixture {
    fn default() -> Self {
        Self::bimodal()
    }
}
