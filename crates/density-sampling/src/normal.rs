//! Normal draws via the Box-Muller cosine transform

use density_core::{Error, Result};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Normal distribution sampled with one cosine Box-Muller transform per draw.
///
/// Each draw consumes two uniforms: `u = 1 - U[0, 1)` lies in `(0, 1]`, so
/// `ln u` is always finite, and `v = U[0, 1)` picks the angle. The sine
/// partner of the pair is discarded, so draws are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxMullerNormal {
    mean: f64,
    std_dev: f64,
}

impl BoxMullerNormal {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::invalid_config("mean", mean, "must be finite"));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(Error::invalid_config(
                "std_dev",
                std_dev,
                "must be non-negative and finite",
            ));
        }
        Ok(Self { mean, std_dev })
    }

    /// Construct from parameters already known to be valid
    pub(crate) const fn from_parts(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Map a pair of uniforms to a draw from this distribution
    ///
    /// `u` must lie in `(0, 1]`; `v` in `[0, 1)`.
    pub fn transform(&self, u: f64, v: f64) -> f64 {
        let z = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
        self.mean + self.std_dev * z
    }
}

impl Distribution<f64> for BoxMullerNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u = 1.0 - rng.gen::<f64>();
        let v = rng.gen::<f64>();
        self.transform(u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use statrs::statistics::Statistics;

    #[test]
    fn test_transform_known_points() {
        let normal = BoxMullerNormal::new(2.0, 0.75).unwrap();
        // u = 1 gives z = 0 regardless of angle
        assert_eq!(normal.transform(1.0, 0.3), 2.0);
        // u = e^-0.5 gives radius 1; v = 0.5 points at -1
        assert_relative_eq!(normal.transform((-0.5f64).exp(), 0.5), 2.0 - 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_moments() {
        let normal = BoxMullerNormal::new(-1.0, 0.5).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let draws: Vec<f64> = (0..20_000).map(|_| normal.sample(&mut rng)).collect();

        assert!(draws.iter().all(|x| x.is_finite()));
        assert_relative_eq!(draws.clone().mean(), -1.0, epsilon = 0.02);
        assert_relative_eq!(draws.std_dev(), 0.5, epsilon = 0.02);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(BoxMullerNormal::new(f64::NAN, 1.0).is_err());
        assert!(BoxMullerNormal::new(0.0, -1.0).is_err());
        assert!(BoxMullerNormal::new(0.0, f64::INFINITY).is_err());
        assert!(BoxMullerNormal::new(0.0, 0.0).is_ok());
    }
}
