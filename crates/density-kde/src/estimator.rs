//! Kernel density evaluation

use crate::bandwidth::{Bandwidth, BandwidthSelector, SilvermanRule};
use crate::kernel::{GaussianKernel, Kernel};
use density_core::numeric::{all_finite, to_f64_vec};
use density_core::{ensure_non_empty, Error, Numeric, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Estimated density at one query position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub position: f64,
    pub density: f64,
}

impl DensityPoint {
    pub fn new(position: f64, density: f64) -> Self {
        Self { position, density }
    }
}

/// Kernel density estimator
///
/// Combines a smoothing [`Kernel`] with a [`BandwidthSelector`]. The default
/// is a Gaussian kernel with Silverman's rule:
///
/// ```rust
/// use density_kde::KernelDensity;
///
/// let data = [-1.1, -0.9, 1.8, 2.0, 2.2];
/// let kde = KernelDensity::new();
/// let points = kde.evaluate(&data, &[-1.0, 0.5, 2.0]).unwrap();
/// assert!(points[2].density > points[1].density);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KernelDensity<K = GaussianKernel, S = SilvermanRule> {
    kernel: K,
    selector: S,
}

impl KernelDensity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Kernel, S: BandwidthSelector> KernelDensity<K, S> {
    pub fn with_parts(kernel: K, selector: S) -> Self {
        Self { kernel, selector }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Select a bandwidth for `data`
    pub fn bandwidth<T: Numeric>(&self, data: &[T]) -> Result<Bandwidth> {
        self.selector.select(data)
    }

    /// Density at each query position, in query order
    ///
    /// The bandwidth is chosen from `data` by the configured selector.
    #[instrument(skip_all, fields(n = data.len(), queries = query.len()))]
    pub fn evaluate<T: Numeric>(&self, data: &[T], query: &[f64]) -> Result<Vec<DensityPoint>> {
        let bandwidth = self.bandwidth(data)?;
        self.evaluate_with(data, query, &bandwidth)
    }

    /// Density at each query position using a precomputed bandwidth
    pub fn evaluate_with<T: Numeric>(
        &self,
        data: &[T],
        query: &[f64],
        bandwidth: &Bandwidth,
    ) -> Result<Vec<DensityPoint>> {
        ensure_non_empty(data)?;
        if !all_finite(data) {
            return Err(Error::non_finite("density sample"));
        }
        let samples = to_f64_vec(data);
        if query.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("density query position"));
        }

        let h = bandwidth.value();
        debug!(h, n = samples.len(), queries = query.len(), "evaluating kernel density");

        let kernel = &self.kernel;
        let points = map_queries(query, |d| {
            let sum: f64 = samples.iter().map(|&d2| kernel.weight(d - d2, h)).sum();
            DensityPoint::new(d, sum / samples.len() as f64)
        });

        if let Some(bad) = points.iter().find(|p| !p.density.is_finite()) {
            return Err(Error::Computation(format!(
                "density at {} is not finite (h = {h})",
                bad.position
            )));
        }
        Ok(points)
    }
}

#[cfg(feature = "parallel")]
fn map_queries<F>(query: &[f64], f: F) -> Vec<DensityPoint>
where
    F: Fn(f64) -> DensityPoint + Sync + Send,
{
    query.par_iter().map(|&d| f(d)).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_queries<F>(query: &[f64], f: F) -> Vec<DensityPoint>
where
    F: Fn(f64) -> DensityPoint,
{
    query.iter().map(|&d| f(d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bandwidth::FixedBandwidth;
    use approx::assert_relative_eq;
    use statrs::distribution::{Continuous, Normal};

    #[test]
    fn test_single_sample_is_kernel() {
        let kde = KernelDensity::with_parts(GaussianKernel, FixedBandwidth::new(0.5).unwrap());
        let points = kde.evaluate(&[1.0], &[0.0, 1.0, 2.5]).unwrap();
        let normal = Normal::new(1.0, 0.5).unwrap();
        for p in &points {
            assert_relative_eq!(p.density, normal.pdf(p.position), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_average_of_kernels() {
        let kde = KernelDensity::with_parts(GaussianKernel, FixedBandwidth::new(1.0).unwrap());
        let points = kde.evaluate(&[0.0, 2.0], &[1.0]).unwrap();
        let expected = Normal::new(0.0, 1.0).unwrap().pdf(1.0);
        assert_relative_eq!(points[0].density, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_preserves_query_order() {
        let kde = KernelDensity::new();
        let query = [3.0, -1.0, 0.5, 0.5, 10.0];
        let points = kde.evaluate(&[0.0, 1.0, 2.0], &query).unwrap();
        assert_eq!(points.len(), query.len());
        for (p, q) in points.iter().zip(query) {
            assert_eq!(p.position, q);
            assert!(p.density >= 0.0);
        }
    }

    #[test]
    fn test_empty_query_is_empty_result() {
        let kde = KernelDensity::new();
        assert!(kde.evaluate(&[1.0, 2.0], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_errors() {
        let kde = KernelDensity::new();
        assert!(matches!(kde.evaluate::<f64>(&[], &[0.0]), Err(Error::EmptyDataset)));
        assert!(matches!(
            kde.evaluate(&[1.0, 2.0], &[f64::NAN]),
            Err(Error::InvalidInput(_))
        ));
        let bw = Bandwidth::fixed(1.0).unwrap();
        assert!(matches!(
            kde.evaluate_with(&[1.0, f64::INFINITY], &[0.0], &bw),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_evaluate_with_matches_evaluate() {
        let kde = KernelDensity::new();
        let data = [-1.0, -0.5, 2.0, 2.5, 3.0];
        let query = [-1.0, 0.0, 1.0, 2.0];
        let bw = kde.bandwidth(&data).unwrap();
        assert_eq!(
            kde.evaluate(&data, &query).unwrap(),
            kde.evaluate_with(&data, &query, &bw).unwrap()
        );
    }
}
