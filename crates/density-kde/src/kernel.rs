//! Smoothing kernels

/// A symmetric probability density used as the smoothing kernel
pub trait Kernel: Send + Sync {
    /// Standardized kernel density at `u`
    fn density(&self, u: f64) -> f64;

    /// Contribution of a sample at `distance` from the query point with bandwidth `h`
    #[inline]
    fn weight(&self, distance: f64, bandwidth: f64) -> f64 {
        self.density(distance / bandwidth) / bandwidth
    }

    fn name(&self) -> &str;
}

/// Standard normal kernel, `exp(-u²/2) / sqrt(2π)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussianKernel;

impl GaussianKernel {
    const NORMALIZATION: f64 = 0.398_942_280_401_432_7; // 1 / sqrt(2π)
}

impl Kernel for GaussianKernel {
    #[inline]
    fn density(&self, u: f64) -> f64 {
        Self::NORMALIZATION * (-0.5 * u * u).exp()
    }

    fn name(&self) -> &str {
        "gaussian"
    }
}
