//! Bandwidth selection
//!
//! The default selector is the robust form of Silverman's rule of thumb:
//!
//! ```text
//! h = 0.9 * min(sd, IQR / 1.34) * n^(-1/5)
//! ```
//!
//! Taking the smaller of the two scales keeps a multimodal sample (whose
//! standard deviation is inflated by the gap between modes) from being
//! oversmoothed.
//!
//! # Degenerate samples
//!
//! The rule is undefined when the spread is zero. The selectors here never
//! return NaN or a non-positive bandwidth:
//!
//! - an empty sample is rejected with [`Error::EmptyDataset`];
//! - if only one of `sd` and `IQR / 1.34` is zero, the other one is used;
//! - if both are zero (one sample, or all samples equal) the
//!   [`DegeneratePolicy`] decides: `Fallback` substitutes `|mean|`, or `1.0`
//!   when the mean is zero, for the spread; `Reject` returns
//!   [`Error::DegenerateDataset`];
//! - the result is clamped to `min_bandwidth`;
//! - a spread or bandwidth that overflows is a [`Error::Computation`] error.

use density_core::dataset::distinct_count;
use density_core::numeric::{all_finite, to_f64_vec};
use density_core::{ensure_non_empty, math, Error, Numeric, Result};
use density_quantile::{sort_sample, DefaultQuantileEstimator, QuantileEstimator};
use density_spread::{Iqr, SpreadEstimator, StandardDeviation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Multiplier in Silverman's rule
pub const SILVERMAN_FACTOR: f64 = 0.9;

/// Smallest bandwidth any selector returns by default
pub const DEFAULT_MIN_BANDWIDTH: f64 = 1e-6;

/// Which scale estimate a bandwidth was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandwidthSource {
    StandardDeviation,
    ScaledIqr,
    /// Degenerate sample; spread substituted by the fallback rule
    Fallback,
    /// Supplied by the caller
    Fixed,
}

/// What to do when a sample has no spread at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Substitute `|mean|` (or 1.0) for the spread
    #[default]
    Fallback,
    /// Return [`Error::DegenerateDataset`]
    Reject,
}

/// A strictly positive smoothing bandwidth and how it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bandwidth {
    value: f64,
    source: BandwidthSource,
    sample_size: usize,
}

impl Bandwidth {
    /// A caller-chosen bandwidth
    pub fn fixed(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::invalid_config("bandwidth", value, "must be positive and finite"));
        }
        Ok(Self {
            value,
            source: BandwidthSource::Fixed,
            sample_size: 0,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn source(&self) -> BandwidthSource {
        self.source
    }

    /// Number of samples the bandwidth was derived from (0 for fixed bandwidths)
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn is_fallback(&self) -> bool {
        self.source == BandwidthSource::Fallback
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h={:.6} ({:?}, n={})", self.value, self.source, self.sample_size)
    }
}

/// Strategy for choosing a bandwidth from a sample
pub trait BandwidthSelector {
    fn select<T: Numeric>(&self, data: &[T]) -> Result<Bandwidth>;
}

/// The two spread estimates a rule-of-thumb selector compares
#[derive(Debug, Clone, Copy, PartialEq)]
struct SpreadPair {
    sd: f64,
    scaled_iqr: f64,
    mean: f64,
    n: usize,
}

fn spread_pair<T: Numeric, Q: QuantileEstimator>(
    data: &[T],
    quantile_est: &Q,
) -> Result<(SpreadPair, Vec<f64>)> {
    ensure_non_empty(data)?;
    if !all_finite(data) {
        return Err(Error::non_finite("bandwidth sample"));
    }
    let mut sorted = to_f64_vec(data);
    sort_sample(&mut sorted)?;

    let n = sorted.len();
    let sd = if n >= 2 {
        StandardDeviation.estimate_sorted(&sorted, quantile_est)?
    } else {
        0.0
    };
    let scaled_iqr = Iqr::silverman().estimate_sorted(&sorted, quantile_est)?;
    let mean = math::mean(&sorted).unwrap_or(0.0);
    if !(sd.is_finite() && scaled_iqr.is_finite() && mean.is_finite()) {
        return Err(Error::Computation(format!(
            "spread of {n} samples overflows (sd = {sd}, IQR/1.34 = {scaled_iqr})"
        )));
    }

    Ok((
        SpreadPair {
            sd,
            scaled_iqr,
            mean,
            n,
        },
        sorted,
    ))
}

/// Pick the spread for a rule of thumb, applying the degenerate policy
fn resolve_spread(
    pair: &SpreadPair,
    sorted: &[f64],
    policy: DegeneratePolicy,
) -> Result<(f64, BandwidthSource)> {
    let sd = (pair.sd > 0.0).then_some(pair.sd);
    let iqr = (pair.scaled_iqr > 0.0).then_some(pair.scaled_iqr);

    match (sd, iqr) {
        (Some(sd), Some(iqr)) if iqr < sd => Ok((iqr, BandwidthSource::ScaledIqr)),
        (Some(sd), _) => Ok((sd, BandwidthSource::StandardDeviation)),
        (None, Some(iqr)) => Ok((iqr, BandwidthSource::ScaledIqr)),
        (None, None) => match policy {
            DegeneratePolicy::Reject => Err(Error::DegenerateDataset {
                distinct: distinct_count(sorted),
            }),
            DegeneratePolicy::Fallback => {
                let spread = if pair.mean != 0.0 { pair.mean.abs() } else { 1.0 };
                warn!(
                    n = pair.n,
                    spread, "sample has no spread, using fallback scale for bandwidth"
                );
                Ok((spread, BandwidthSource::Fallback))
            }
        },
    }
}

fn finish(raw: f64, source: BandwidthSource, n: usize, min_bandwidth: f64) -> Result<Bandwidth> {
    if !raw.is_finite() {
        return Err(Error::Computation(format!(
            "bandwidth for {n} samples is not finite ({raw})"
        )));
    }
    let value = if raw >= min_bandwidth {
        raw
    } else {
        warn!(raw, min_bandwidth, "bandwidth clamped to floor");
        min_bandwidth
    };
    debug!(value, ?source, n, "selected bandwidth");
    Ok(Bandwidth {
        value,
        source,
        sample_size: n,
    })
}

fn validate_floor(min_bandwidth: f64) -> Result<f64> {
    if !min_bandwidth.is_finite() || min_bandwidth <= 0.0 {
        return Err(Error::invalid_config(
            "min_bandwidth",
            min_bandwidth,
            "must be positive and finite",
        ));
    }
    Ok(min_bandwidth)
}

/// Silverman's rule of thumb, `0.9 * min(sd, IQR / 1.34) * n^(-1/5)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SilvermanRule<Q = DefaultQuantileEstimator> {
    quantile_est: Q,
    policy: DegeneratePolicy,
    min_bandwidth: f64,
}

impl SilvermanRule {
    pub fn new() -> Self {
        Self::with_quantile_estimator(DefaultQuantileEstimator::default())
    }

    /// Fail on degenerate samples instead of falling back
    pub fn strict() -> Self {
        Self::new().policy(DegeneratePolicy::Reject)
    }
}

impl<Q: QuantileEstimator> SilvermanRule<Q> {
    pub fn with_quantile_estimator(quantile_est: Q) -> Self {
        Self {
            quantile_est,
            policy: DegeneratePolicy::default(),
            min_bandwidth: DEFAULT_MIN_BANDWIDTH,
        }
    }

    pub fn policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn min_bandwidth(mut self, min_bandwidth: f64) -> Result<Self> {
        self.min_bandwidth = validate_floor(min_bandwidth)?;
        Ok(self)
    }

    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.policy
    }
}

impl Default for SilvermanRule {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: QuantileEstimator> BandwidthSelector for SilvermanRule<Q> {
    fn select<T: Numeric>(&self, data: &[T]) -> Result<Bandwidth> {
        let (pair, sorted) = spread_pair(data, &self.quantile_est)?;
        let (spread, source) = resolve_spread(&pair, &sorted, self.policy)?;
        let raw = SILVERMAN_FACTOR * spread * (pair.n as f64).powf(-0.2);
        finish(raw, source, pair.n, self.min_bandwidth)
    }
}

/// Always returns the same bandwidth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBandwidth(Bandwidth);

impl FixedBandwidth {
    pub fn new(value: f64) -> Result<Self> {
        Ok(Self(Bandwidth::fixed(value)?))
    }
}

impl BandwidthSelector for FixedBandwidth {
    fn select<T: Numeric>(&self, data: &[T]) -> Result<Bandwidth> {
        ensure_non_empty(data)?;
        Ok(Bandwidth {
            sample_size: data.len(),
            ..self.0
        })
    }
}

/// Silverman bandwidth with the default fallback policy
pub fn silverman_bandwidth<T: Numeric>(data: &[T]) -> Result<Bandwidth> {
    SilvermanRule::new().select(data)
}
