//! Fixed-width binning over a fixed domain

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use density_core::{Domain, Error, Numeric, Result};

/// Upper bound on the number of bins a single binner may allocate
pub const MAX_BINS: usize = 1_000_000;

/// Relative slack used when deciding whether the last threshold reaches `hi`
const CEIL_TOLERANCE: f64 = 1e-9;

/// Fixed-width histogram builder over a fixed domain
///
/// Thresholds sit at `lo + i * bin_width`; the last bin ends at `hi` and may be
/// narrower than the others. Every bin is half-open except the last, which
/// also takes values equal to `hi`. Samples outside the domain are counted as
/// excluded rather than binned.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainBinner {
    domain: Domain,
    bin_width: f64,
    edges: Vec<f64>,
}

impl DomainBinner {
    /// Create a binner, rejecting non-positive or non-finite widths
    pub fn new(domain: Domain, bin_width: f64) -> Result<Self> {
        if !bin_width.is_finite() || bin_width <= 0.0 {
            return Err(Error::invalid_config(
                "bin_width",
                bin_width,
                "must be positive and finite",
            ));
        }

        let num_bins = bin_count(domain.span(), bin_width);
        if num_bins > MAX_BINS {
            return Err(Error::InvalidConfiguration(format!(
                "bin_width = {bin_width} over {domain} needs {num_bins} bins, limit is {MAX_BINS}"
            )));
        }

        let mut edges: Vec<f64> = (0..num_bins)
            .map(|i| domain.lo() + i as f64 * bin_width)
            .collect();
        edges.push(domain.hi());

        Ok(Self {
            domain,
            bin_width,
            edges,
        })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Number of bins, `ceil(span / bin_width)`
    pub fn num_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// All `num_bins + 1` bin edges, from `lo` to `hi`
    pub fn thresholds(&self) -> &[f64] {
        &self.edges
    }

    /// Index of the bin holding `value`, `None` outside the domain or for NaN
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !self.domain.contains(value) {
            return None;
        }
        // edges[0] == lo <= value, so the partition point is at least 1
        let idx = self.edges.partition_point(|&edge| edge <= value) - 1;
        Some(idx.min(self.num_bins() - 1))
    }

    /// Count samples into bins
    pub fn bin<T: Numeric>(&self, sample: &[T]) -> Histogram {
        let mut counts = vec![0usize; self.num_bins()];
        let mut excluded = 0;

        for &x in sample {
            match self.bin_index(x.as_f64()) {
                Some(idx) => counts[idx] += 1,
                None => excluded += 1,
            }
        }

        let total = sample.len();
        let bins = self
            .edges
            .windows(2)
            .zip(counts)
            .map(|(w, count)| HistogramBin::new(w[0], w[1], count, total))
            .collect();

        Histogram::new(bins, total, excluded, self.domain)
    }
}

impl HistogramBuilder for DomainBinner {
    fn build<T: Numeric>(&self, sample: &[T]) -> Result<Histogram> {
        Ok(self.bin(sample))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins())
    }
}

/// `ceil(span / width)`, ignoring float noise that would add an empty sliver bin
fn bin_count(span: f64, width: f64) -> usize {
    let raw = span / width;
    if raw >= MAX_BINS as f64 {
        return MAX_BINS + 1;
    }
    let mut n = raw.ceil().max(1.0);
    if n > 1.0 && (n - 1.0) * width >= span * (1.0 - CEIL_TOLERANCE) {
        n -= 1.0;
    }
    n as usize
}

/// Bin `data` over `domain` with the given width
pub fn bin<T: Numeric>(data: &[T], domain: Domain, bin_width: f64) -> Result<Histogram> {
    Ok(DomainBinner::new(domain, bin_width)?.bin(data))
}
