//! Chart geometry
//!
//! [`render`] turns a sample into pixel geometry: one bar per histogram bin,
//! heights in relative frequency, and a density curve rescaled so its peak
//! sits level with the tallest bar. Nothing here touches a drawing backend;
//! [`DrawableChart::to_svg`] is one consumer of the geometry.

use crate::config::ChartConfig;
use crate::scale::LinearScale;
use density_core::{ensure_non_empty, math, Error, Result};
use density_histogram::{DomainBinner, Histogram};
use density_kde::{nice_ticks, Bandwidth, KernelDensity};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One histogram bar in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Samples in the bin
    pub count: usize,
}

/// One vertex of the density curve in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Renderable histogram and density curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawableChart {
    pub width: f64,
    pub height: f64,
    /// Pixel y of zero frequency
    pub baseline: f64,
    pub bars: Vec<Bar>,
    pub curve: Vec<CurvePoint>,
    pub bandwidth: Bandwidth,
    /// Samples in the dataset, including those outside the domain
    pub sample_count: usize,
    /// Samples outside the domain
    pub excluded: usize,
}

impl DrawableChart {
    /// Geometry as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Computation(e.to_string()))
    }
}

/// Lay out the histogram and density curve for `data`
///
/// Bar heights are `count / n` with `n` the full sample size, so samples
/// outside the domain shrink the bars without being drawn. The density curve
/// is evaluated at round tick positions across the domain and scaled so its
/// maximum equals the tallest bar.
///
/// # Errors
///
/// - [`Error::EmptyDataset`] for an empty sample
/// - [`Error::InvalidInput`] for non-finite samples or when no sample falls
///   inside the domain (there is nothing to scale the y axis by)
#[instrument(skip_all, fields(n = data.len(), bin_width = config.bin_width))]
pub fn render(data: &[f64], config: &ChartConfig) -> Result<DrawableChart> {
    ensure_non_empty(data)?;
    config.validate()?;
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("chart sample"));
    }

    let domain = config.domain;
    let binner = DomainBinner::new(domain, config.bin_width)?;
    let histogram = binner.bin(data);
    let n = data.len() as f64;

    let max_count = histogram.max_count();
    if max_count == 0 {
        return Err(Error::InvalidInput(format!(
            "none of the {} samples fall inside {domain}",
            data.len()
        )));
    }
    let max_y = max_count as f64 / n;

    let xs = LinearScale::new((domain.lo(), domain.hi()), config.x_range());
    let ys = LinearScale::new((0.0, max_y), config.y_range());
    let baseline = ys.apply(0.0);

    let bars = layout_bars(&histogram, n, &xs, &ys);

    let kde = KernelDensity::new();
    let bandwidth = kde.bandwidth(data)?;
    let grid = nice_ticks(domain.lo(), domain.hi(), config.query_ticks);
    let mut points = kde.evaluate_with(data, &grid, &bandwidth)?;
    points.sort_by(|a, b| a.position.total_cmp(&b.position));

    let max_density = math::max_finite(points.iter().map(|p| p.density)).unwrap_or(0.0);
    let curve = points
        .iter()
        .map(|p| {
            let y = if max_density > 0.0 {
                ys.apply(p.density / max_density * max_y)
            } else {
                baseline
            };
            CurvePoint { x: xs.apply(p.position), y }
        })
        .collect::<Vec<_>>();

    debug!(
        bars = bars.len(),
        curve = curve.len(),
        h = bandwidth.value(),
        excluded = histogram.excluded(),
        "chart laid out"
    );

    Ok(DrawableChart {
        width: config.width,
        height: config.height,
        baseline,
        bars,
        curve,
        bandwidth,
        sample_count: data.len(),
        excluded: histogram.excluded(),
    })
}

/// Bars leave a one pixel gap on their left edge
fn layout_bars(histogram: &Histogram, n: f64, xs: &LinearScale, ys: &LinearScale) -> Vec<Bar> {
    let baseline = ys.apply(0.0);
    histogram
        .bins()
        .iter()
        .map(|bin| {
            let left = xs.apply(bin.left);
            let right = xs.apply(bin.right);
            let y = ys.apply(bin.count as f64 / n);
            Bar {
                x: left + 1.0,
                y,
                width: (right - left - 1.0).max(0.0),
                height: baseline - y,
                count: bin.count,
            }
        })
        .collect()
}
