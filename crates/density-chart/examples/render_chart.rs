//! Render a histogram + KDE chart of a fresh bimodal sample
//!
//! Usage: cargo run -p density-chart --example render_chart -- [BIN_WIDTH] [SVG_PATH] [JSON_PATH]
//!
//! Writes the SVG to stdout when no path is given. Set `RUST_LOG=debug` to
//! see bandwidth selection and layout details.

use anyhow::{Context, Result};
use density_chart::{ChartConfig, ChartSession};
use density_sampling::SampleGenerator;
use std::{env, fs};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let bin_width = match args.next() {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("bin width {raw:?} is not a number"))?,
        None => ChartConfig::DEFAULT_BIN_WIDTH,
    };
    let svg_path = args.next();
    let json_path = args.next();

    let config = ChartConfig::builder().bin_width(bin_width).build()?;
    let mut session = ChartSession::new(config);
    let mut generator = SampleGenerator::from_entropy();
    session.regenerate(&mut generator);

    let chart = session.render()?;
    tracing::info!(
        samples = chart.sample_count,
        excluded = chart.excluded,
        bandwidth = %chart.bandwidth,
        bins = chart.bars.len(),
        "rendered chart"
    );

    let svg = chart.to_svg();
    match svg_path {
        Some(path) => fs::write(&path, svg).with_context(|| format!("writing {path}"))?,
        None => print!("{svg}"),
    }
    if let Some(path) = json_path {
        fs::write(&path, chart.to_json()?).with_context(|| format!("writing {path}"))?;
    }
    Ok(())
}
