//! Histogram and density curve charts
//!
//! Lays out a histogram of a sample together with its kernel density
//! estimate as plain pixel geometry ([`DrawableChart`]), which can be
//! serialized or written out as SVG.
//!
//! # Example
//!
//! ```rust
//! use density_chart::{ChartConfig, ChartSession};
//! use density_sampling::SampleGenerator;
//!
//! let config = ChartConfig::builder().bin_width(0.25).build().unwrap();
//! let mut session = ChartSession::new(config);
//! let mut generator = SampleGenerator::seeded(7);
//!
//! session.regenerate(&mut generator);
//! let chart = session.render().unwrap();
//! assert_eq!(chart.bars.len(), 36);
//!
//! // Only the bin width changes; the sample stays the same
//! session.set_bin_width(1.0).unwrap();
//! let svg = session.render().unwrap().to_svg();
//! assert!(svg.contains("<path"));
//! ```

pub mod config;
pub mod render;
pub mod scale;
pub mod session;
pub mod svg;

pub use config::{ChartConfig, ChartConfigBuilder};
pub use render::{render, Bar, CurvePoint, DrawableChart};
pub use scale::LinearScale;
pub use session::ChartSession;
