//! SVG output

use crate::render::{CurvePoint, DrawableChart};
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const BAR_FILL: &str = "#bbb";
const CURVE_STROKE: &str = "#000";
const CURVE_WIDTH: f64 = 1.5;

impl DrawableChart {
    /// Standalone SVG document: a grey bar group under a black density path
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(256 + 64 * (self.bars.len() + self.curve.len()));
        // Writing into a String cannot fail
        let _ = writeln!(
            svg,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );

        let _ = writeln!(svg, r#"  <g fill="{BAR_FILL}">"#);
        for bar in &self.bars {
            let _ = writeln!(
                svg,
                r#"    <rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}"/>"#,
                bar.x, bar.y, bar.width, bar.height
            );
        }
        svg.push_str("  </g>\n");

        if !self.curve.is_empty() {
            let _ = write!(
                svg,
                r#"  <path fill="none" stroke="{CURVE_STROKE}" stroke-width="{CURVE_WIDTH}""#
            );
            let _ = writeln!(svg, r#" stroke-linejoin="round" d="{}"/>"#, path_data(&self.curve));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Polyline path commands through every point
fn path_data(points: &[CurvePoint]) -> String {
    let mut d = String::with_capacity(points.len() * 20);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{:.3},{:.3}", p.x, p.y);
    }
    d
}
