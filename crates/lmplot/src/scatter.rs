// File: crates/lmplot/src/scatter.rs
// Summary: Scatter renderer seam and the default point-marker implementation.

use plot_core::{Chart, Color, Series, SeriesStyle};

use crate::options::ScatterStyle;

/// Draws observed points onto a chart.
pub trait ScatterRenderer {
    fn draw_points(&self, chart: &mut Chart, x: &[f64], y: &[f64], color: Color, style: &ScatterStyle);
}

/// One filled circle per observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointScatter;

impl ScatterRenderer for PointScatter {
    fn draw_points(&self, chart: &mut Chart, x: &[f64], y: &[f64], color: Color, style: &ScatterStyle) {
        let points = x.iter().copied().zip(y.iter().copied()).collect();
        let paint = SeriesStyle::new(color).with_opacity(style.opacity).with_z_order(style.z_order);
        let mut series = Series::scatter(points, style.radius, paint);
        series.label = style.label.clone();
        chart.add_series(series);
    }
}
