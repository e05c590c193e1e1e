// File: crates/lmplot/src/options.rs
// Summary: Immutable per-call configuration for the regression plot.

use plot_core::{AxisId, Color};
use posterior::SamplerOptions;

/// Number of x positions the fitted line and band are evaluated at.
pub const GRID_POINTS: usize = 100;

/// Z-order of the credible band; above the line, tied with the scatter.
pub const BAND_Z_ORDER: f32 = 1.0;

/// Styling forwarded to the scatter renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterStyle {
    /// Marker radius in pixels.
    pub radius: f32,
    pub opacity: f32,
    pub z_order: f32,
    pub label: Option<String>,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self { radius: 4.0, opacity: 1.0, z_order: 1.0, label: None }
    }
}

/// Styling of the posterior mean line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub opacity: f32,
    /// Below the scatter by default.
    pub z_order: f32,
    pub label: Option<String>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { width: 1.5, opacity: 1.0, z_order: 0.0, label: None }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// Mass of the summary interval and of the shaded band, in (0, 1).
    pub credible_mass: f64,
    pub band_opacity: f32,
    pub scatter_color: Option<Color>,
    pub line_color: Option<Color>,
    /// Span of the line and band; the observed x span when unset.
    pub x_range: Option<(f64, f64)>,
    /// Target axes; the figure's current axes when unset.
    pub axis: Option<AxisId>,
    pub scatter_style: ScatterStyle,
    pub line_style: LineStyle,
    /// Used only when no posterior is supplied.
    pub sampler: SamplerOptions,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            credible_mass: 0.95,
            band_opacity: 0.6,
            scatter_color: None,
            line_color: None,
            x_range: None,
            axis: None,
            scatter_style: ScatterStyle::default(),
            line_style: LineStyle::default(),
            sampler: SamplerOptions::default(),
        }
    }
}

impl PlotOptions {
    pub fn with_credible_mass(mut self, mass: f64) -> Self {
        self.credible_mass = mass;
        self
    }

    pub fn with_band_opacity(mut self, opacity: f32) -> Self {
        self.band_opacity = opacity;
        self
    }

    pub fn with_scatter_color(mut self, color: Color) -> Self {
        self.scatter_color = Some(color);
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn with_axis(mut self, axis: AxisId) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn with_scatter_style(mut self, style: ScatterStyle) -> Self {
        self.scatter_style = style;
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn with_sampler(mut self, sampler: SamplerOptions) -> Self {
        self.sampler = sampler;
        self
    }
}
