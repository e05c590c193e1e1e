// File: crates/lmplot/src/plotter.rs
// Summary: RegressionPlotter composing scatter drawing, posterior sampling, summarizing and band rendering.

use plot_core::{linspace, AxisId, Color, ColorCycle, Figure, Series, SeriesStyle};
use posterior::{GibbsEngine, HdiSummarizer, ParamRole, Posterior, RegressionEngine, Summarizer, Summary};
use tracing::debug;

use crate::band::{fitted_line, predictive_band};
use crate::data::SamplePair;
use crate::error::PlotError;
use crate::options::{PlotOptions, BAND_Z_ORDER, GRID_POINTS};
use crate::scatter::{PointScatter, ScatterRenderer};

/// Everything a regression plot call produced.
#[derive(Clone, Debug)]
pub struct RegressionPlot {
    /// Axes the three layers were added to.
    pub axis: AxisId,
    /// The supplied posterior, or the one sampled for this call.
    pub posterior: Posterior,
    pub summary: Summary,
    /// Evaluation points of the line and band.
    pub grid: Vec<f64>,
    /// Posterior mean line at each grid point.
    pub line: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub scatter_color: Color,
    pub line_color: Color,
}

/// Scatter and line colors. With neither given, both take one color from
/// `cycle`; with one given, the other copies it.
pub fn resolve_colors(
    scatter: Option<Color>,
    line: Option<Color>,
    cycle: &mut ColorCycle,
) -> (Color, Color) {
    match (scatter, line) {
        (Some(s), Some(l)) => (s, l),
        (Some(s), None) => (s, s),
        (None, Some(l)) => (l, l),
        (None, None) => {
            let c = cycle.next_color();
            (c, c)
        }
    }
}

fn validate(opts: &PlotOptions) -> Result<(), PlotError> {
    if !(opts.credible_mass > 0.0 && opts.credible_mass < 1.0) {
        return Err(PlotError::InvalidCredibleMass(opts.credible_mass));
    }
    if !(0.0..=1.0).contains(&opts.band_opacity) {
        return Err(PlotError::InvalidOpacity(opts.band_opacity));
    }
    if let Some((min, max)) = opts.x_range {
        // Descending ranges are allowed; the grid then runs from `min` down to `max`.
        if !(min.is_finite() && max.is_finite()) {
            return Err(PlotError::InvalidRange { min, max });
        }
    }
    Ok(())
}

/// Draws observed data, the posterior mean regression line and a
/// posterior-predictive credible band onto one chart.
#[derive(Clone, Debug, Default)]
pub struct RegressionPlotter<E = GibbsEngine, S = HdiSummarizer, R = PointScatter> {
    engine: E,
    summarizer: S,
    scatter: R,
}

impl RegressionPlotter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E, S, R> RegressionPlotter<E, S, R> {
    pub fn from_parts(engine: E, summarizer: S, scatter: R) -> Self {
        Self { engine, summarizer, scatter }
    }

    pub fn with_engine<E2>(self, engine: E2) -> RegressionPlotter<E2, S, R> {
        RegressionPlotter { engine, summarizer: self.summarizer, scatter: self.scatter }
    }

    pub fn with_summarizer<S2>(self, summarizer: S2) -> RegressionPlotter<E, S2, R> {
        RegressionPlotter { engine: self.engine, summarizer, scatter: self.scatter }
    }

    pub fn with_scatter<R2>(self, scatter: R2) -> RegressionPlotter<E, S, R2> {
        RegressionPlotter { engine: self.engine, summarizer: self.summarizer, scatter }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E, S, R> RegressionPlotter<E, S, R>
where
    E: RegressionEngine,
    S: Summarizer,
    R: ScatterRenderer,
{
    /// Plot `data` with its fitted regression on `opts.axis` (or the current
    /// axes of `figure`). Samples a posterior with the engine unless one is
    /// supplied.
    ///
    /// Adds a scatter, a line and a band layer. Option errors are reported
    /// before anything is drawn; later failures leave the scatter in place.
    pub fn plot_regression(
        &self,
        figure: &mut Figure,
        data: &SamplePair,
        posterior: Option<Posterior>,
        opts: &PlotOptions,
    ) -> Result<RegressionPlot, PlotError> {
        validate(opts)?;

        let axis = match opts.axis {
            Some(id) => id,
            None => figure.gca(),
        };
        let chart = figure.chart_mut(axis).ok_or(PlotError::UnknownAxis(axis))?;

        let (scatter_color, line_color) = resolve_colors(opts.scatter_color, opts.line_color, &mut chart.cycle);
        debug!(?axis, ?scatter_color, ?line_color, points = data.len(), "regression plot");

        self.scatter.draw_points(chart, data.x(), data.y(), scatter_color, &opts.scatter_style);

        let posterior = match posterior {
            Some(p) => p,
            None => self.engine.fit(data.x(), data.y(), &opts.sampler)?,
        };
        let summary = self.summarizer.summarize(&posterior, opts.credible_mass)?;

        let intercepts = posterior.role_samples(ParamRole::Intercept)?;
        let slopes = posterior.role_samples(ParamRole::Slope)?;
        let roles = posterior.roles();
        let mean_of = |key: &str| summary.mean(key).ok_or_else(|| PlotError::MissingSummary(key.to_string()));
        let intercept = mean_of(&roles.intercept)?;
        let slope = mean_of(&roles.slope)?;

        let (x_min, x_max) = opts.x_range.unwrap_or_else(|| data.x_span());
        let grid = linspace(x_min, x_max, GRID_POINTS);

        let line = fitted_line(&grid, intercept, slope);
        let line_paint = SeriesStyle::new(line_color)
            .with_opacity(opts.line_style.opacity)
            .with_z_order(opts.line_style.z_order);
        let mut line_series = Series::line(
            grid.iter().copied().zip(line.iter().copied()).collect(),
            opts.line_style.width,
            line_paint,
        );
        line_series.label = opts.line_style.label.clone();
        chart.add_series(line_series);

        let (lower, upper) = predictive_band(&grid, &intercepts, &slopes, opts.credible_mass);
        let band_paint = SeriesStyle::new(line_color)
            .with_opacity(opts.band_opacity)
            .with_z_order(BAND_Z_ORDER);
        chart.add_series(Series::band(&grid, &lower, &upper, band_paint));

        debug!(intercept, slope, draws = intercepts.len(), x_min, x_max, "regression layers added");

        Ok(RegressionPlot {
            axis,
            posterior,
            summary,
            grid,
            line,
            lower,
            upper,
            scatter_color,
            line_color,
        })
    }
}
