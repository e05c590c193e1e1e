// File: crates/lmplot/src/lib.rs
// Summary: Bayesian linear-regression plot: scatter of observations, posterior mean line, credible band.

pub mod band;
pub mod data;
pub mod error;
pub mod options;
pub mod plotter;
pub mod scatter;

pub use data::SamplePair;
pub use error::PlotError;
pub use options::{LineStyle, PlotOptions, ScatterStyle, GRID_POINTS};
pub use plotter::{resolve_colors, RegressionPlot, RegressionPlotter};
pub use scatter::{PointScatter, ScatterRenderer};

pub use plot_core::{AxisId, Color, Figure};
pub use posterior::{Posterior, SamplerOptions, Summary};

/// [`RegressionPlotter::plot_regression`] with the Gibbs engine, HDI
/// summaries and point markers.
pub fn plot_regression(
    figure: &mut Figure,
    data: &SamplePair,
    posterior: Option<Posterior>,
    opts: &PlotOptions,
) -> Result<RegressionPlot, PlotError> {
    RegressionPlotter::new().plot_regression(figure, data, posterior, opts)
}
