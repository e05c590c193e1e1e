// File: crates/lmplot/src/error.rs
// Summary: Failure modes of a regression plot call.

use plot_core::AxisId;
use posterior::{EngineError, PosteriorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("x has {x} observations but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("no observations to plot")]
    EmptyData,

    #[error("{axis}[{index}] is not finite")]
    NonFinite { axis: &'static str, index: usize },

    #[error("credible mass must lie strictly between 0 and 1, got {0}")]
    InvalidCredibleMass(f64),

    #[error("band opacity must lie in [0, 1], got {0}")]
    InvalidOpacity(f32),

    #[error("x range ({min}, {max}) must have finite ends")]
    InvalidRange { min: f64, max: f64 },

    #[error("figure has no axes {0:?}")]
    UnknownAxis(AxisId),

    #[error("summary has no row for parameter `{0}`")]
    MissingSummary(String),

    #[error(transparent)]
    Posterior(#[from] PosteriorError),

    /// Sampling failures, surfaced unchanged.
    #[error("sampling failed: {0}")]
    Engine(#[from] EngineError),
}
