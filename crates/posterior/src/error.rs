// File: crates/posterior/src/error.rs
// Summary: Error types for posterior containers, summaries and sampling.

use thiserror::Error;

use crate::samples::ParamRole;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PosteriorError {
    #[error("parameter `{name}` has shape {got:?}, expected {expected:?} (chains, draws)")]
    ShapeMismatch {
        name: String,
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("parameter `{0}` has no draws")]
    Empty(String),

    #[error("chains of parameter `{0}` have different lengths")]
    RaggedChains(String),

    #[error("parameter `{0}` is already present")]
    Duplicate(String),

    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    /// The role mapping names a parameter the posterior does not hold.
    #[error("posterior has no parameter `{key}` for the {role} role (available: {available:?})")]
    UnexpectedParameterNaming {
        role: ParamRole,
        key: String,
        available: Vec<String>,
    },

    #[error("credible mass must lie strictly between 0 and 1, got {0}")]
    InvalidCredibleMass(f64),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("x has {x} observations but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("need at least 2 observations, got {0}")]
    TooFewObservations(usize),

    #[error("all x values are equal; the slope is not identifiable")]
    DegeneratePredictor,

    #[error("invalid sampler options: {0}")]
    InvalidOptions(String),

    #[error("distribution setup failed: {0}")]
    Distribution(String),

    #[error(transparent)]
    Posterior(#[from] PosteriorError),
}
