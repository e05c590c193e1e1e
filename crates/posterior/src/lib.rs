// File: crates/posterior/src/lib.rs
// Summary: Posterior sample container, summary statistics, and the Bayesian linear-regression engine.

pub mod engine;
pub mod error;
pub mod samples;
pub mod stats;
pub mod summary;

pub use engine::{GibbsEngine, Priors, RegressionEngine, SamplerOptions};
pub use error::{EngineError, PosteriorError};
pub use samples::{ParamRole, ParamRoles, Posterior};
pub use summary::{HdiSummarizer, Summarizer, Summary, SummaryRow};
