// File: crates/posterior/src/summary.rs
// Summary: Per-parameter posterior summaries (mean, sd, HDI, ESS, R-hat) and the summarizer seam.

use std::fmt;

use crate::error::PosteriorError;
use crate::samples::Posterior;
use crate::stats;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryRow {
    pub mean: f64,
    pub sd: f64,
    /// Lower bound of the credible interval.
    pub lower: f64,
    /// Upper bound of the credible interval.
    pub upper: f64,
    pub ess: f64,
    pub r_hat: Option<f64>,
}

/// Summary table keyed by parameter name, in posterior order.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    credible_mass: f64,
    rows: Vec<(String, SummaryRow)>,
}

impl Summary {
    pub fn new(credible_mass: f64) -> Self {
        Self { credible_mass, rows: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, row: SummaryRow) {
        self.rows.push((name.into(), row));
    }

    pub fn credible_mass(&self) -> f64 {
        self.credible_mass
    }

    pub fn get(&self, name: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn mean(&self, name: &str) -> Option<f64> {
        self.get(name).map(|r| r.mean)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &SummaryRow)> {
        self.rows.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers of the interval bounds, e.g. `hdi_2.5%` / `hdi_97.5%`.
    pub fn interval_labels(&self) -> (String, String) {
        let tail = 100.0 * (1.0 - self.credible_mass) / 2.0;
        (format!("hdi_{}%", round3(tail)), format!("hdi_{}%", round3(100.0 - tail)))
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.interval_labels();
        let name_w = self.rows.iter().map(|(n, _)| n.len()).max().unwrap_or(0).max(9);
        writeln!(
            f,
            "{:<name_w$} {:>10} {:>10} {:>10} {:>10} {:>8} {:>6}",
            "", "mean", "sd", lo, hi, "ess", "r_hat"
        )?;
        for (name, r) in &self.rows {
            let r_hat = r.r_hat.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
            writeln!(
                f,
                "{:<name_w$} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>8.0} {:>6}",
                name, r.mean, r.sd, r.lower, r.upper, r.ess, r_hat
            )?;
        }
        Ok(())
    }
}

/// Turns posterior draws into a per-parameter summary at a credible mass.
pub trait Summarizer {
    fn summarize(&self, posterior: &Posterior, credible_mass: f64) -> Result<Summary, PosteriorError>;
}

/// Summaries with highest-density credible intervals.
#[derive(Clone, Copy, Debug, Default)]
pub struct HdiSummarizer;

impl Summarizer for HdiSummarizer {
    fn summarize(&self, posterior: &Posterior, credible_mass: f64) -> Result<Summary, PosteriorError> {
        if !(credible_mass > 0.0 && credible_mass < 1.0) {
            return Err(PosteriorError::InvalidCredibleMass(credible_mass));
        }
        let mut summary = Summary::new(credible_mass);
        for (name, draws) in posterior.iter() {
            let flat: Vec<f64> = draws.iter().copied().collect();
            let (lower, upper) = stats::hdi(&flat, credible_mass);
            summary.push(
                name,
                SummaryRow {
                    mean: stats::mean(&flat),
                    sd: stats::sd(&flat),
                    lower,
                    upper,
                    ess: stats::effective_size_chains(draws.view()),
                    r_hat: stats::r_hat(draws.view()),
                },
            );
        }
        Ok(summary)
    }
}
