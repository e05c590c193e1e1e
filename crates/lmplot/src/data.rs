// File: crates/lmplot/src/data.rs
// Summary: Validated paired observations.

use crate::error::PlotError;

/// Paired `(x, y)` observations of equal, non-zero length with finite values.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePair {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SamplePair {
    pub fn new(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Result<Self, PlotError> {
        let (x, y) = (x.into(), y.into());
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if x.is_empty() {
            return Err(PlotError::EmptyData);
        }
        for (axis, values) in [("x", &x), ("y", &y)] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(PlotError::NonFinite { axis, index });
            }
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] { &self.x }

    pub fn y(&self) -> &[f64] { &self.y }

    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// `(min(x), max(x))`.
    pub fn x_span(&self) -> (f64, f64) {
        self.x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}
