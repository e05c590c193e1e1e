// File: crates/lmplot/src/band.rs
// Summary: Array arithmetic for the mean line and the posterior-predictive band.

use posterior::stats;

/// `intercept + slope * x` at every grid point.
pub fn fitted_line(grid: &[f64], intercept: f64, slope: f64) -> Vec<f64> {
    grid.iter().map(|&x| intercept + slope * x).collect()
}

/// Lower and upper curves of the central `credible_mass` interval of
/// `intercepts[i] + slopes[i] * x` at each grid point.
///
/// Draws are paired by index; both slices must have the same length.
pub fn predictive_band(
    grid: &[f64],
    intercepts: &[f64],
    slopes: &[f64],
    credible_mass: f64,
) -> (Vec<f64>, Vec<f64>) {
    let q_lo = (1.0 - credible_mass) / 2.0;
    let q_hi = 1.0 - q_lo;
    let mut lower = Vec::with_capacity(grid.len());
    let mut upper = Vec::with_capacity(grid.len());
    let mut preds = Vec::with_capacity(intercepts.len());
    for &x in grid {
        preds.clear();
        preds.extend(intercepts.iter().zip(slopes).map(|(&a, &b)| a + b * x));
        preds.sort_by(f64::total_cmp);
        lower.push(stats::quantile_sorted(&preds, q_lo));
        upper.push(stats::quantile_sorted(&preds, q_hi));
    }
    (lower, upper)
}
