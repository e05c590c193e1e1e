// File: crates/plot-core/src/grid.rs
// Summary: Evenly spaced sample points for grids and evaluation ranges.

/// `steps` evenly spaced values over `[start, end]`.
/// The first and last values are exactly `start` and `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            out
        }
    }
}
