// File: crates/posterior/src/stats.rs
// Summary: Sample statistics over posterior draws: moments, quantiles, HDI, ESS and R-hat.

use ndarray::ArrayView2;

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); 0 for fewer than 2 values.
pub fn sd(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss = values.iter().map(|v| (v - m).powi(2)).sum::<f64>();
    (ss / (n as f64 - 1.0)).sqrt()
}

/// Copy of `values` in ascending order (total order, NaN last).
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// Empirical quantile of ascending `sorted` at `q` in [0, 1], linearly
/// interpolating between order statistics.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    lerp(sorted[lo], sorted[hi], h - lo as f64)
}

/// Empirical quantile of unsorted `values`.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    quantile_sorted(&sorted(values), q)
}

// Anchored at whichever end is nearer so t = 0 and t = 1 reproduce the
// endpoints exactly and the result never leaves [a, b].
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let d = b - a;
    if t < 0.5 { a + d * t } else { b - d * (1.0 - t) }
}

/// Highest density interval: the narrowest window of the sorted draws
/// holding `floor(mass * n)` steps. Returns `(lower, upper)`.
pub fn hdi(values: &[f64], mass: f64) -> (f64, f64) {
    let s = sorted(values);
    let n = s.len();
    if n == 0 {
        return (f64::NAN, f64::NAN);
    }
    let width = ((mass * n as f64).floor() as usize).min(n - 1);
    let (best, _) = (0..n - width)
        .map(|i| (i, s[i + width] - s[i]))
        .fold((0, f64::INFINITY), |acc, (i, w)| if w < acc.1 { (i, w) } else { acc });
    (s[best], s[best + width])
}

/// Effective sample size of one chain: `n / (1 + 2 * sum(rho_k))`, summing
/// autocorrelations until they drop below 0.05.
pub fn effective_size(chain: &[f64]) -> f64 {
    let n = chain.len();
    if n < 10 {
        return n as f64;
    }
    let m = mean(chain);
    let var = chain.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n as f64 - 1.0);
    if var < 1e-10 {
        return n as f64;
    }

    let mut rho_sum = 0.0;
    for lag in 1..n / 2 {
        let num: f64 = (0..n - lag).map(|i| (chain[i] - m) * (chain[i + lag] - m)).sum();
        let rho = num / ((n - lag) as f64 * var);
        if rho.abs() < 0.05 {
            break;
        }
        rho_sum += rho;
    }
    let denom = 1.0 + 2.0 * rho_sum;
    if denom <= 1.0 {
        return n as f64;
    }
    n as f64 / denom
}

/// Effective sample size summed over the rows (chains) of `draws`.
pub fn effective_size_chains(draws: ArrayView2<'_, f64>) -> f64 {
    draws
        .rows()
        .into_iter()
        .map(|row| effective_size(&row.to_vec()))
        .sum()
}

/// Gelman–Rubin potential scale reduction over the rows (chains) of `draws`.
/// `None` with fewer than two chains or two draws per chain.
pub fn r_hat(draws: ArrayView2<'_, f64>) -> Option<f64> {
    let (m, n) = draws.dim();
    if m < 2 || n < 2 {
        return None;
    }
    let chains: Vec<Vec<f64>> = draws.rows().into_iter().map(|r| r.to_vec()).collect();
    let means: Vec<f64> = chains.iter().map(|c| mean(c)).collect();
    let w = chains.iter().map(|c| sd(c).powi(2)).sum::<f64>() / m as f64;
    let b = n as f64 * sd(&means).powi(2);
    if w <= 0.0 {
        return Some(if b <= 0.0 { 1.0 } else { f64::INFINITY });
    }
    let var_hat = (n as f64 - 1.0) / n as f64 * w + b / n as f64;
    Some((var_hat / w).sqrt())
}
