// File: crates/posterior/src/engine.rs
// Summary: Bayesian simple linear regression (y ~ x) sampled with a blocked Gibbs sampler.

use std::time::Instant;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Gamma, StandardNormal};
use tracing::{debug, info};

use crate::error::EngineError;
use crate::samples::{ParamRoles, Posterior};

/// Produces posterior draws for the intercept and slope of `y ~ x`.
pub trait RegressionEngine {
    /// Fit the model. The returned posterior carries the engine's role mapping.
    fn fit(&self, x: &[f64], y: &[f64], opts: &SamplerOptions) -> Result<Posterior, EngineError>;
}

/// Prior hyperparameters.
///
/// `Intercept ~ Normal(0, intercept_sd^2)`, flat when `intercept_sd` is `None`;
/// `x ~ Normal(0, coefficient_sd^2)`; `sd^2 ~ InvGamma(noise_shape, noise_rate)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Priors {
    pub intercept_sd: Option<f64>,
    pub coefficient_sd: f64,
    pub noise_shape: f64,
    pub noise_rate: f64,
}

impl Default for Priors {
    fn default() -> Self {
        Self { intercept_sd: None, coefficient_sd: 1e3, noise_shape: 1e-3, noise_rate: 1e-3 }
    }
}

/// Sampler configuration, passed through untouched by the plotting layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerOptions {
    pub chains: usize,
    /// Draws kept per chain.
    pub draws: usize,
    /// Warm-up sweeps discarded per chain.
    pub tune: usize,
    /// Sweeps per kept draw.
    pub thin: usize,
    /// Chain `c` is seeded with `seed + c`; entropy when unset.
    pub seed: Option<u64>,
    pub priors: Priors,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self { chains: 4, draws: 1000, tune: 1000, thin: 1, seed: None, priors: Priors::default() }
    }
}

impl SamplerOptions {
    pub fn with_chains(mut self, chains: usize) -> Self {
        self.chains = chains;
        self
    }

    pub fn with_draws(mut self, draws: usize) -> Self {
        self.draws = draws;
        self
    }

    pub fn with_tune(mut self, tune: usize) -> Self {
        self.tune = tune;
        self
    }

    pub fn with_thin(mut self, thin: usize) -> Self {
        self.thin = thin;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_priors(mut self, priors: Priors) -> Self {
        self.priors = priors;
        self
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.chains == 0 || self.draws == 0 || self.thin == 0 {
            return Err(EngineError::InvalidOptions(format!(
                "chains ({}), draws ({}) and thin ({}) must be positive",
                self.chains, self.draws, self.thin
            )));
        }
        let p = &self.priors;
        let intercept_ok = p.intercept_sd.map_or(true, |sd| sd > 0.0);
        if !(intercept_ok && p.coefficient_sd > 0.0 && p.noise_shape > 0.0 && p.noise_rate > 0.0) {
            return Err(EngineError::InvalidOptions(format!("prior scales must be positive: {p:?}")));
        }
        Ok(())
    }
}

/// Gaussian linear model `y_i ~ Normal(Intercept + x * x_i, sd^2)`.
///
/// Each sweep draws `(Intercept, x)` jointly from their bivariate normal
/// full conditional, then `sd^2` from its inverse-gamma conditional.
/// Posterior parameters: `"Intercept"`, `"x"`, `"sd"`.
#[derive(Clone, Debug, Default)]
pub struct GibbsEngine {
    roles: ParamRoles,
}

impl GibbsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roles(&self) -> &ParamRoles {
        &self.roles
    }
}

/// Sufficient statistics of the data, with x centered on its mean.
///
/// The sampler works with `y = alpha + slope * (x - x_mean)`, where
/// `Intercept = alpha - slope * x_mean`.
struct Moments {
    n: f64,
    x_mean: f64,
    max_abs_x: f64,
    /// `x - x_mean` per observation.
    xc: Vec<f64>,
    sxx: f64,
    sy: f64,
    sxy: f64,
}

impl Moments {
    fn new(x: &[f64], y: &[f64]) -> Self {
        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let xc: Vec<f64> = x.iter().map(|&xi| xi - x_mean).collect();
        let mut m = Moments {
            n,
            x_mean,
            max_abs_x: x.iter().fold(0.0_f64, |acc, xi| acc.max(xi.abs())),
            xc,
            sxx: 0.0,
            sy: 0.0,
            sxy: 0.0,
        };
        for (&xi, &yi) in m.xc.iter().zip(y) {
            m.sxx += xi * xi;
            m.sy += yi;
            m.sxy += xi * yi;
        }
        m
    }

    /// Centered spread indistinguishable from rounding noise in `x`.
    fn degenerate(&self) -> bool {
        let ulps = 8.0 * f64::EPSILON * self.max_abs_x;
        !(self.sxx > self.n * ulps * ulps)
    }

    /// Least-squares `(alpha, slope)`, used as the chain starting point.
    fn ols(&self) -> (f64, f64) {
        (self.sy / self.n, self.sxy / self.sxx)
    }

    fn sse(&self, y: &[f64], alpha: f64, slope: f64) -> f64 {
        self.xc.iter().zip(y).map(|(&xi, &yi)| (yi - alpha - slope * xi).powi(2)).sum()
    }
}

/// Prior precision of `(alpha, slope)` in centered coordinates.
///
/// A normal prior on the raw intercept couples `alpha` and the slope
/// through `x_mean`; a flat one leaves `alpha` flat.
struct PriorPrecision {
    q11: f64,
    q12: f64,
    q22: f64,
}

impl PriorPrecision {
    fn new(priors: &Priors, x_mean: f64) -> Self {
        let pa = priors.intercept_sd.map_or(0.0, |sd| 1.0 / (sd * sd));
        let pb = 1.0 / (priors.coefficient_sd * priors.coefficient_sd);
        Self { q11: pa, q12: -pa * x_mean, q22: pa * x_mean * x_mean + pb }
    }
}

/// One draw of `(alpha, slope)` given the noise variance.
fn draw_coefficients<R: Rng>(rng: &mut R, m: &Moments, sigma2: f64, prior: &PriorPrecision) -> (f64, f64) {
    // Posterior precision P = Xc'Xc / sigma2 + Q; Xc'Xc is diagonal after centering.
    let p11 = m.n / sigma2 + prior.q11;
    let p12 = prior.q12;
    let p22 = m.sxx / sigma2 + prior.q22;
    let det = p11 * p22 - p12 * p12;
    // Covariance S = P^-1.
    let s11 = p22 / det;
    let s12 = -p12 / det;
    let s22 = p11 / det;
    let mean_a = (s11 * m.sy + s12 * m.sxy) / sigma2;
    let mean_b = (s12 * m.sy + s22 * m.sxy) / sigma2;

    // Cholesky of S.
    let c11 = s11.sqrt();
    let c21 = s12 / c11;
    let c22 = (s22 - c21 * c21).max(0.0).sqrt();
    let z1: f64 = rng.sample(StandardNormal);
    let z2: f64 = rng.sample(StandardNormal);
    (mean_a + c11 * z1, mean_b + c21 * z1 + c22 * z2)
}

/// `InvGamma(shape, rate)` as the reciprocal of `Gamma(shape, 1 / rate)`.
fn draw_inv_gamma<R: Rng>(rng: &mut R, shape: f64, rate: f64) -> Result<f64, EngineError> {
    let gamma = Gamma::new(shape, 1.0 / rate).map_err(|e| EngineError::Distribution(e.to_string()))?;
    Ok(1.0 / gamma.sample(rng))
}

impl RegressionEngine for GibbsEngine {
    fn fit(&self, x: &[f64], y: &[f64], opts: &SamplerOptions) -> Result<Posterior, EngineError> {
        if x.len() != y.len() {
            return Err(EngineError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if x.len() < 2 {
            return Err(EngineError::TooFewObservations(x.len()));
        }
        opts.validate()?;
        let m = Moments::new(x, y);
        if m.degenerate() {
            return Err(EngineError::DegeneratePredictor);
        }

        let started = Instant::now();
        let priors = opts.priors;
        let prior = PriorPrecision::new(&priors, m.x_mean);
        let shape = priors.noise_shape + m.n / 2.0;
        let (a0, b0) = m.ols();
        let sigma2_0 = (m.sse(y, a0, b0) / (m.n - 1.0)).max(1e-12);

        let dims = (opts.chains, opts.draws);
        let mut intercept = Array2::<f64>::zeros(dims);
        let mut slope = Array2::<f64>::zeros(dims);
        let mut sd = Array2::<f64>::zeros(dims);

        for chain in 0..opts.chains {
            let mut rng = match opts.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(chain as u64)),
                None => StdRng::from_entropy(),
            };
            let mut sigma2 = sigma2_0;
            let (mut a, mut b) = (a0, b0);
            let sweeps = opts.tune + opts.draws * opts.thin;
            let mut kept = 0;

            for sweep in 0..sweeps {
                (a, b) = draw_coefficients(&mut rng, &m, sigma2, &prior);
                let rate = priors.noise_rate + m.sse(y, a, b) / 2.0;
                sigma2 = draw_inv_gamma(&mut rng, shape, rate)?;

                if sweep >= opts.tune && (sweep - opts.tune) % opts.thin == 0 {
                    intercept[[chain, kept]] = a - b * m.x_mean;
                    slope[[chain, kept]] = b;
                    sd[[chain, kept]] = sigma2.sqrt();
                    kept += 1;
                }
            }
            debug!(chain, sweeps, last_intercept = a - b * m.x_mean, last_slope = b, "chain finished");
        }

        info!(
            chains = opts.chains,
            draws = opts.draws,
            tune = opts.tune,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sampled y ~ x posterior"
        );

        let mut posterior = Posterior::new(self.roles.clone());
        posterior.insert(self.roles.intercept.clone(), intercept)?;
        posterior.insert(self.roles.slope.clone(), slope)?;
        posterior.insert("sd", sd)?;
        Ok(posterior)
    }
}
