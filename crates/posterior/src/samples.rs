// File: crates/posterior/src/samples.rs
// Summary: Named posterior draws shaped (chains, draws) and the parameter-role mapping.

use std::fmt;

use ndarray::Array2;

use crate::error::PosteriorError;

/// What a parameter means in the regression line `intercept + slope * x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamRole {
    Intercept,
    Slope,
}

impl fmt::Display for ParamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamRole::Intercept => f.write_str("intercept"),
            ParamRole::Slope => f.write_str("slope"),
        }
    }
}

/// Which posterior parameter plays each role.
///
/// The default follows formula naming for `y ~ x`: `"Intercept"` and `"x"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamRoles {
    pub intercept: String,
    pub slope: String,
}

impl ParamRoles {
    pub fn new(intercept: impl Into<String>, slope: impl Into<String>) -> Self {
        Self { intercept: intercept.into(), slope: slope.into() }
    }

    pub fn key(&self, role: ParamRole) -> &str {
        match role {
            ParamRole::Intercept => &self.intercept,
            ParamRole::Slope => &self.slope,
        }
    }
}

impl Default for ParamRoles {
    fn default() -> Self {
        Self::new("Intercept", "x")
    }
}

/// Posterior draws per parameter, each an array shaped `(chains, draws)`.
/// Every parameter shares the same shape; insertion order is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Posterior {
    params: Vec<(String, Array2<f64>)>,
    roles: ParamRoles,
}

impl Posterior {
    pub fn new(roles: ParamRoles) -> Self {
        Self { params: Vec::new(), roles }
    }

    pub fn with_roles(mut self, roles: ParamRoles) -> Self {
        self.roles = roles;
        self
    }

    pub fn roles(&self) -> &ParamRoles {
        &self.roles
    }

    /// Add a parameter. Its shape must match any parameter already present.
    pub fn insert(&mut self, name: impl Into<String>, draws: Array2<f64>) -> Result<(), PosteriorError> {
        let name = name.into();
        if draws.is_empty() {
            return Err(PosteriorError::Empty(name));
        }
        if self.get(&name).is_some() {
            return Err(PosteriorError::Duplicate(name));
        }
        if let Some(expected) = self.shape() {
            if draws.dim() != expected {
                return Err(PosteriorError::ShapeMismatch { name, expected, got: draws.dim() });
            }
        }
        self.params.push((name, draws));
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_param(mut self, name: impl Into<String>, draws: Array2<f64>) -> Result<Self, PosteriorError> {
        self.insert(name, draws)?;
        Ok(self)
    }

    /// Add a parameter from one vector of draws per chain.
    pub fn insert_chains(&mut self, name: impl Into<String>, chains: &[Vec<f64>]) -> Result<(), PosteriorError> {
        let name = name.into();
        let n_draws = chains.first().map_or(0, Vec::len);
        if chains.iter().any(|c| c.len() != n_draws) {
            return Err(PosteriorError::RaggedChains(name));
        }
        let flat: Vec<f64> = chains.iter().flatten().copied().collect();
        let draws = Array2::from_shape_vec((chains.len(), n_draws), flat)
            .map_err(|_| PosteriorError::RaggedChains(name.clone()))?;
        self.insert(name, draws)
    }

    pub fn get(&self, name: &str) -> Option<&Array2<f64>> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Array2<f64>)> {
        self.params.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// `(chains, draws)` shared by all parameters, `None` when empty.
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.params.first().map(|(_, a)| a.dim())
    }

    pub fn n_chains(&self) -> usize {
        self.shape().map_or(0, |(c, _)| c)
    }

    pub fn n_draws(&self) -> usize {
        self.shape().map_or(0, |(_, d)| d)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// All draws of `name` with chains concatenated (chain 0 first).
    pub fn flatten(&self, name: &str) -> Result<Vec<f64>, PosteriorError> {
        self.get(name)
            .map(|a| a.iter().copied().collect())
            .ok_or_else(|| PosteriorError::UnknownParameter(name.to_string()))
    }

    /// Flattened draws of whichever parameter plays `role`.
    pub fn role_samples(&self, role: ParamRole) -> Result<Vec<f64>, PosteriorError> {
        let key = self.roles.key(role);
        match self.get(key) {
            Some(a) => Ok(a.iter().copied().collect()),
            None => Err(PosteriorError::UnexpectedParameterNaming {
                role,
                key: key.to_string(),
                available: self.names().map(str::to_string).collect(),
            }),
        }
    }
}
