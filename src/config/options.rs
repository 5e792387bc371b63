//! Command-line or API options for the simplex solver.
//!
//! `SimplexOptions` carries the pivoting tolerance and the objective ceiling used by the
//! runaway-growth check. The tolerance can be supplied as free text (the interactive
//! "approximation accuracy" prompt); blank input keeps the default.

use num_traits::{Float, NumCast};
use std::str::FromStr;

use crate::error::LpError;

/// Tolerance used when none is given.
pub const DEFAULT_EPS: f64 = 1e-6;
/// Objective value treated as unbounded growth.
pub const DEFAULT_OBJECTIVE_CEILING: f64 = 1e9;

/// Solver tolerances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimplexOptions<T> {
    /// Pivoting tolerance ε
    pub eps: T,

    /// Ceiling for the objective value
    pub objective_ceiling: T,
}

impl<T: Float> Default for SimplexOptions<T> {
    fn default() -> Self {
        SimplexOptions {
            eps: <T as NumCast>::from(DEFAULT_EPS).unwrap_or_else(T::epsilon),
            objective_ceiling: <T as NumCast>::from(DEFAULT_OBJECTIVE_CEILING).unwrap_or_else(T::max_value),
        }
    }
}

impl<T: Float> SimplexOptions<T> {
    pub fn with_eps(mut self, eps: T) -> Self {
        self.eps = eps;
        self
    }

    pub fn with_objective_ceiling(mut self, ceiling: T) -> Self {
        self.objective_ceiling = ceiling;
        self
    }
}

impl<T: Float + FromStr> SimplexOptions<T>
where
    T::Err: std::fmt::Display,
{
    /// Defaults with the tolerance read from `input`; blank input keeps [`DEFAULT_EPS`].
    pub fn with_eps_input(input: &str) -> Result<Self, LpError> {
        let token = input.trim();
        if token.is_empty() {
            return Ok(Self::default());
        }
        let eps: T = token.parse().map_err(|e: T::Err| LpError::Parse {
            token: token.to_string(),
            reason: e.to_string(),
        })?;
        if !eps.is_finite() || eps <= T::zero() {
            return Err(LpError::Parse {
                token: token.to_string(),
                reason: "tolerance must be a positive finite number".to_string(),
            });
        }
        Ok(Self::default().with_eps(eps))
    }
}
