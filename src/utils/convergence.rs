//! Termination tests & statistics for the simplex loop.

use num_traits::Float;

/// Tolerance and runaway-objective ceiling.
#[derive(Clone, Copy, Debug)]
pub struct Termination<T> {
    /// Reduced costs above `-eps` count as non-improving.
    pub eps: T,
    /// Objective values at or above this are treated as unbounded growth.
    pub ceiling: T,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub pivots: usize,
    pub objective: T,
}

impl<T: Float> Termination<T> {
    /// True when the most negative reduced cost no longer improves the objective.
    pub fn is_optimal(&self, reduced_cost: T) -> bool {
        reduced_cost > -self.eps
    }

    /// True for a right-hand side close enough to zero to be treated as degenerate.
    pub fn is_near_zero(&self, value: T) -> bool {
        value.abs() < self.eps
    }

    /// Secondary unboundedness detector on the objective value.
    pub fn is_runaway(&self, objective: T) -> bool {
        !objective.is_finite() || objective >= self.ceiling
    }
}
