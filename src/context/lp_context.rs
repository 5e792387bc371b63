//! Driver pairing a [`LinearProgram`] with solver options.
//!
//! `LpContext::solve` builds the tableau, runs [`SimplexSolver`] through the [`LpSolver`]
//! trait and packages the terminal status, the decision values and the objective into a
//! [`Solution`]. Values are only present when the status is [`Status::Solved`].

use std::fmt::Debug;

use num_traits::Float;

use crate::config::SimplexOptions;
use crate::error::LpError;
use crate::matrix::DenseMatrix;
use crate::problem::LinearProgram;
use crate::solver::{LpSolver, SimplexSolver, SolveOutcome, Status};

/// Solution of a linear program.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T> {
    pub status: Status,
    /// Decision variable values; `None` unless `status` is `Solved`.
    pub values: Option<Vec<T>>,
    /// Objective value left in the tableau.
    pub objective: T,
    /// Basic column per constraint row.
    pub basic: Vec<usize>,
    pub pivots: usize,
}

/// Problem plus options.
pub struct LpContext<T> {
    pub problem: LinearProgram<T>,
    pub options: SimplexOptions<T>,
}

impl<T: Float + Debug> LpContext<T> {
    /// Context with default options.
    pub fn new(problem: LinearProgram<T>) -> Self {
        LpContext { problem, options: SimplexOptions::default() }
    }

    pub fn with_options(mut self, options: SimplexOptions<T>) -> Self {
        self.options = options;
        self
    }

    /// Solve and return the solution.
    pub fn solve(&self) -> Result<Solution<T>, LpError> {
        self.solve_tableau().map(|(_, solution)| solution)
    }

    /// Solve and also return the final tableau.
    pub fn solve_tableau(&self) -> Result<(DenseMatrix<T>, Solution<T>), LpError> {
        let mut tableau = self.problem.tableau();
        let mut solver = SimplexSolver::from_options(&self.options);
        let outcome = solver.solve(&mut tableau)?;
        let solution = Self::extract(&tableau, outcome);
        Ok((tableau, solution))
    }

    fn extract(tableau: &DenseMatrix<T>, outcome: SolveOutcome<T>) -> Solution<T> {
        Solution {
            status: outcome.status,
            values: outcome.decision_values(tableau),
            objective: outcome.objective(tableau),
            pivots: outcome.stats.pivots,
            basic: outcome.basic,
        }
    }
}
