//! Simplex solver interface and outcome types.

use num_traits::Float;

use crate::matrix::DenseMatrix;
use crate::utils::convergence::SolveStats;

/// Terminal state of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// No entering column improves the objective beyond the tolerance.
    Solved,
    /// The objective value became non-finite or reached the ceiling.
    Unbounded,
    /// An improving column has no admissible leaving row.
    NotApplicable,
}

/// Result of one solve: terminal status, final basis and statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveOutcome<T> {
    pub status: Status,
    /// `basic[i]` is the tableau column basic in constraint row `i + 1`.
    pub basic: Vec<usize>,
    /// Number of decision variables `V` in the tableau.
    pub num_vars: usize,
    pub stats: SolveStats<T>,
}

impl<T: Float> SolveOutcome<T> {
    pub fn is_solved(&self) -> bool {
        self.status == Status::Solved
    }

    /// Values of the decision variables, read from the final tableau.
    ///
    /// Returns `None` unless the status is [`Status::Solved`]; the tableau contents are not a
    /// solution in the other states.
    pub fn decision_values(&self, tableau: &DenseMatrix<T>) -> Option<Vec<T>> {
        if !self.is_solved() {
            return None;
        }
        let rhs_col = tableau.width() - 1;
        let mut values = vec![T::zero(); self.num_vars];
        for (i, &col) in self.basic.iter().enumerate() {
            if col < self.num_vars {
                values[col] = tableau.cell(i + 1, rhs_col);
            }
        }
        Some(values)
    }

    /// Objective value held in the tableau's top-right cell.
    pub fn objective(&self, tableau: &DenseMatrix<T>) -> T {
        tableau.cell(0, tableau.width() - 1)
    }
}

/// Common interface for tableau-based LP solvers.
pub trait LpSolver<M> {
    type Error;
    type Scalar;
    /// Solve from the basis the tableau is currently in, mutating `tableau` in place.
    fn solve(&mut self, tableau: &mut M) -> Result<SolveOutcome<Self::Scalar>, Self::Error>;
    /// Continue from an existing basis, e.g. the one returned by an earlier solve.
    fn resume(&mut self, tableau: &mut M, basic: Vec<usize>) -> Result<SolveOutcome<Self::Scalar>, Self::Error>;
}

pub mod pivot;
pub use pivot::{add_row, normalize_row};

pub mod simplex;
pub use simplex::{SimplexSolver, current_basis, entering_column, leaving_row};
