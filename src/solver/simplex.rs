//! Primal simplex on a dense tableau.
//!
//! The tableau has `1 + R` rows and `V + R + 1` columns: row 0 holds the negated objective and
//! the current objective value, rows `1..=R` hold the constraints with an identity slack block,
//! and the last column is the right-hand side. Each iteration picks the most negative reduced
//! cost as the entering column, runs the ratio test for the leaving row and pivots in place.
//!
//! `solve` starts from the basis found in the tableau ([`current_basis`]), so a fresh tableau
//! starts from its slack columns and an already optimal one stops without pivoting.
//!
//! Termination:
//! - [`Status::Solved`] when no reduced cost is below `-eps`.
//! - [`Status::NotApplicable`] when the entering column has no admissible leaving row.
//! - [`Status::Unbounded`] when the objective value stops being finite or reaches the ceiling.
//!
//! The ratio test skips rows whose right-hand side is within `eps` of zero while the pivot
//! column entry is negative; otherwise `-0.0` would pass as the smallest non-negative ratio.
//! Nothing else guards against cycling on degenerate vertices.

use std::fmt::Debug;

use num_traits::Float;

use crate::config::SimplexOptions;
use crate::error::LpError;
use crate::matrix::DenseMatrix;
use crate::solver::pivot::pivot;
use crate::solver::{LpSolver, SolveOutcome, Status};
use crate::utils::convergence::{SolveStats, Termination};
use crate::utils::selection::{select_best, select_min};

/// Column with the most negative reduced cost, or `None` if the tableau is optimal.
pub fn entering_column<T: Float>(tableau: &DenseMatrix<T>, term: &Termination<T>) -> Option<usize> {
    let reduced = &tableau.row(0)[..tableau.width() - 1];
    let col = select_min(reduced.iter().copied(), |v| !v.is_nan())?;
    if term.is_optimal(reduced[col]) {
        None
    } else {
        Some(col)
    }
}

/// Constraint index (0-based, tableau row minus one) winning the ratio test for `col`.
pub fn leaving_row<T: Float + Debug>(tableau: &DenseMatrix<T>, col: usize, term: &Termination<T>) -> Option<usize> {
    let rhs_col = tableau.width() - 1;
    let candidates = (1..tableau.height()).map(|i| {
        let rhs = tableau.cell(i, rhs_col);
        let entry = tableau.cell(i, col);
        (rhs, entry, rhs / entry)
    });
    select_best(
        candidates,
        |a, b| a.2 < b.2,
        |&(rhs, entry, ratio)| {
            let admissible = ratio.is_finite()
                && ratio >= T::zero()
                && !(term.is_near_zero(rhs) && entry < T::zero());
            if !admissible {
                log::trace!("ratio test rejects rhs {:?} / entry {:?}", rhs, entry);
            }
            admissible
        },
    )
}

/// Dense-tableau primal simplex solver.
#[derive(Clone, Debug)]
pub struct SimplexSolver<T> {
    pub term: Termination<T>,
}

impl<T: Float> SimplexSolver<T> {
    /// Solver with tolerance `eps` and the default objective ceiling.
    pub fn new(eps: T) -> Self {
        Self::from_options(&SimplexOptions::default().with_eps(eps))
    }

    pub fn from_options(opts: &SimplexOptions<T>) -> Self {
        Self {
            term: Termination {
                eps: opts.eps,
                ceiling: opts.objective_ceiling,
            },
        }
    }
}

impl<T: Float> Default for SimplexSolver<T> {
    fn default() -> Self {
        Self::from_options(&SimplexOptions::default())
    }
}

/// `(R, V)` of a tableau, checked against the slack layout. Every cell must be finite.
fn tableau_dims<T: Float>(tableau: &DenseMatrix<T>) -> Result<(usize, usize), LpError> {
    let (h, w) = (tableau.height(), tableau.width());
    if h < 2 || w < h + 1 {
        return Err(LpError::InvalidTableau(format!(
            "{}x{} cannot hold at least one constraint, one variable and a slack block",
            h, w
        )));
    }
    if let Some(pos) = tableau.as_slice().iter().position(|v| !v.is_finite()) {
        return Err(LpError::InvalidTableau(format!(
            "cell ({}, {}) is not finite",
            pos / w,
            pos % w
        )));
    }
    let r = h - 1;
    Ok((r, w - 1 - r))
}

/// Basis read off the tableau: for constraint row `i + 1`, a column that is 1 in that row and 0
/// in every other row, the row's own slack column first.
pub fn current_basis<T: Float>(tableau: &DenseMatrix<T>) -> Result<Vec<usize>, LpError> {
    let (r, v) = tableau_dims(tableau)?;
    let is_unit = |row: usize, col: usize| {
        (0..tableau.height()).all(|i| tableau.cell(i, col) == if i == row { T::one() } else { T::zero() })
    };
    (1..=r)
        .map(|row| {
            std::iter::once(v + row - 1)
                .chain(0..v + r)
                .find(|&col| is_unit(row, col))
                .ok_or_else(|| LpError::InvalidTableau(format!("constraint row {} has no basic column", row)))
        })
        .collect()
}

impl<T: Float + Debug> LpSolver<DenseMatrix<T>> for SimplexSolver<T> {
    type Error = LpError;
    type Scalar = T;

    fn solve(&mut self, tableau: &mut DenseMatrix<T>) -> Result<SolveOutcome<T>, LpError> {
        let basic = current_basis(tableau)?;
        self.resume(tableau, basic)
    }

    fn resume(&mut self, tableau: &mut DenseMatrix<T>, mut basic: Vec<usize>) -> Result<SolveOutcome<T>, LpError> {
        let (r, v) = tableau_dims(tableau)?;
        if basic.len() != r {
            return Err(LpError::InvalidTableau(format!(
                "basis has {} entries for {} constraints",
                basic.len(),
                r
            )));
        }
        if let Some(&bad) = basic.iter().find(|&&c| c >= v + r) {
            return Err(LpError::InvalidTableau(format!("basic column {} is out of range", bad)));
        }

        let rhs_col = tableau.width() - 1;
        let mut pivots = 0;
        let status = loop {
            let Some(col) = entering_column(tableau, &self.term) else {
                break Status::Solved;
            };
            let Some(k) = leaving_row(tableau, col, &self.term) else {
                log::debug!("column {} improves the objective but has no leaving row", col);
                break Status::NotApplicable;
            };
            basic[k] = col;
            pivot(tableau, k + 1, col);
            pivots += 1;

            let objective = tableau.cell(0, rhs_col);
            log::debug!("pivot {}: column {} enters at row {}, objective {:?}", pivots, col, k + 1, objective);
            if self.term.is_runaway(objective) {
                log::warn!("objective {:?} reached the unbounded ceiling after {} pivots", objective, pivots);
                break Status::Unbounded;
            }
        };

        let objective = tableau.cell(0, rhs_col);
        log::debug!("simplex finished: {:?} after {} pivots", status, pivots);
        Ok(SolveOutcome {
            status,
            basic,
            num_vars: v,
            stats: SolveStats { pivots, objective },
        })
    }
}
