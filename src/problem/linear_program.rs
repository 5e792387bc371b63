//! Problem description and tableau construction.
//!
//! A [`LinearProgram`] owns the objective `c`, the constraint matrix `A` (`R x V`) and the
//! right-hand side `b`. [`LinearProgram::tableau`] lays these out as the `(1 + R) x (V + R + 1)`
//! simplex tableau:
//!
//! ```text
//!  -c_1 .. -c_V | 0 ..... 0 | 0
//!  a_11 .. a_1V | 1       0 | b_1
//!   ..          |    ..     | ..
//!  a_R1 .. a_RV | 0       1 | b_R
//! ```
//!
//! The `Display` impl prints the problem in the human-readable form used by the command line.

use std::fmt;

use num_traits::Float;

use crate::core::traits::{InnerProduct, MatShape, MatVec};
use crate::error::LpError;
use crate::matrix::DenseMatrix;

/// `max c·x` subject to `Ax <= b`, `x >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<T> {
    objective: Vec<T>,
    constraints: DenseMatrix<T>,
    rhs: Vec<T>,
}

impl<T: Float> LinearProgram<T> {
    /// Validate and wrap the problem data.
    pub fn new(objective: Vec<T>, constraints: DenseMatrix<T>, rhs: Vec<T>) -> Result<Self, LpError> {
        if objective.is_empty() {
            return Err(LpError::InvalidShape { rows: 1, cols: 0 });
        }
        if constraints.width() != objective.len() {
            return Err(LpError::DimensionMismatch {
                op: "objective",
                lhs: (1, objective.len()),
                rhs: constraints.shape(),
            });
        }
        if constraints.height() != rhs.len() {
            return Err(LpError::DimensionMismatch {
                op: "right-hand side",
                lhs: constraints.shape(),
                rhs: (rhs.len(), 1),
            });
        }
        Ok(LinearProgram { objective, constraints, rhs })
    }

    /// Build from constraint rows given as vectors.
    pub fn from_rows(objective: Vec<T>, rows: &[Vec<T>], rhs: Vec<T>) -> Result<Self, LpError> {
        let constraints = DenseMatrix::from_rows(rows)?;
        Self::new(objective, constraints, rhs)
    }

    /// Number of decision variables `V`.
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints `R`.
    pub fn num_constraints(&self) -> usize {
        self.rhs.len()
    }

    pub fn objective(&self) -> &[T] {
        &self.objective
    }

    pub fn constraints(&self) -> &DenseMatrix<T> {
        &self.constraints
    }

    pub fn rhs(&self) -> &[T] {
        &self.rhs
    }

    /// Initial simplex tableau with the identity slack basis.
    pub fn tableau(&self) -> DenseMatrix<T> {
        let (v, r) = (self.num_vars(), self.num_constraints());
        let w = v + r + 1;
        let mut tableau = DenseMatrix::new(1 + r, w);
        for (cell, &c) in tableau.row_mut(0).iter_mut().zip(&self.objective) {
            *cell = -c;
        }
        for i in 0..r {
            let row = tableau.row_mut(i + 1);
            row[..v].copy_from_slice(self.constraints.row(i));
            row[v + i] = T::one();
            row[w - 1] = self.rhs[i];
        }
        tableau
    }

    /// `A·x` for a candidate point.
    pub fn constraint_activity(&self, x: &[T]) -> Result<Vec<T>, LpError> {
        self.check_point(x)?;
        let mut ax = vec![T::zero(); self.num_constraints()];
        self.constraints.matvec(&x.to_vec(), &mut ax);
        Ok(ax)
    }

    /// `c·x` for a candidate point.
    pub fn objective_value(&self, x: &[T]) -> Result<T, LpError> {
        self.check_point(x)?;
        Ok(().dot(&self.objective, &x.to_vec()))
    }

    /// Whether `x >= -tol` and `A·x <= b + tol`.
    pub fn is_feasible(&self, x: &[T], tol: T) -> Result<bool, LpError> {
        let ax = self.constraint_activity(x)?;
        let nonnegative = x.iter().all(|&xi| xi >= -tol);
        let within = ax.iter().zip(&self.rhs).all(|(&lhs, &b)| lhs <= b + tol);
        Ok(nonnegative && within)
    }

    fn check_point(&self, x: &[T]) -> Result<(), LpError> {
        if x.len() != self.num_vars() {
            return Err(LpError::DimensionMismatch {
                op: "point",
                lhs: self.constraints.shape(),
                rhs: (x.len(), 1),
            });
        }
        Ok(())
    }
}

/// Writes `a_1 * x1 + a_2 * x2 ...`, folding the sign of each coefficient into the operator.
fn write_linear<T: Float + fmt::Display>(f: &mut fmt::Formatter<'_>, coeffs: &[T]) -> fmt::Result {
    for (j, &a) in coeffs.iter().enumerate() {
        let negative = a < T::zero();
        match (j, negative) {
            (0, true) => write!(f, "-")?,
            (0, false) => {}
            (_, true) => write!(f, " - ")?,
            (_, false) => write!(f, " + ")?,
        }
        write!(f, "{} * x{}", a.abs(), j + 1)?;
    }
    Ok(())
}

impl<T: Float + fmt::Display> fmt::Display for LinearProgram<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Objective function: max z = ")?;
        write_linear(f, &self.objective)?;
        writeln!(f)?;
        writeln!(f, "Subject to the constraints:")?;
        for (i, b) in self.rhs.iter().enumerate() {
            write_linear(f, self.constraints.row(i))?;
            writeln!(f, " <= {}", b)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinearProgram<f64> {
        LinearProgram::from_rows(vec![3.0, 2.0], &[vec![1.0, 1.0], vec![1.0, 3.0]], vec![4.0, 6.0]).unwrap()
    }

    #[test]
    fn tableau_layout() {
        let t = sample().tableau();
        assert_eq!(t.shape(), (3, 5));
        assert_eq!(t.row(0), &[-3.0, -2.0, 0.0, 0.0, 0.0]);
        assert_eq!(t.row(1), &[1.0, 1.0, 1.0, 0.0, 4.0]);
        assert_eq!(t.row(2), &[1.0, 3.0, 0.0, 1.0, 6.0]);
    }

    #[test]
    fn rejects_inconsistent_lengths() {
        assert!(matches!(
            LinearProgram::from_rows(vec![1.0, 2.0, 3.0], &[vec![1.0, 1.0]], vec![1.0]),
            Err(LpError::DimensionMismatch { op: "objective", .. })
        ));
        assert!(matches!(
            LinearProgram::from_rows(vec![1.0, 2.0], &[vec![1.0, 1.0]], vec![1.0, 2.0]),
            Err(LpError::DimensionMismatch { op: "right-hand side", .. })
        ));
        assert!(LinearProgram::<f64>::from_rows(vec![], &[vec![1.0]], vec![1.0]).is_err());
        assert!(LinearProgram::<f64>::from_rows(vec![1.0], &[], vec![]).is_err());
    }

    #[test]
    fn evaluates_points() {
        let lp = sample();
        assert_eq!(lp.constraint_activity(&[4.0, 0.0]).unwrap(), vec![4.0, 4.0]);
        assert_eq!(lp.objective_value(&[4.0, 0.0]).unwrap(), 12.0);
        assert!(lp.is_feasible(&[4.0, 0.0], 1e-9).unwrap());
        assert!(!lp.is_feasible(&[4.0, 1.0], 1e-9).unwrap());
        assert!(!lp.is_feasible(&[-1.0, 0.0], 1e-9).unwrap());
        assert!(lp.objective_value(&[1.0]).is_err());
    }

    #[test]
    fn display_matches_cli_layout() {
        let lp = LinearProgram::from_rows(vec![3.0, -2.0], &[vec![-1.0, 1.0], vec![1.0, 3.0]], vec![4.0, 6.0]).unwrap();
        let text = lp.to_string();
        assert_eq!(
            text,
            "Objective function: max z = 3 * x1 - 2 * x2\n\
             Subject to the constraints:\n\
             -1 * x1 + 1 * x2 <= 4\n\
             1 * x1 + 3 * x2 <= 6\n"
        );
    }
}
