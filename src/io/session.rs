//! The interactive question sequence of the `simplex` binary.
//!
//! Prompts are written to `out` before each answer is read, so the same code drives a terminal
//! session and a scripted one.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use num_traits::Float;

use crate::config::SimplexOptions;
use crate::error::LpError;
use crate::io::reader::{TokenReader, parse_vector_line};
use crate::matrix::DenseMatrix;
use crate::problem::LinearProgram;

fn prompt(out: &mut impl Write, text: &str) -> Result<(), LpError> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Ask for the objective, the constraints and the tolerance.
///
/// Returns `Ok(None)` when the answers describe no variables or no constraints. Such a
/// problem has no tableau, and the caller reports the method as not applicable.
pub fn read_problem<T, R, W>(
    reader: &mut TokenReader<R>,
    out: &mut W,
) -> Result<Option<(LinearProgram<T>, SimplexOptions<T>)>, LpError>
where
    T: Float + FromStr,
    T::Err: Display,
    R: BufRead,
    W: Write,
{
    prompt(out, "Enter a vector of coefficients of the objective function: ")?;
    let objective: Vec<T> = parse_vector_line(&reader.read_line()?)?;
    let nvars = objective.len();

    prompt(out, "Enter the number of constraints: ")?;
    let nconstraints = reader.next_count("the number of constraints")?;

    writeln!(out, "Enter a matrix of coefficients of the constraint functions")?;
    let ncells = nconstraints
        .checked_mul(nvars)
        .ok_or(LpError::InvalidShape { rows: nconstraints, cols: nvars })?;
    let cells: Vec<T> = reader.read_vector(ncells, "the constraint matrix")?;

    prompt(out, "Enter a vector of right-hand side values: ")?;
    let rhs: Vec<T> = reader.read_vector(nconstraints, "the right-hand side")?;

    prompt(out, "Enter approximation accuracy (optional): ")?;
    let options = SimplexOptions::with_eps_input(&reader.read_line()?)?;

    if nvars == 0 || nconstraints == 0 {
        log::info!("{} variables and {} constraints leave nothing to solve", nvars, nconstraints);
        return Ok(None);
    }
    let constraints = DenseMatrix::from_row_major(nconstraints, nvars, cells)?;
    Ok(Some((LinearProgram::new(objective, constraints, rhs)?, options)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> Result<Option<(LinearProgram<f64>, SimplexOptions<f64>)>, LpError> {
        let mut reader = TokenReader::new(Cursor::new(input.to_string()));
        let mut out = Vec::new();
        read_problem(&mut reader, &mut out)
    }

    #[test]
    fn reads_full_session() {
        let mut reader = TokenReader::new(Cursor::new("3 2\n2\n1 1\n1 3\n4 6\n0.001\n"));
        let mut out = Vec::new();
        let (lp, options) = read_problem::<f64, _, _>(&mut reader, &mut out).unwrap().unwrap();
        assert_eq!(lp.objective(), &[3.0, 2.0]);
        assert_eq!(lp.constraints().as_slice(), &[1.0, 1.0, 1.0, 3.0]);
        assert_eq!(lp.rhs(), &[4.0, 6.0]);
        assert_eq!(options.eps, 1e-3);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.starts_with("Enter a vector of coefficients of the objective function: "));
        assert!(transcript.ends_with("Enter approximation accuracy (optional): "));
    }

    #[test]
    fn blank_tolerance_keeps_default() {
        let (_, options) = answer("1\n1\n1\n5\n\n").unwrap().unwrap();
        assert_eq!(options.eps, 1e-6);
    }

    #[test]
    fn no_constraints_is_not_a_problem() {
        assert!(answer("3 2\n0\n\n").unwrap().is_none());
        assert!(answer("\n1\n7\n\n").unwrap().is_none());
    }

    #[test]
    fn oversized_matrix_is_invalid_shape() {
        let huge = format!("1 1 1\n{}\n", usize::MAX);
        let err = answer(&huge).unwrap_err();
        assert!(matches!(err, LpError::InvalidShape { cols: 3, .. }));
    }

    #[test]
    fn short_input_names_missing_item() {
        let err = answer("3 2\n2\n1 1\n").unwrap_err();
        assert!(matches!(err, LpError::UnexpectedEof("the constraint matrix")));
    }
}
