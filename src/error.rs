use thiserror::Error;

use crate::core::traits::MatShape;

// Unified error type for simplx

#[derive(Error, Debug)]
pub enum LpError {
    #[error("dimension mismatch in {op}: lhs shape {lhs:?}, rhs shape {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("invalid matrix shape {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },
    #[error("invalid tableau: {0}")]
    InvalidTableau(String),
    #[error("cannot parse {token:?}: {reason}")]
    Parse { token: String, reason: String },
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl LpError {
    /// Shape mismatch between two operands of `op`.
    pub fn dimension<A: MatShape + ?Sized, B: MatShape + ?Sized>(op: &'static str, lhs: &A, rhs: &B) -> Self {
        LpError::DimensionMismatch {
            op,
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        }
    }
}
