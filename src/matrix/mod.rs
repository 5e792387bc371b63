//! Matrix module: the dense row-major matrix and its arithmetic.

pub mod dense;
pub mod ops;

pub use dense::DenseMatrix;
