//! Trait implementations for `DenseMatrix`, `faer::Mat` and `Vec<T>`.
//!
//! These let the problem layer evaluate `A·x` and `c·x` against candidate solutions through
//! the generic [`MatVec`] and [`InnerProduct`] traits, and let shape diagnostics accept
//! faer matrices alongside the crate's own dense type.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{InnerProduct, MatShape, MatVec};
use crate::matrix::DenseMatrix;
use faer::Mat;
use num_traits::Float;

/// Computes `y = A * x` for a row-major dense matrix.
impl<T: Float> MatVec<Vec<T>> for DenseMatrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.height(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.width(), x.len(), "Input vector x has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = self
                .row(i)
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&a, &xj)| acc + a * xj);
        }
    }
}

/// Dot product for plain vectors.
impl<T: Float> InnerProduct<Vec<T>> for () {
    type Scalar = T;

    fn dot(&self, x: &Vec<T>, y: &Vec<T>) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        x.iter()
            .zip(y.iter())
            .map(|(xi, yi)| *xi * *yi)
            .fold(T::zero(), |acc, v| acc + v)
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}
