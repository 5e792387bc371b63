//! Arithmetic on [`DenseMatrix`].
//!
//! Binary operators between matrices take references and return `Result`, failing with
//! [`LpError::DimensionMismatch`] when shapes are incompatible. Scalar scaling and negation
//! cannot fail and return the matrix directly. Compound assignment between matrices is
//! exposed as `try_add_assign` / `try_sub_assign`.

use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use num_traits::Float;

use crate::error::LpError;
use crate::matrix::dense::DenseMatrix;

impl<T: Float> DenseMatrix<T> {
    /// `self += rhs`, element-wise.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<(), LpError> {
        if !self.same_shape(rhs) {
            return Err(LpError::dimension("+=", &*self, rhs));
        }
        self.zip_apply(rhs, |a, b| a + b);
        Ok(())
    }

    /// `self -= rhs`, element-wise.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<(), LpError> {
        if !self.same_shape(rhs) {
            return Err(LpError::dimension("-=", &*self, rhs));
        }
        self.zip_apply(rhs, |a, b| a - b);
        Ok(())
    }

    /// Copy of `self` with every cell multiplied by `k`.
    pub fn scaled(&self, k: T) -> Self {
        self.map(|v| v * k)
    }
}

impl<T: Float> Add<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, LpError>;

    fn add(self, rhs: &DenseMatrix<T>) -> Self::Output {
        if !self.same_shape(rhs) {
            return Err(LpError::dimension("+", self, rhs));
        }
        Ok(self.zip_map(rhs, |a, b| a + b))
    }
}

impl<T: Float> Sub<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, LpError>;

    fn sub(self, rhs: &DenseMatrix<T>) -> Self::Output {
        if !self.same_shape(rhs) {
            return Err(LpError::dimension("-", self, rhs));
        }
        Ok(self.zip_map(rhs, |a, b| a - b))
    }
}

/// Standard product `(n x m) * (m x p) -> (n x p)`.
impl<T: Float> Mul<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, LpError>;

    fn mul(self, rhs: &DenseMatrix<T>) -> Self::Output {
        if self.width() != rhs.height() {
            return Err(LpError::dimension("*", self, rhs));
        }
        let (n, m, p) = (self.height(), self.width(), rhs.width());
        let mut out = DenseMatrix::new(n, p);
        // i-k-j order walks both operands row by row
        for i in 0..n {
            let lhs_row = self.row(i);
            let out_row = out.row_mut(i);
            for k in 0..m {
                let a = lhs_row[k];
                for (o, &b) in out_row.iter_mut().zip(rhs.row(k)) {
                    *o = *o + a * b;
                }
            }
        }
        Ok(out)
    }
}

impl<T: Float> Mul<T> for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(mut self, k: T) -> DenseMatrix<T> {
        self *= k;
        self
    }
}

impl<T: Float> MulAssign<T> for DenseMatrix<T> {
    fn mul_assign(&mut self, k: T) {
        self.apply(|v| v * k);
    }
}

impl<T: Float> Neg for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(self) -> DenseMatrix<T> {
        self.map(|v| -v)
    }
}

impl<T: Float> Neg for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(mut self) -> DenseMatrix<T> {
        self.apply(|v| -v);
        self
    }
}
