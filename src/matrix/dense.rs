//! Row-major dense matrix with an exclusively owned buffer.
//!
//! `DenseMatrix<T>` stores `nrows * ncols` cells contiguously, cell `(i, j)` living at
//! offset `i * ncols + j`. It is the storage behind the simplex tableau: the solver scans
//! and rewrites whole rows through [`DenseMatrix::row`], [`DenseMatrix::row_mut`] and
//! [`DenseMatrix::rows_mut_pair`].
//!
//! Cloning is a deep copy. [`DenseMatrix::take`] moves the buffer out and leaves a 1×1 zero
//! matrix behind, so a moved-from value stays usable.
//!
//! Conversion to and from `faer::Mat` is provided for interop with the faer ecosystem.

use std::mem;
use std::ops::{Index, IndexMut};

use faer::Mat;
use num_traits::{Float, Zero};

use crate::core::traits::MatShape;
use crate::error::LpError;

/// Owned, row-major dense matrix.
#[derive(Debug, PartialEq)]
pub struct DenseMatrix<T> {
    n: usize,
    m: usize,
    data: Vec<T>,
}

impl<T: Float> DenseMatrix<T> {
    /// Zero-initialized `n x m` matrix.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(n: usize, m: usize) -> Self {
        assert!(n >= 1 && m >= 1, "DenseMatrix: dimensions must be at least 1x1, got {}x{}", n, m);
        DenseMatrix { n, m, data: vec![T::zero(); n * m] }
    }

    /// Build from a row-major buffer of exactly `n * m` values.
    pub fn from_row_major(n: usize, m: usize, data: Vec<T>) -> Result<Self, LpError> {
        if n == 0 || m == 0 || n.checked_mul(m) != Some(data.len()) {
            return Err(LpError::InvalidShape { rows: n, cols: m });
        }
        Ok(DenseMatrix { n, m, data })
    }

    /// Build from a slice of equally long rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, LpError> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * m);
        for row in rows {
            if row.len() != m {
                return Err(LpError::InvalidShape { rows: n, cols: row.len() });
            }
            data.extend_from_slice(row);
        }
        Self::from_row_major(n, m, data)
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Self {
        let mut eye = Self::new(n, n);
        for i in 0..n {
            eye[(i, i)] = T::one();
        }
        eye
    }

    /// Move the contents out, leaving `self` as a 1×1 zero matrix.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.n
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.m
    }

    /// Read cell `(row, col)`. Indices are only checked in debug builds.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    /// Mutable reference to cell `(row, col)`.
    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }

    /// Cells of `row`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.m;
        &self.data[start..start + self.m]
    }

    /// Mutable cells of `row`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.m;
        &mut self.data[start..start + self.m]
    }

    /// Read-only `src` row alongside a mutable `dest` row.
    ///
    /// # Panics
    /// Panics if `src == dest`.
    pub fn rows_mut_pair(&mut self, src: usize, dest: usize) -> (&[T], &mut [T]) {
        assert_ne!(src, dest, "DenseMatrix: source and destination rows must differ");
        let m = self.m;
        if src < dest {
            let (head, tail) = self.data.split_at_mut(dest * m);
            (&head[src * m..(src + 1) * m], &mut tail[..m])
        } else {
            let (head, tail) = self.data.split_at_mut(src * m);
            (&tail[..m], &mut head[dest * m..(dest + 1) * m])
        }
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Frobenius norm: square root of the sum of squared cells.
    pub fn frobenius_norm(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt()
    }

    /// Copy a faer matrix into row-major storage.
    pub fn from_faer(mat: &Mat<T>) -> Result<Self, LpError> {
        let (n, m) = MatShape::shape(mat);
        let mut data = Vec::with_capacity(n * m);
        for i in 0..n {
            for j in 0..m {
                data.push(mat[(i, j)]);
            }
        }
        Self::from_row_major(n, m, data)
    }

    /// Copy into a faer matrix.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.n, self.m, |i, j| self.data[i * self.m + j])
    }

    pub(crate) fn same_shape(&self, other: &Self) -> bool {
        self.n == other.n && self.m == other.m
    }

    pub(crate) fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        DenseMatrix { n: self.n, m: self.m, data }
    }

    pub(crate) fn zip_apply(&mut self, other: &Self, f: impl Fn(T, T) -> T) {
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a = f(*a, b);
        }
    }

    pub(crate) fn map(&self, f: impl Fn(T) -> T) -> Self {
        DenseMatrix { n: self.n, m: self.m, data: self.data.iter().map(|&v| f(v)).collect() }
    }

    pub(crate) fn apply(&mut self, f: impl Fn(T) -> T) {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }
}

impl<T: Zero + Clone> Default for DenseMatrix<T> {
    /// The 1×1 zero matrix.
    fn default() -> Self {
        DenseMatrix { n: 1, m: 1, data: vec![T::zero()] }
    }
}

impl<T: Clone> Clone for DenseMatrix<T> {
    fn clone(&self) -> Self {
        DenseMatrix { n: self.n, m: self.m, data: self.data.clone() }
    }

    // Reuses the existing allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.n = source.n;
        self.m = source.m;
        self.data.clone_from(&source.data);
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.n && col < self.m, "cell ({}, {}) outside {}x{}", row, col, self.n, self.m);
        &self.data[row * self.m + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.n && col < self.m, "cell ({}, {}) outside {}x{}", row, col, self.n, self.m);
        &mut self.data[row * self.m + col]
    }
}

impl<T> MatShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.n
    }
    fn ncols(&self) -> usize {
        self.m
    }
}
