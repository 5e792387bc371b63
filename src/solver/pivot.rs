//! Gauss-Jordan row operations on a tableau.

use num_traits::Float;

use crate::matrix::DenseMatrix;

/// Divide `row` by its entry in `pivot_col`; the pivot cell itself is set to exactly one.
///
/// The pivot entry must be nonzero.
pub fn normalize_row<T: Float>(tableau: &mut DenseMatrix<T>, row: usize, pivot_col: usize) {
    let factor = tableau.cell(row, pivot_col);
    debug_assert!(factor != T::zero(), "zero pivot at ({}, {})", row, pivot_col);
    for (j, v) in tableau.row_mut(row).iter_mut().enumerate() {
        if j == pivot_col {
            *v = T::one();
        } else {
            *v = *v / factor;
        }
    }
}

/// `dest += factor * src`, cell by cell.
pub fn add_row<T: Float>(tableau: &mut DenseMatrix<T>, src: usize, dest: usize, factor: T) {
    let (src_row, dest_row) = tableau.rows_mut_pair(src, dest);
    for (d, &s) in dest_row.iter_mut().zip(src_row) {
        *d = *d + factor * s;
    }
}

/// Pivot on `(row, col)`: normalize `row`, then clear `col` from every other row.
pub fn pivot<T: Float>(tableau: &mut DenseMatrix<T>, row: usize, col: usize) {
    normalize_row(tableau, row, col);
    for i in 0..tableau.height() {
        if i == row {
            continue;
        }
        let factor = -tableau.cell(i, col);
        add_row(tableau, row, i, factor);
    }
}
