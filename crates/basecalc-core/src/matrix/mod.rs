//! Dense row-major matrices for small calculator-sized problems.
//!
//! The [`Matrix`] type stores its elements contiguously with an explicit
//! row and column count, so a constructed matrix is always rectangular.
//! Grids arriving as nested vectors are checked with [`validate_shape`]
//! and [`Matrix::from_rows`], which reject ragged input.

mod create;
mod det;
mod display;
mod lu;
mod ops;

pub use det::COFACTOR_WARN_DIM;
pub use ops::{can_add_or_subtract_grids, can_multiply_grids};

use serde::Serialize;

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A rectangular grid of numbers.
///
/// Data is stored contiguously in row-major order. The matrix owns its data
/// and cloning performs a deep copy.
#[derive(Debug, Clone, Serialize)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from flat row-major data.
    ///
    /// Returns an error if `rows * cols` does not equal `data.len()`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if rows * cols != data.len() {
            return Err(CoreError::InvalidShape {
                shape: vec![rows, cols],
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must have the same length. An empty outer vector gives a
    /// `0 x 0` matrix.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if !validate_shape(&rows, n_rows, n_cols) {
            return Err(CoreError::InvalidShape {
                shape: rows.iter().map(Vec::len).collect(),
                reason: "rows have different lengths",
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has exactly the given shape.
    #[inline]
    pub fn has_shape(&self, rows: usize, cols: usize) -> bool {
        self.rows == rows && self.cols == cols
    }

    /// Whether the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Whether the matrix is square and non-empty.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// assert!(Matrix::<i64>::zeros(3, 3).is_square());
    /// assert!(!Matrix::<i64>::zeros(2, 3).is_square());
    /// assert!(!Matrix::<i64>::zeros(0, 0).is_square());
    /// ```
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows > 0 && self.rows == self.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= self.rows()`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Copy the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, r: usize, c: usize) -> Result<usize> {
        if r >= self.rows || c >= self.cols {
            return Err(CoreError::InvalidShape {
                shape: vec![r, c],
                reason: "index out of bounds",
            });
        }
        Ok(r * self.cols + c)
    }

    pub fn get(&self, r: usize, c: usize) -> Result<T> {
        let flat = self.flat_index(r, c)?;
        Ok(self.data[flat])
    }

    /// Overwrite a single cell.
    pub fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        let flat = self.flat_index(r, c)?;
        self.data[flat] = value;
        Ok(())
    }

    /// The `(n-1) x (m-1)` matrix left after deleting row `r` and column `c`.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
    /// let s = m.submatrix(0, 1).unwrap();
    /// assert_eq!(s.to_rows(), vec![vec![4, 6], vec![7, 9]]);
    /// ```
    pub fn submatrix(&self, r: usize, c: usize) -> Result<Self> {
        self.flat_index(r, c)?;
        Ok(self.without(r, c))
    }

    /// Unchecked body of [`submatrix`](Self::submatrix).
    fn without(&self, skip_r: usize, skip_c: usize) -> Self {
        let data = self
            .iter_rows()
            .enumerate()
            .filter(|&(r, _)| r != skip_r)
            .flat_map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(c, _)| c != skip_c)
                    .map(|(_, &v)| v)
            })
            .collect();
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Combine two matrices of the same shape element-wise.
    ///
    /// `f` returns `None` when an element overflows, which is reported as
    /// [`CoreError::ArithmeticOverflow`] for `op`.
    pub fn zip_map<F>(&self, other: &Matrix<T>, op: &'static str, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> Option<T>,
    {
        if !self.can_add_or_subtract(other) {
            return Err(CoreError::DimensionMismatch {
                expected: vec![self.rows, self.cols],
                got: vec![other.rows, other.cols],
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b).ok_or(CoreError::ArithmeticOverflow { op }))
            .collect::<Result<Vec<T>>>()?;
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

// ======================================================================
// Raw grid checks
// ======================================================================

/// Whether a nested grid has exactly `rows` rows of `cols` cells each.
///
/// ```
/// # use basecalc_core::matrix::validate_shape;
/// assert!(validate_shape(&[vec![0, 0], vec![0, 0]], 2, 2));
/// assert!(!validate_shape(&[vec![0, 0], vec![0]], 2, 2));
/// ```
pub fn validate_shape<T>(grid: &[Vec<T>], rows: usize, cols: usize) -> bool {
    grid.len() == rows && grid.iter().all(|row| row.len() == cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        assert!(Matrix::from_vec(vec![1, 2, 3], 2, 3).is_err());
    }

    #[test]
    fn test_from_rows_ragged() {
        let r = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }

    #[test]
    fn test_from_rows_empty() {
        let m = Matrix::<i64>::from_rows(vec![]).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
        assert!(!m.is_square());
    }

    #[test]
    fn test_get_set() {
        let mut m = Matrix::<i32>::zeros(2, 2);
        m.set(1, 0, 7).unwrap();
        assert_eq!(m.get(1, 0).unwrap(), 7);
        assert!(m.get(2, 0).is_err());
        assert!(m.set(0, 2, 1).is_err());
    }

    #[test]
    fn test_submatrix_bounds() {
        let m = Matrix::<i32>::zeros(2, 2);
        assert_eq!(m.submatrix(1, 1).unwrap().shape(), (1, 1));
        assert!(m.submatrix(2, 0).is_err());
    }

    #[test]
    fn test_has_shape() {
        let m = Matrix::<f64>::zeros(3, 2);
        assert!(m.has_shape(3, 2));
        assert!(!m.has_shape(2, 3));
    }

    #[test]
    fn test_validate_shape_grid() {
        let g: Vec<Vec<i32>> = vec![];
        assert!(validate_shape(&g, 0, 5));
        assert!(!validate_shape(&[vec![1, 2, 3]], 1, 2));
        assert!(!validate_shape(&[vec![1, 2]], 2, 2));
    }

    #[test]
    fn test_to_rows_roundtrip() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let m = Matrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.to_rows(), rows);
    }
}
