//! Matrix addition, subtraction and multiplication.
//!
//! Every operation has a companion `can_*` predicate. The operations check
//! their own preconditions and return
//! [`CoreError::DimensionMismatch`] instead of reading out of bounds.
//! Integer results that do not fit the element type are reported as
//! [`CoreError::ArithmeticOverflow`].

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Whether `self` and `other` can be added or subtracted.
    ///
    /// True iff both have the same number of rows and each pair of
    /// corresponding rows has the same length.
    pub fn can_add_or_subtract(&self, other: &Matrix<T>) -> bool {
        self.rows == other.rows && (self.rows == 0 || self.cols == other.cols)
    }

    /// Whether `self * other` is defined.
    ///
    /// False when either matrix has no rows; otherwise true iff the column
    /// count of `self` equals the row count of `other`.
    pub fn can_multiply(&self, other: &Matrix<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.cols == other.rows
    }

    /// Element-wise sum.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().to_rows(), vec![vec![6, 8], vec![10, 12]]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "matrix addition", T::checked_add)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "matrix subtraction", T::checked_sub)
    }

    /// Matrix product `self * other`.
    ///
    /// The result has shape `rows(self) x cols(other)`.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    /// assert_eq!(a.multiply(&b).unwrap().to_rows(), vec![vec![19, 22], vec![43, 50]]);
    /// ```
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if !self.can_multiply(other) {
            return Err(CoreError::DimensionMismatch {
                expected: vec![self.cols, other.cols],
                got: vec![other.rows, other.cols],
            });
        }

        let m = self.rows;
        let k = self.cols;
        let n = other.cols;
        let a = &self.data;
        let b = &other.data;
        let mut c = vec![T::zero(); m * n];

        // ijk loop order (row-major friendly for A and C)
        for i in 0..m {
            for j in 0..n {
                let mut sum = T::zero();
                let a_row = i * k;
                for p in 0..k {
                    sum = a[a_row + p]
                        .checked_mul(b[p * n + j])
                        .and_then(|term| sum.checked_add(term))
                        .ok_or(CoreError::ArithmeticOverflow {
                            op: "matrix multiplication",
                        })?;
                }
                c[i * n + j] = sum;
            }
        }

        Ok(Matrix {
            data: c,
            rows: m,
            cols: n,
        })
    }
}

/// [`Matrix::can_add_or_subtract`] for nested grids, which may be ragged.
pub fn can_add_or_subtract_grids<T>(a: &[Vec<T>], b: &[Vec<T>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(ra, rb)| ra.len() == rb.len())
}

/// [`Matrix::can_multiply`] for nested grids.
///
/// Uses the first row of `a` for its column count.
pub fn can_multiply_grids<T>(a: &[Vec<T>], b: &[Vec<T>]) -> bool {
    match a.first() {
        Some(first) if !b.is_empty() => first.len() == b.len(),
        _ => false,
    }
}
