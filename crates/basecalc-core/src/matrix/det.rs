//! Determinants.
//!
//! Two algorithms are provided:
//!
//! | Method | Element type | Complexity | Exact for integers |
//! |--------|--------------|------------|--------------------|
//! | [`Matrix::determinant`] | any [`Scalar`] | O(n!) | yes |
//! | [`Matrix::determinant_lu`] | [`Float`] | O(n^3) | no (rounding) |
//!
//! Cofactor expansion is only tractable for the small matrices a calculator
//! UI produces. Use the LU variant for anything larger than a handful of rows.
//! Integer cofactor determinants report overflow instead of wrapping.

use crate::error::{CoreError, Result};
use crate::{Float, Scalar};

use super::Matrix;
use super::lu::LuDecomposition;

/// Above this dimension the cofactor determinant logs a warning.
pub const COFACTOR_WARN_DIM: usize = 8;

impl<T: Scalar> Matrix<T> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Returns `None` if the matrix is not square (including `0 x 0`), and
    /// `Some(Err(ArithmeticOverflow))` if an intermediate integer product
    /// or sum does not fit `T`. The recursion visits every permutation, so
    /// the cost grows as `n!`.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(a.determinant(), Some(Ok(-2)));
    /// assert_eq!(Matrix::<i64>::zeros(2, 3).determinant(), None);
    /// ```
    pub fn determinant(&self) -> Option<Result<T>> {
        if !self.is_square() {
            return None;
        }
        let n = self.rows;
        if n > COFACTOR_WARN_DIM {
            tracing::warn!(
                n,
                "cofactor determinant on a large matrix; consider determinant_lu"
            );
        }
        tracing::trace!(n, "cofactor determinant");
        Some(self.cofactor_det())
    }

    fn cofactor_det(&self) -> Result<T> {
        let d = &self.data;
        let det = match self.rows {
            1 => Some(d[0]),
            2 => d[0]
                .checked_mul(d[3])
                .zip(d[1].checked_mul(d[2]))
                .and_then(|(ad, bc)| ad.checked_sub(bc)),
            n => {
                let mut det = T::zero();
                for j in 0..n {
                    let entry = d[j];
                    if entry == T::zero() {
                        continue;
                    }
                    let term = entry
                        .checked_mul(self.without(0, j).cofactor_det()?)
                        .ok_or(OVERFLOW)?;
                    det = if j % 2 == 0 {
                        det.checked_add(term)
                    } else {
                        det.checked_sub(term)
                    }
                    .ok_or(OVERFLOW)?;
                }
                Some(det)
            }
        };
        det.ok_or(OVERFLOW)
    }
}

const OVERFLOW: CoreError = CoreError::ArithmeticOverflow { op: "determinant" };

impl<T: Float> Matrix<T> {
    /// Determinant via LU decomposition with partial pivoting.
    ///
    /// Returns `None` if the matrix is not square. Singular matrices give
    /// zero.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let a = Matrix::from_rows(vec![vec![2.0_f64, 1.0], vec![1.0, 4.0]]).unwrap();
    /// assert!((a.determinant_lu().unwrap() - 7.0).abs() < 1e-10);
    /// ```
    pub fn determinant_lu(&self) -> Option<T> {
        LuDecomposition::decompose(self).ok().map(|lu| lu.det())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<i64>>) -> Matrix<i64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_det_1x1() {
        assert_eq!(m(vec![vec![-5]]).determinant(), Some(Ok(-5)));
    }

    #[test]
    fn test_det_2x2() {
        assert_eq!(m(vec![vec![1, 2], vec![3, 4]]).determinant(), Some(Ok(-2)));
    }

    #[test]
    fn test_det_identity() {
        assert_eq!(Matrix::<i64>::identity(3).determinant(), Some(Ok(1)));
        assert_eq!(Matrix::<i64>::identity(6).determinant(), Some(Ok(1)));
    }

    #[test]
    fn test_det_3x3() {
        // >>> np.linalg.det([[6,1,1],[4,-2,5],[2,8,7]])
        // -306.0
        let a = m(vec![vec![6, 1, 1], vec![4, -2, 5], vec![2, 8, 7]]);
        assert_eq!(a.determinant(), Some(Ok(-306)));
    }

    #[test]
    fn test_det_4x4() {
        // >>> np.linalg.det([[1,2,3,4],[5,6,7,8],[2,6,4,8],[3,1,1,2]])
        // 72.0
        let a = m(vec![
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![2, 6, 4, 8],
            vec![3, 1, 1, 2],
        ]);
        assert_eq!(a.determinant(), Some(Ok(72)));
    }

    #[test]
    fn test_det_singular() {
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        assert_eq!(a.determinant(), Some(Ok(0)));
    }

    #[test]
    fn test_det_zero_first_row_entries() {
        let a = m(vec![vec![0, 0, 2], vec![1, 3, 0], vec![4, 1, 5]]);
        // 2 * (1*1 - 3*4) = -22
        assert_eq!(a.determinant(), Some(Ok(-22)));
    }

    #[test]
    fn test_det_overflow_is_an_error() {
        let big = m(vec![vec![i64::MAX, 2], vec![2, i64::MAX]]);
        assert_eq!(
            big.determinant(),
            Some(Err(CoreError::ArithmeticOverflow { op: "determinant" }))
        );

        let big3 = m(vec![
            vec![i64::MAX, 0, 0],
            vec![0, 2, 0],
            vec![0, 0, 1],
        ]);
        assert!(matches!(big3.determinant(), Some(Err(_))));

        // A large entry is fine as long as every product fits.
        let fits = m(vec![vec![i64::MAX, 0], vec![0, 1]]);
        assert_eq!(fits.determinant(), Some(Ok(i64::MAX)));
    }

    #[test]
    fn test_det_not_square() {
        assert_eq!(Matrix::<i64>::zeros(2, 3).determinant(), None);
        assert_eq!(Matrix::<i64>::zeros(0, 0).determinant(), None);
    }

    #[test]
    fn test_det_lu_matches_cofactor() {
        let a = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0, 8.0],
            vec![2.0, 6.0, 4.0, 8.0],
            vec![3.0, 1.0, 1.0, 2.0],
        ])
        .unwrap();
        let exact = a.determinant().unwrap().unwrap();
        let lu = a.determinant_lu().unwrap();
        assert_eq!(exact, 72.0);
        assert!((lu - exact).abs() < 1e-10);
    }

    #[test]
    fn test_det_lu_singular_is_zero() {
        let a = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        assert_eq!(a.determinant_lu(), Some(0.0));
    }

    #[test]
    fn test_det_lu_not_square() {
        assert_eq!(Matrix::<f64>::zeros(3, 2).determinant_lu(), None);
    }
}
