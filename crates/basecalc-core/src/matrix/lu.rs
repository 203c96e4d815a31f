//! LU decomposition with partial pivoting, used for determinants.
//!
//! Factors a square matrix `A` into `PA = LU` in place. Only the diagonal of
//! `U` and the permutation sign are kept afterwards, which is all
//! [`Matrix::determinant_lu`] needs.

use crate::Float;
use crate::error::{CoreError, Result};

use super::Matrix;

/// Packed `PA = LU` factorization of a square matrix.
#[derive(Debug, Clone)]
pub(crate) struct LuDecomposition<T: Float> {
    /// Lower triangle holds `L` (unit diagonal implied), upper holds `U`.
    lu: Vec<T>,
    n: usize,
    /// Sign of the permutation (+1 or -1).
    sign: T,
    /// Set when a pivot was negligible next to its column.
    singular: bool,
}

impl<T: Float> LuDecomposition<T> {
    /// Factor a square matrix.
    ///
    /// A pivot counts as zero when it is within `n * epsilon` of the largest
    /// magnitude originally in its column. The cutoff is relative, so
    /// uniformly tiny or huge columns are not mistaken for singular ones.
    pub(crate) fn decompose(a: &Matrix<T>) -> Result<Self> {
        if !a.is_square() {
            return Err(CoreError::NotSquare {
                rows: a.rows(),
                cols: a.cols(),
            });
        }
        let n = a.rows();
        let mut lu: Vec<T> = a.as_slice().to_vec();
        let mut sign = T::one();
        let mut singular = false;

        let tolerance = T::epsilon() * T::from_f64(n as f64);
        let column_scale: Vec<T> = (0..n)
            .map(|k| {
                a.iter_rows()
                    .map(|row| row[k].abs())
                    .fold(T::zero(), |m, v| if v > m { v } else { m })
            })
            .collect();

        for k in 0..n {
            // Find pivot: row with largest |lu[i, k]| for i >= k
            let mut max_val = lu[k * n + k].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_row != k {
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
                sign = -sign;
            }

            let pivot = lu[k * n + k];
            if pivot.abs() <= tolerance * column_scale[k] {
                singular = true;
                continue;
            }

            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    let ukj = lu[k * n + j];
                    lu[i * n + j] -= factor * ukj;
                }
            }
        }

        tracing::trace!(n, singular, "lu decomposition");
        Ok(Self {
            lu,
            n,
            sign,
            singular,
        })
    }

    #[cfg(test)]
    fn is_singular(&self) -> bool {
        self.singular
    }

    /// `det(A) = sign * product(diag(U))`, or zero when singular.
    pub(crate) fn det(&self) -> T {
        if self.singular {
            return T::zero();
        }
        let n = self.n;
        let mut d = self.sign;
        for i in 0..n {
            d *= self.lu[i * n + i];
        }
        d
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn mat(data: &[f64], n: usize) -> Matrix<f64> {
        Matrix::from_vec(data.to_vec(), n, n).unwrap()
    }

    fn det(data: &[f64], n: usize) -> f64 {
        LuDecomposition::decompose(&mat(data, n)).unwrap().det()
    }

    #[test]
    fn test_det_2x2() {
        assert!((det(&[2.0, 1.0, 1.0, 4.0], 2) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_det_pivots_on_zero_leading_entry() {
        // One row swap flips the sign.
        assert!((det(&[0.0, 1.0, 1.0, 0.0], 2) - (-1.0)).abs() < 1e-14);
        assert!((det(&[0.0, 2.0, 3.0, 1.0], 2) - (-6.0)).abs() < 1e-14);
    }

    #[test]
    fn test_det_3x3() {
        // >>> np.linalg.det([[6,1,1],[4,-2,5],[2,8,7]])
        // -306.0
        let d = det(&[6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0], 3);
        assert!((d - (-306.0)).abs() < 1e-10);
    }

    #[test]
    fn test_det_identity() {
        let lu = LuDecomposition::decompose(&Matrix::<f64>::identity(5)).unwrap();
        assert!(!lu.is_singular());
        assert!((lu.det() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_singular_matrix() {
        let lu = LuDecomposition::decompose(&mat(
            &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 7.0, 8.0, 9.0],
            3,
        ))
        .unwrap();
        assert!(lu.is_singular());
        assert_eq!(lu.det(), 0.0);
    }

    #[test]
    fn test_zero_matrix_is_singular() {
        let lu = LuDecomposition::decompose(&Matrix::<f64>::zeros(3, 3)).unwrap();
        assert!(lu.is_singular());
        assert_eq!(lu.det(), 0.0);
    }

    #[test]
    fn test_badly_scaled_matrix_is_not_singular() {
        let d = det(&[1e-13, 0.0, 0.0, 1e13], 2);
        assert!((d - 1.0).abs() < 1e-12, "det = {d}");

        let d = det(&[1e-14], 1);
        assert_eq!(d, 1e-14);

        // Every entry tiny: the cutoff scales with the columns.
        let d = det(&[2e-20, 1e-20, 1e-20, 4e-20], 2);
        assert!((d - 7e-40).abs() < 1e-52, "det = {d}");
    }

    #[test]
    fn test_not_square() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(
            LuDecomposition::decompose(&a).unwrap_err(),
            CoreError::NotSquare { rows: 2, cols: 3 }
        );
    }
}
