//! Matrix creation functions.

use crate::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    ///
    /// Either dimension may be zero.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, T::zero())
    }

    /// Create a matrix filled with a constant value.
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an identity matrix of size `n x n`.
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let eye = Matrix::<i64>::identity(3);
    /// assert_eq!(eye.get(1, 1).unwrap(), 1);
    /// assert_eq!(eye.get(0, 1).unwrap(), 0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.as_slice().len(), 12);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zeros_degenerate() {
        let m = Matrix::<i32>::zeros(0, 3);
        assert_eq!(m.rows(), 0);
        assert!(m.as_slice().is_empty());
        let m = Matrix::<i32>::zeros(2, 0);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.row(1), &[] as &[i32]);
    }

    #[test]
    fn test_full() {
        let m = Matrix::full(2, 3, 7_i32);
        assert!(m.as_slice().iter().all(|&x| x == 7));
    }

    #[test]
    fn test_identity() {
        let m = Matrix::<f64>::identity(3);
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_eq!(m.get(r, c).unwrap(), expected);
            }
        }
    }
}
