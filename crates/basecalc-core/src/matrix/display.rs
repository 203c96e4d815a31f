//! Text forms of a [`Matrix`]: display, tab-separated export and parsing.

use core::fmt;
use core::str::FromStr;

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

/// Rows as bracketed lists: `[1, 2], [3, 4]`.
impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    /// Tab-separated cells, newline-separated rows (clipboard form).
    ///
    /// ```
    /// # use basecalc_core::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.to_tsv(), "1\t2\n3\t4");
    /// ```
    pub fn to_tsv(&self) -> String {
        self.iter_rows()
            .map(|row| {
                row.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parse `"1,2;3,4"`, `"1 2\n3 4"` or tab-separated text.
///
/// Rows are separated by `;` or newlines, cells by commas, tabs or spaces.
/// Blank rows are skipped. Ragged input is rejected.
impl<T: Scalar> FromStr for Matrix<T> {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in s.split(['\n', ';']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let r = rows.len();
            let row = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|cell| !cell.is_empty())
                .enumerate()
                .map(|(c, cell)| {
                    T::parse_cell(cell).ok_or_else(|| CoreError::InvalidCell {
                        row: r,
                        col: c,
                        text: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<T>>>()?;
            rows.push(row);
        }
        Matrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(format!("{m}"), "[1, 2], [3, 4]");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Matrix::<i32>::zeros(0, 0).to_string(), "[]");
    }

    #[test]
    fn test_to_tsv_floats() {
        let m = Matrix::from_rows(vec![vec![1.5, -2.0]]).unwrap();
        assert_eq!(m.to_tsv(), "1.5\t-2");
    }

    #[test]
    fn test_parse_semicolon_rows() {
        let m: Matrix<i64> = "1,2;3,4".parse().unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_parse_tsv_roundtrip() {
        let m: Matrix<f64> = "1\t2.5\n-3\t4\n".parse().unwrap();
        assert_eq!(m.to_tsv(), "1\t2.5\n-3\t4");
    }

    #[test]
    fn test_parse_mixed_separators() {
        let m: Matrix<i64> = " 1, 2  3 ; 4 5,6 ".parse().unwrap();
        assert_eq!(m.shape(), (2, 3));
    }

    #[test]
    fn test_parse_bad_cell() {
        let r: Result<Matrix<i64>> = "1,2;3,x".parse();
        assert_eq!(
            r.unwrap_err(),
            CoreError::InvalidCell {
                row: 1,
                col: 1,
                text: "x".into()
            }
        );
    }

    #[test]
    fn test_parse_ragged() {
        let r: Result<Matrix<i64>> = "1,2;3".parse();
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }
}
