use thiserror::Error;

use crate::radix::Radix;

/// All errors returned by `basecalc-core`.
///
/// Errors are plain data: every engine entry point returns them through
/// [`Result`] and never panics on bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An operand was empty where a number is required.
    #[error("both numbers are required")]
    MissingOperand,

    /// A digit string contains characters outside the radix alphabet.
    #[error("invalid {radix} number: {value:?}")]
    InvalidDigits { radix: Radix, value: String },

    /// A digit string is well-formed but does not fit in an `i64`.
    #[error("{radix} number {value:?} is out of range")]
    Overflow { radix: Radix, value: String },

    /// An arithmetic result does not fit in an `i64`.
    #[error("result of {op} is out of range")]
    ArithmeticOverflow { op: &'static str },

    /// Integer division by zero.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A shape or index specification is invalid.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// A matrix cell could not be parsed as a number.
    #[error("invalid matrix cell {text:?} at row {row}, column {col}")]
    InvalidCell {
        row: usize,
        col: usize,
        text: String,
    },

    /// The operation needs a square, non-empty matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A radix name could not be recognized.
    #[error("unknown number system: {0:?}")]
    UnknownRadix(String),

    /// An operation name could not be recognized.
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),
}

/// Convenience alias used throughout `basecalc-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(CoreError::DivisionByZero.to_string(), "cannot divide by zero");
        let e = CoreError::InvalidDigits {
            radix: Radix::Octal,
            value: "9".into(),
        };
        assert_eq!(e.to_string(), "invalid octal number: \"9\"");
        let e = CoreError::DimensionMismatch {
            expected: vec![2, 2],
            got: vec![3, 2],
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected [2, 2], got [3, 2]");
    }
}
