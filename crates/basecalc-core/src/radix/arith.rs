//! Integer arithmetic carried out within a single radix.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

use super::{Radix, encode, parse};

/// A binary arithmetic operation on two digit strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Infix symbol used in history summaries.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        }
    }

    /// Apply the operation to two integers.
    ///
    /// Division truncates toward zero. Overflow and division by zero are
    /// reported as errors.
    pub fn eval(self, a: i64, b: i64) -> Result<i64> {
        let value = match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
            Operation::Divide => {
                if b == 0 {
                    return Err(CoreError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        value.ok_or(CoreError::ArithmeticOverflow { op: self.name() })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "minus" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "times" | "*" | "x" | "×" => Ok(Operation::Multiply),
            "divide" | "div" | "/" | "÷" => Ok(Operation::Divide),
            _ => Err(CoreError::UnknownOperation(s.to_string())),
        }
    }
}

/// Apply `op` to two digit strings written in `radix`.
///
/// Both operands must be non-empty and valid in `radix`. The result is
/// re-encoded in the same radix (upper-case, `-` prefix when negative).
///
/// ```
/// # use basecalc_core::radix::{apply_operation, Operation, Radix};
/// let r = apply_operation("A", "2", Operation::Divide, Radix::Hexadecimal).unwrap();
/// assert_eq!(r, "5");
/// assert!(apply_operation("1", "0", Operation::Divide, Radix::Decimal).is_err());
/// ```
pub fn apply_operation(a: &str, b: &str, op: Operation, radix: Radix) -> Result<String> {
    if a.is_empty() || b.is_empty() {
        return Err(CoreError::MissingOperand);
    }
    let lhs = parse(a, radix)?;
    let rhs = parse(b, radix)?;
    let value = op.eval(lhs, rhs)?;
    tracing::debug!(%radix, %op, lhs, rhs, value, "applied operation");
    Ok(encode(value, radix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_divide() {
        let r = apply_operation("A", "2", Operation::Divide, Radix::Hexadecimal);
        assert_eq!(r.unwrap(), "5");
    }

    #[test]
    fn test_divide_by_zero() {
        let r = apply_operation("1", "0", Operation::Divide, Radix::Decimal);
        assert_eq!(r, Err(CoreError::DivisionByZero));
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            apply_operation("", "1", Operation::Add, Radix::Decimal),
            Err(CoreError::MissingOperand)
        );
        assert_eq!(
            apply_operation("1", "", Operation::Add, Radix::Decimal),
            Err(CoreError::MissingOperand)
        );
    }

    #[test]
    fn test_invalid_operand() {
        let r = apply_operation("102", "1", Operation::Add, Radix::Binary);
        assert!(matches!(r, Err(CoreError::InvalidDigits { .. })));
    }

    #[test]
    fn test_binary_arithmetic() {
        assert_eq!(
            apply_operation("101", "11", Operation::Add, Radix::Binary).unwrap(),
            "1000"
        );
        assert_eq!(
            apply_operation("1", "10", Operation::Subtract, Radix::Binary).unwrap(),
            "-1"
        );
        assert_eq!(
            apply_operation("11", "11", Operation::Multiply, Radix::Binary).unwrap(),
            "1001"
        );
    }

    #[test]
    fn test_result_is_uppercase() {
        assert_eq!(
            apply_operation("ff", "1", Operation::Subtract, Radix::Hexadecimal).unwrap(),
            "FE"
        );
        assert_eq!(
            apply_operation("a", "b", Operation::Subtract, Radix::Hexadecimal).unwrap(),
            "-1"
        );
    }

    #[test]
    fn test_divide_truncates() {
        assert_eq!(
            apply_operation("7", "2", Operation::Divide, Radix::Decimal).unwrap(),
            "3"
        );
        assert_eq!(Operation::Divide.eval(-7, 2).unwrap(), -3);
    }

    #[test]
    fn test_overflow() {
        let r = apply_operation(
            "7FFFFFFFFFFFFFFF",
            "1",
            Operation::Add,
            Radix::Hexadecimal,
        );
        assert!(matches!(r, Err(CoreError::ArithmeticOverflow { .. })));
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("+".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("Divide".parse::<Operation>().unwrap(), Operation::Divide);
        assert!("mod".parse::<Operation>().is_err());
    }
}
