//! Number systems: validation, parsing and encoding of digit strings.
//!
//! A [`Radix`] is one of the four bases the calculator understands. Digit
//! strings are plain `&str` values; the empty string means "no input" and is
//! always valid but never computable.
//!
//! | Radix | Base | Alphabet |
//! |-------|------|----------|
//! | [`Radix::Binary`] | 2 | `0-1` |
//! | [`Radix::Octal`] | 8 | `0-7` |
//! | [`Radix::Decimal`] | 10 | `0-9` |
//! | [`Radix::Hexadecimal`] | 16 | `0-9A-Fa-f` |

mod arith;
mod convert;

pub use arith::{Operation, apply_operation};
pub use convert::{Conversions, convert};

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A supported number system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// All radixes in ascending base order.
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    /// The numeric base (2, 8, 10 or 16).
    #[inline]
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Lower-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }

    /// Whether `c` belongs to this radix's digit alphabet.
    ///
    /// Hexadecimal digits are accepted in either case.
    #[inline]
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.base())
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Radix {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "b" | "2" => Ok(Radix::Binary),
            "octal" | "oct" | "o" | "8" => Ok(Radix::Octal),
            "decimal" | "dec" | "d" | "10" => Ok(Radix::Decimal),
            "hexadecimal" | "hex" | "h" | "x" | "16" => Ok(Radix::Hexadecimal),
            _ => Err(CoreError::UnknownRadix(s.to_string())),
        }
    }
}

/// Check a digit string against the alphabet of `radix`.
///
/// The empty string is valid (nothing entered yet).
///
/// ```
/// # use basecalc_core::radix::{validate, Radix};
/// assert!(validate("", Radix::Binary));
/// assert!(validate("ff", Radix::Hexadecimal));
/// assert!(!validate("9", Radix::Octal));
/// ```
pub fn validate(value: &str, radix: Radix) -> bool {
    value.chars().all(|c| radix.is_digit(c))
}

/// Parse a non-empty digit string into an `i64`.
///
/// Distinguishes the three ways parsing can fail: empty input, characters
/// outside the alphabet, and magnitudes beyond `i64::MAX`.
///
/// ```
/// # use basecalc_core::radix::{parse, Radix};
/// assert_eq!(parse("ff", Radix::Hexadecimal).unwrap(), 255);
/// assert!(parse("2", Radix::Binary).is_err());
/// ```
pub fn parse(value: &str, radix: Radix) -> Result<i64> {
    if value.is_empty() {
        return Err(CoreError::MissingOperand);
    }
    if !validate(value, radix) {
        return Err(CoreError::InvalidDigits {
            radix,
            value: value.to_string(),
        });
    }
    // The alphabet check rules out signs and stray characters, so the only
    // remaining failure is a magnitude that does not fit.
    i64::from_str_radix(value, radix.base()).map_err(|_| CoreError::Overflow {
        radix,
        value: value.to_string(),
    })
}

/// Encode an integer as a digit string in `radix`.
///
/// No leading zeros; negative values get a leading `-` followed by the
/// magnitude. Hexadecimal digits are upper-case.
///
/// ```
/// # use basecalc_core::radix::{encode, Radix};
/// assert_eq!(encode(10, Radix::Binary), "1010");
/// assert_eq!(encode(-255, Radix::Hexadecimal), "-FF");
/// ```
pub fn encode(value: i64, radix: Radix) -> String {
    let magnitude = value.unsigned_abs();
    let digits = match radix {
        Radix::Binary => format!("{magnitude:b}"),
        Radix::Octal => format!("{magnitude:o}"),
        Radix::Decimal => format!("{magnitude}"),
        Radix::Hexadecimal => format!("{magnitude:X}"),
    };
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}
