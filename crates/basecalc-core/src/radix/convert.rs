//! Conversion of one digit string into all four number systems.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{Radix, encode, parse};

/// A value rendered in every supported radix.
///
/// The default value has all four fields blank, which is what an empty
/// input converts to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversions {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hexadecimal: String,
}

impl Conversions {
    /// Whether every field is blank.
    pub fn is_blank(&self) -> bool {
        self.binary.is_empty()
            && self.octal.is_empty()
            && self.decimal.is_empty()
            && self.hexadecimal.is_empty()
    }

    /// The rendering for a single radix.
    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Binary => &self.binary,
            Radix::Octal => &self.octal,
            Radix::Decimal => &self.decimal,
            Radix::Hexadecimal => &self.hexadecimal,
        }
    }

    fn from_value(value: i64) -> Self {
        Self {
            binary: encode(value, Radix::Binary),
            octal: encode(value, Radix::Octal),
            decimal: encode(value, Radix::Decimal),
            hexadecimal: encode(value, Radix::Hexadecimal),
        }
    }
}

/// Convert `value`, written in `from`, into all four radixes.
///
/// An empty input yields [`Conversions::default`] (all blank). A non-empty
/// input that is malformed or out of range is an error, never a blank result.
///
/// ```
/// # use basecalc_core::radix::{convert, Radix};
/// let c = convert("255", Radix::Decimal).unwrap();
/// assert_eq!(c.binary, "11111111");
/// assert_eq!(c.octal, "377");
/// assert_eq!(c.hexadecimal, "FF");
/// ```
pub fn convert(value: &str, from: Radix) -> Result<Conversions> {
    if value.is_empty() {
        return Ok(Conversions::default());
    }
    let n = parse(value, from)?;
    tracing::debug!(%from, value, parsed = n, "converting");
    Ok(Conversions::from_value(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_convert_empty_is_blank() {
        for radix in Radix::ALL {
            let c = convert("", radix).unwrap();
            assert!(c.is_blank());
        }
    }

    #[test]
    fn test_convert_from_hex() {
        let c = convert("ff", Radix::Hexadecimal).unwrap();
        assert_eq!(c.binary, "11111111");
        assert_eq!(c.octal, "377");
        assert_eq!(c.decimal, "255");
        assert_eq!(c.hexadecimal, "FF");
    }

    #[test]
    fn test_convert_strips_leading_zeros() {
        let c = convert("000101", Radix::Binary).unwrap();
        assert_eq!(c.binary, "101");
        assert_eq!(c.decimal, "5");
    }

    #[test]
    fn test_convert_zero() {
        let c = convert("0", Radix::Octal).unwrap();
        assert_eq!(c.get(Radix::Binary), "0");
        assert_eq!(c.get(Radix::Hexadecimal), "0");
    }

    #[test]
    fn test_convert_malformed_is_error() {
        let r = convert("12", Radix::Binary);
        assert!(matches!(r, Err(CoreError::InvalidDigits { .. })));
    }

    #[test]
    fn test_convert_out_of_range_is_error() {
        let r = convert("99999999999999999999", Radix::Decimal);
        assert!(matches!(r, Err(CoreError::Overflow { .. })));
    }
}
