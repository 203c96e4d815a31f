use crate::error::{CoreError, Result};
use crate::history::{HistoryKind, HistorySink, NewEntry};
use crate::radix::{Conversions, Radix, convert, validate};

/// State of the "convert between bases" tool.
#[derive(Debug, Clone)]
pub struct ConversionSession {
    radix: Radix,
    input: String,
    conversions: Option<Conversions>,
    error: Option<CoreError>,
}

impl Default for ConversionSession {
    fn default() -> Self {
        Self::new(Radix::Decimal)
    }
}

impl ConversionSession {
    pub fn new(radix: Radix) -> Self {
        Self {
            radix,
            input: String::new(),
            conversions: None,
            error: None,
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The last successful conversion, if it still matches the input.
    pub fn conversions(&self) -> Option<&Conversions> {
        self.conversions.as_ref()
    }

    pub fn error(&self) -> Option<&CoreError> {
        self.error.as_ref()
    }

    /// Switch the input radix. Clears the input, result and error.
    pub fn set_radix(&mut self, radix: Radix) {
        self.radix = radix;
        self.input.clear();
        self.conversions = None;
        self.error = None;
    }

    /// Replace the input text, flagging it if it is not valid in the radix.
    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.conversions = None;
        self.error = if validate(value, self.radix) {
            None
        } else {
            Some(CoreError::InvalidDigits {
                radix: self.radix,
                value: value.to_string(),
            })
        };
    }

    /// Convert the current input and log it to `history`.
    ///
    /// Unlike [`convert`], an empty input is an error here: the user asked
    /// for a conversion without typing a number.
    pub fn calculate(&mut self, history: &mut impl HistorySink) -> Result<&Conversions> {
        let outcome = if self.input.is_empty() {
            Err(CoreError::MissingOperand)
        } else {
            convert(&self.input, self.radix)
        };
        match outcome {
            Ok(c) => {
                history.record(NewEntry {
                    kind: HistoryKind::Conversion,
                    operation: format!("conversion from {}", self.radix),
                    input: format!("{} ({})", self.input, self.radix),
                    result: format!(
                        "bin: {}, oct: {}, dec: {}, hex: {}",
                        c.binary, c.octal, c.decimal, c.hexadecimal
                    ),
                    details: Some(format!("converted from base {}", self.radix.base())),
                });
                self.error = None;
                Ok(&*self.conversions.insert(c))
            }
            Err(e) => {
                self.conversions = None;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
