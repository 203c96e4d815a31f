use crate::error::{CoreError, Result};
use crate::history::{HistoryKind, HistorySink, NewEntry};
use crate::radix::{Operation, Radix, apply_operation, validate};

/// State of the "arithmetic within a base" tool.
#[derive(Debug, Clone)]
pub struct ArithmeticSession {
    radix: Radix,
    operation: Operation,
    left: String,
    right: String,
    result: Option<String>,
    error: Option<CoreError>,
}

impl Default for ArithmeticSession {
    fn default() -> Self {
        Self::new(Radix::Decimal, Operation::Add)
    }
}

impl ArithmeticSession {
    pub fn new(radix: Radix, operation: Operation) -> Self {
        Self {
            radix,
            operation,
            left: String::new(),
            right: String::new(),
            result: None,
            error: None,
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operands(&self) -> (&str, &str) {
        (&self.left, &self.right)
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&CoreError> {
        self.error.as_ref()
    }

    /// Switch radix. Both operands, the result and the error are cleared.
    pub fn set_radix(&mut self, radix: Radix) {
        self.radix = radix;
        self.left.clear();
        self.right.clear();
        self.result = None;
        self.error = None;
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = operation;
        self.result = None;
    }

    pub fn set_left(&mut self, value: &str) {
        self.left = value.to_string();
        self.on_operand_edit(value);
    }

    pub fn set_right(&mut self, value: &str) {
        self.right = value.to_string();
        self.on_operand_edit(value);
    }

    fn on_operand_edit(&mut self, value: &str) {
        self.result = None;
        self.error = if validate(value, self.radix) {
            None
        } else {
            Some(CoreError::InvalidDigits {
                radix: self.radix,
                value: value.to_string(),
            })
        };
    }

    /// Run the selected operation and log it to `history`.
    pub fn calculate(&mut self, history: &mut impl HistorySink) -> Result<&str> {
        match apply_operation(&self.left, &self.right, self.operation, self.radix) {
            Ok(value) => {
                history.record(NewEntry {
                    kind: HistoryKind::Math,
                    operation: format!("{} in {}", self.operation, self.radix),
                    input: format!(
                        "{} {} {}",
                        self.left,
                        self.operation.symbol(),
                        self.right
                    ),
                    result: value.clone(),
                    details: Some(format!("computed in base {}", self.radix.base())),
                });
                self.error = None;
                Ok(self.result.insert(value).as_str())
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
