//! `basecalc-core`: the numeric engine behind the basecalc calculator.
//!
//! Two independent tools share this crate:
//!
//! - [`radix`]: validation and conversion of binary/octal/decimal/hexadecimal
//!   digit strings, and integer arithmetic within one radix.
//! - [`matrix`]: small dense matrices with addition, subtraction,
//!   multiplication and determinants.
//!
//! # Design
//!
//! - Engine functions are pure: they borrow their inputs, allocate fresh
//!   outputs and report every failure as a [`CoreError`] value.
//! - Editing state lives in caller-owned [`session`] structs; calculation
//!   summaries go to a [`HistorySink`](history::HistorySink).

pub mod dtype;
pub mod error;
pub mod history;
pub mod matrix;
pub mod radix;
pub mod session;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::Matrix;
pub use radix::{Conversions, Operation, Radix};

/// Items intended for glob-import: `use basecalc_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::history::{History, HistoryEntry, HistoryKind, HistorySink, NewEntry};
    pub use crate::matrix::Matrix;
    pub use crate::radix::{Conversions, Operation, Radix, apply_operation, convert, validate};
    pub use crate::session::{
        ArithmeticSession, ConversionSession, MatrixOperation, MatrixSession, Slot,
    };
}
