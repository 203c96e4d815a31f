//! Caller-owned editing state for each calculator tool.
//!
//! The engine functions in [`radix`](crate::radix) and
//! [`matrix`](crate::matrix) are pure. A front end keeps one session per
//! tool, feeds user edits into it, and calls `calculate` with a
//! [`HistorySink`](crate::history::HistorySink) that receives a summary of
//! every successful computation.
//!
//! Every edit discards the previous result, so a session never shows a
//! result that does not match its current inputs.

mod arithmetic;
mod conversion;
mod matrix;

pub use arithmetic::ArithmeticSession;
pub use conversion::ConversionSession;
pub use matrix::{MatrixOperation, MatrixSession, Slot};
