//! # basecalc
//!
//! A number-base and matrix calculator engine.
//!
//! One `use basecalc::prelude::*;` gives you radix conversion and
//! arithmetic, matrix algebra, editing sessions and the history log.
//!
//! ```
//! use basecalc::prelude::*;
//!
//! let c = convert("ff", Radix::Hexadecimal).unwrap();
//! assert_eq!(c.decimal, "255");
//!
//! let a: Matrix<i64> = "1,2;3,4".parse().unwrap();
//! assert_eq!(a.determinant(), Some(Ok(-2)));
//! ```

pub use basecalc_core as core;

/// Glob-import convenience: `use basecalc::prelude::*;`
pub mod prelude {
    pub use basecalc_core::prelude::*;
}
