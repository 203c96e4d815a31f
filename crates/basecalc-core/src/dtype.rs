//! Numeric element types for matrices.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar   (i8 .. i128, isize, f32, f64)
//!   └── Float  (f32, f64)
//! ```
//!
//! The cofactor determinant and the element-wise operations only need
//! [`Scalar`], so integer matrices keep exact results. The LU determinant
//! divides and therefore needs [`Float`].

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Base trait for every numeric type storable in a [`Matrix`](crate::Matrix).
///
/// Only signed types implement it: subtraction and cofactor signs must be
/// able to go below zero.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Parse a single matrix cell from text.
    ///
    /// Returns `None` when the text is not a number of this type.
    fn parse_cell(s: &str) -> Option<Self>;

    /// `self + rhs`, or `None` if an integer result does not fit.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` if an integer result does not fit.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` if an integer result does not fit.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Floating-point scalars (`f32`, `f64`), needed for pivoting elimination.
pub trait Float: Scalar + Div<Output = Self> {
    /// Machine epsilon.
    fn epsilon() -> Self;

    fn abs(self) -> Self;

    /// Convert from an `f64` literal (used for constants).
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            fn parse_cell(s: &str) -> Option<Self> {
                s.trim().parse::<$ty>().ok().filter(|v| v.is_finite())
            }
            // IEEE arithmetic saturates to infinity instead of failing.
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }
            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }

        impl Float for $ty {
            #[inline]
            fn epsilon() -> Self {
                <$ty>::EPSILON
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            fn parse_cell(s: &str) -> Option<Self> {
                s.trim().parse::<$ty>().ok()
            }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }
            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_sub(self, rhs)
            }
            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_mul(self, rhs)
            }
        }
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(i128);
impl_scalar_int!(isize);
