//! # Checked Arithmetic
//!
//! Overflow-checked decimal operations for prices, weights and dimensions.
//!
//! Carrier prices and store measures are outside this crate's control, so
//! every multiplication or accumulation of them goes through
//! [`CheckedArithmetic`] instead of the panicking operators.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::value_objects::arithmetic::{ArithmeticError, CheckedArithmetic};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(Decimal::new(20, 0).safe_mul(Decimal::new(11, 1)), Ok(Decimal::new(22, 0)));
//! assert_eq!(Decimal::MAX.safe_add(Decimal::ONE), Err(ArithmeticError::Overflow));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The result does not fit in a `Decimal`.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Arithmetic that reports overflow instead of panicking.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum is out of range.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product is out of range.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Sums decimals, failing on the first overflow.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if a partial sum is out of range.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> ArithmeticResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, CheckedArithmetic::safe_add)
}
