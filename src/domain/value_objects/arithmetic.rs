//! # Checked Arithmetic
//!
//! Every price, quantity and balance computation goes through
//! [`CheckedArithmetic`], so an out-of-range value becomes an
//! [`ArithmeticError`] instead of a panic.
//!
//! ```
//! use execution_planner::domain::value_objects::arithmetic::CheckedArithmetic;
//! use rust_decimal::Decimal;
//!
//! let balance = Decimal::new(4000, 0);
//! let price = Decimal::new(8000, 0);
//! assert_eq!(balance.safe_div(price).unwrap(), Decimal::new(5, 1));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Failure of a checked decimal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Result above `Decimal::MAX`.
    #[error("arithmetic overflow")]
    Overflow,

    /// Result below `Decimal::MIN`.
    #[error("arithmetic underflow")]
    Underflow,

    /// Divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result of a checked decimal operation.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Decimal arithmetic that reports failure instead of panicking.
pub trait CheckedArithmetic: Sized {
    /// Adds `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` past `Decimal::MAX`.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Subtracts `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` past `Decimal::MIN`.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Multiplies by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` past `Decimal::MAX`.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` for a zero divisor.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}
