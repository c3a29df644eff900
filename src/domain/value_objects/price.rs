//! # Price Value Object
//!
//! Exact decimal unit price, denominated in the quote currency.

use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use crate::domain::value_objects::quantity::Quantity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit price in the quote currency.
///
/// Prices read from exchange data are not validated on load. A non-positive
/// price is representable so that the planner can exclude such orders
/// instead of rejecting the whole snapshot.
///
/// # Examples
///
/// ```
/// use execution_planner::domain::value_objects::{Price, Quantity};
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(8000, 0));
/// let qty = Quantity::new(Decimal::new(5, 1));
///
/// assert_eq!(price.notional(qty).unwrap(), Decimal::new(4000, 0));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal value.
    #[inline]
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns a zero price.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the price is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns the quote-currency value of `quantity` units at this price.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product overflows.
    pub fn notional(self, quantity: Quantity) -> ArithmeticResult<Decimal> {
        self.0.safe_mul(quantity.get())
    }

    /// Returns how many units a quote-currency `budget` buys at this price.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the price is zero.
    pub fn affordable(self, budget: Decimal) -> ArithmeticResult<Quantity> {
        budget.safe_div(self.0).map(Quantity::new)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}
