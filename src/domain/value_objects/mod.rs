//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! ## Identity Types
//!
//! - [`ExchangeId`], [`OrderId`]: String-based identifiers
//!
//! ## Numeric Types
//!
//! - [`Price`]: Decimal unit price in the quote currency
//! - [`Quantity`]: Decimal quantity of the base asset
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Domain Enums
//!
//! - [`OrderSide`]: Buy or Sell

pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod price;
pub mod quantity;
pub mod timestamp;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use enums::{OrderSide, ParseEnumError};
pub use ids::{ExchangeId, OrderId};
pub use price::Price;
pub use quantity::Quantity;
pub use timestamp::Timestamp;
