//! # Domain Errors
//!
//! Business rule violations raised by domain types.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::enums::ParseEnumError;
use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Quantity is zero, negative, or otherwise unusable.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Price is zero, negative, or otherwise unusable.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Checked decimal arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Order side string was not `buy` or `sell`.
    #[error("{0}")]
    InvalidSide(#[from] ParseEnumError),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
