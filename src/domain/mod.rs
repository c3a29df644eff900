//! # Domain Layer
//!
//! Exchange snapshots, resting orders and execution plans.
//!
//! The domain layer has no I/O. Everything here is plain data with exact
//! decimal arithmetic.
//!
//! ## Modules
//!
//! - [`value_objects`]: Identifiers, prices, quantities and sides
//! - [`entities`]: Exchanges, order books and execution plans
//! - [`errors`]: Domain error types

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
