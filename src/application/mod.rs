//! # Application Layer
//!
//! Use cases built on the domain layer and the repository ports.
//!
//! - [`services`]: The execution planner
//! - [`error`]: Application error types

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
