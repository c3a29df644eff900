//! # Persistence Layer
//!
//! Exchange snapshot sources.
//!
//! ## Repository Traits (Ports)
//!
//! - [`ExchangeRepository`]: Loads and counts exchange snapshots
//!
//! ## Implementations
//!
//! - `json`: One JSON file per exchange in a folder
//! - `in_memory`: In-memory implementation for tests and embedding

pub mod in_memory;
pub mod json;
pub mod traits;

pub use in_memory::InMemoryExchangeRepository;
pub use json::JsonExchangeRepository;
pub use traits::{ExchangeRepository, RepositoryError, RepositoryResult};
