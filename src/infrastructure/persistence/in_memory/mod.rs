//! # In-Memory Repositories
//!
//! In-memory implementations for testing without a data folder.
//!
//! All implementations use `Arc<RwLock<_>>` for thread-safe access.

pub mod exchange_repository;

pub use exchange_repository::InMemoryExchangeRepository;
