//! # Repository Traits
//!
//! Port definitions for exchange snapshot sources.
//!
//! The planner never reads files or talks to stores directly. It asks an
//! [`ExchangeRepository`] for the current snapshot and works on the returned
//! values.
//!
//! # Examples
//!
//! ```ignore
//! use execution_planner::infrastructure::persistence::traits::ExchangeRepository;
//!
//! async fn print_exchanges(repo: &impl ExchangeRepository) {
//!     let exchanges = repo.load_all().await.unwrap();
//!     println!("Loaded {} exchanges", exchanges.len());
//! }
//! ```

use crate::domain::entities::Exchange;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The snapshot source does not exist or cannot be listed.
    #[error("Source unavailable: {location}: {reason}")]
    SourceUnavailable {
        /// Folder, URL or store name.
        location: String,
        /// Underlying cause.
        reason: String,
    },

    /// A single record could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

impl RepositoryError {
    /// Creates a source unavailable error.
    #[must_use]
    pub fn source_unavailable(location: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::SourceUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Returns true if the whole source is unavailable.
    #[must_use]
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Source of exchange snapshots.
///
/// Every call returns a fresh, independent snapshot. Implementations must be
/// safe to call concurrently.
#[async_trait]
pub trait ExchangeRepository: Send + Sync + fmt::Debug {
    /// Loads every exchange the source currently holds.
    ///
    /// Records that cannot be decoded may be skipped by the implementation;
    /// the call only fails when the source as a whole cannot be read.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::SourceUnavailable` if the source is missing,
    /// or `RepositoryError::Io` if a record cannot be read.
    async fn load_all(&self) -> RepositoryResult<Vec<Exchange>>;

    /// Counts the records in the source without decoding them.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::SourceUnavailable` if the source is missing.
    async fn count(&self) -> RepositoryResult<u64>;
}
