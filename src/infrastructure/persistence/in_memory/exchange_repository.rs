//! # In-Memory Exchange Repository
//!
//! In-memory implementation of [`ExchangeRepository`] for tests and
//! embedders that already hold their exchanges in memory.

use crate::domain::entities::Exchange;
use crate::infrastructure::persistence::traits::{ExchangeRepository, RepositoryResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ExchangeRepository`].
///
/// Exchanges are returned in insertion order. Saving an exchange whose ID is
/// already stored replaces it in place.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExchangeRepository {
    storage: Arc<RwLock<Vec<Exchange>>>,
}

impl InMemoryExchangeRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with `exchanges`.
    #[must_use]
    pub fn with_exchanges(exchanges: impl IntoIterator<Item = Exchange>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(exchanges.into_iter().collect())),
        }
    }

    /// Stores an exchange, replacing any exchange with the same ID.
    pub async fn save(&self, exchange: Exchange) {
        let mut storage = self.storage.write().await;
        match storage.iter_mut().find(|e| e.id() == exchange.id()) {
            Some(existing) => *existing = exchange,
            None => storage.push(exchange),
        }
    }

    /// Returns the number of stored exchanges. Waits for pending writes.
    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }

    /// Returns true if the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.storage.read().await.is_empty()
    }
}

#[async_trait]
impl ExchangeRepository for InMemoryExchangeRepository {
    async fn load_all(&self) -> RepositoryResult<Vec<Exchange>> {
        let storage = self.storage.read().await;
        Ok(storage.clone())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
