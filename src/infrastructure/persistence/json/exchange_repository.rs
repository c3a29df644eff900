//! # JSON Exchange Repository
//!
//! Reads one exchange per `*.json` file from a folder.
//!
//! Files are visited in file-name order. A file that does not decode into an
//! [`Exchange`] is skipped with a warning and the rest of the folder is still
//! loaded. A missing folder or a file that cannot be read fails the call.

use crate::domain::entities::Exchange;
use crate::infrastructure::persistence::traits::{
    ExchangeRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Folder used when none is configured.
pub const DEFAULT_DATA_FOLDER: &str = "data/exchanges";

/// [`ExchangeRepository`] over a folder of JSON files.
#[derive(Debug, Clone)]
pub struct JsonExchangeRepository {
    folder: PathBuf,
}

impl JsonExchangeRepository {
    /// Creates a repository reading from `folder`.
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// Returns the folder this repository reads from.
    #[inline]
    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn location(&self) -> String {
        self.folder.display().to_string()
    }

    /// Lists the `*.json` files of the folder, sorted by path.
    async fn json_files(&self) -> RepositoryResult<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(&self.folder)
            .await
            .map_err(|e| RepositoryError::source_unavailable(self.location(), e))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepositoryError::source_unavailable(self.location(), e))?
        {
            let path = entry.path();
            if !has_json_extension(&path) {
                continue;
            }
            let is_file = tokio::fs::metadata(&path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if is_file {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

impl Default for JsonExchangeRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FOLDER)
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[async_trait]
impl ExchangeRepository for JsonExchangeRepository {
    async fn load_all(&self) -> RepositoryResult<Vec<Exchange>> {
        let files = self.json_files().await?;
        let mut exchanges = Vec::with_capacity(files.len());

        for file in &files {
            let contents = tokio::fs::read(file)
                .await
                .map_err(|e| RepositoryError::io(format!("{}: {e}", file.display())))?;

            match serde_json::from_slice::<Exchange>(&contents) {
                Ok(exchange) => exchanges.push(exchange),
                Err(e) => {
                    warn!(
                        folder = %self.folder.display(),
                        file = %file.display(),
                        error = %e,
                        "Skipping exchange file that failed to parse"
                    );
                }
            }
        }

        debug!(
            folder = %self.folder.display(),
            files = files.len(),
            loaded = exchanges.len(),
            "Loaded exchange snapshot"
        );
        Ok(exchanges)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let files = self.json_files().await?;
        debug!(
            folder = %self.folder.display(),
            count = files.len(),
            "Counted exchange files"
        );
        Ok(files.len() as u64)
    }
}
