use std::path::PathBuf;

use gift_common::types::RawGiftRecord;

use super::CatalogSource;
use crate::dataset::parse_payload;
use crate::error::CatalogError;

/// Reads a `gifts.json` dump from disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<RawGiftRecord>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            CatalogError::SourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        parse_payload(&bytes)
    }
}
