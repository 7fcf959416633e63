//! Where the raw gift dataset comes from.

pub mod file;
pub mod http;

use std::future::Future;

use gift_common::types::RawGiftRecord;

use crate::error::CatalogError;

pub use file::FileSource;
pub use http::HttpSource;

/// Supplies the raw dataset once per session.
pub trait CatalogSource {
    /// Fetch and parse the whole dataset.
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawGiftRecord>, CatalogError>> + Send;
}

/// In-memory source, handy for embedding a bundled catalog.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    records: Vec<RawGiftRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<RawGiftRecord>) -> Self {
        Self { records }
    }
}

impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<RawGiftRecord>, CatalogError> {
        Ok(self.records.clone())
    }
}
