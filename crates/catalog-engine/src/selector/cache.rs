use std::future::Future;
use std::sync::Arc;

use super::{SelectorItem, SelectorKind};

/// Session cache with get-or-load semantics. Never invalidated once filled.
///
/// A failed or empty load leaves the cache empty, so the next request loads
/// again.
#[derive(Debug)]
pub struct ReferenceCache<T> {
    items: Option<Arc<[T]>>,
    loads: usize,
}

impl<T> Default for ReferenceCache<T> {
    fn default() -> Self {
        Self {
            items: None,
            loads: 0,
        }
    }
}

impl<T> ReferenceCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    /// Number of times a loader has been invoked.
    pub fn load_count(&self) -> usize {
        self.loads
    }

    pub fn get_or_load<F, E>(&mut self, loader: F) -> Result<Arc<[T]>, E>
    where
        F: FnOnce() -> Result<Vec<T>, E>,
    {
        if let Some(items) = &self.items {
            return Ok(Arc::clone(items));
        }
        self.loads += 1;
        let items = loader()?;
        Ok(self.store(items))
    }

    pub async fn get_or_load_async<F, Fut, E>(&mut self, loader: F) -> Result<Arc<[T]>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        if let Some(items) = &self.items {
            return Ok(Arc::clone(items));
        }
        self.loads += 1;
        let items = loader().await?;
        Ok(self.store(items))
    }

    fn store(&mut self, items: Vec<T>) -> Arc<[T]> {
        let items: Arc<[T]> = Arc::from(items);
        if !items.is_empty() {
            self.items = Some(Arc::clone(&items));
        }
        items
    }
}

/// One cache per picker.
#[derive(Debug, Default)]
pub struct ReferenceLists {
    collections: ReferenceCache<SelectorItem>,
    backdrops: ReferenceCache<SelectorItem>,
    symbols: ReferenceCache<SelectorItem>,
}

impl ReferenceLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self, kind: SelectorKind) -> &ReferenceCache<SelectorItem> {
        match kind {
            SelectorKind::Collection => &self.collections,
            SelectorKind::Backdrop => &self.backdrops,
            SelectorKind::Symbol => &self.symbols,
        }
    }

    pub fn cache_mut(&mut self, kind: SelectorKind) -> &mut ReferenceCache<SelectorItem> {
        match kind {
            SelectorKind::Collection => &mut self.collections,
            SelectorKind::Backdrop => &mut self.backdrops,
            SelectorKind::Symbol => &mut self.symbols,
        }
    }
}
