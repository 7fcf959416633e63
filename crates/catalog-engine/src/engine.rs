use std::sync::Arc;

use gift_common::types::{CatalogEntry, RawGiftRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EngineConfig;
use crate::dataset;
use crate::error::CatalogError;
use crate::search;
use crate::source::CatalogSource;
use crate::state::{CatalogView, EngineStatus, FilterPatch, FilterState};

/// Issued by [`CatalogEngine::begin_load`]. Only the most recent ticket may
/// complete a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A filtered view tagged with the state it was computed against.
#[derive(Clone, Debug)]
pub struct ComputedView {
    pub generation: u64,
    pub dataset_generation: u64,
    pub entries: Vec<CatalogEntry>,
}

/// Session catalog: one deduplicated dataset, the current filter state, and
/// the released prefix of the filtered view.
///
/// Invariant: `cursor <= filtered.len()`. Every filter change and every
/// completed load resets the cursor and releases the first page at once.
pub struct CatalogEngine {
    config: EngineConfig,
    rng: StdRng,
    dataset: Arc<[RawGiftRecord]>,
    dataset_generation: u64,
    status: EngineStatus,
    error_message: Option<String>,
    defaults: FilterState,
    filter: FilterState,
    generation: u64,
    filtered: Vec<CatalogEntry>,
    cursor: usize,
}

impl CatalogEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let defaults =
            FilterState::with_price_bounds(&config.default_price_min, &config.default_price_max);
        CatalogEngine {
            config,
            rng,
            dataset: Arc::from(Vec::new()),
            dataset_generation: 0,
            status: EngineStatus::Loading,
            error_message: None,
            filter: defaults.clone(),
            defaults,
            generation: 0,
            filtered: Vec::new(),
            cursor: 0,
        }
    }

    // --- Loading ---

    /// Enter `Loading`. The current view stays visible until the load
    /// completes.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.dataset_generation += 1;
        self.status = EngineStatus::Loading;
        self.error_message = None;
        LoadTicket(self.dataset_generation)
    }

    /// Finish a load started with `ticket`.
    ///
    /// Returns `false` and changes nothing when a newer load has begun since.
    /// A failed load leaves no dataset behind.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<RawGiftRecord>, CatalogError>,
    ) -> bool {
        if ticket.0 != self.dataset_generation {
            tracing::warn!(
                "Discarding stale catalog load (ticket {}, current {})",
                ticket.0,
                self.dataset_generation
            );
            return false;
        }

        match result {
            Ok(records) => {
                let dataset::DedupResult {
                    mut retained,
                    duplicates,
                } = dataset::deduplicate(records);
                dataset::shuffle(&mut retained, &mut self.rng);
                tracing::info!(
                    "Loaded {} gifts ({} duplicates dropped)",
                    retained.len(),
                    duplicates
                );
                self.dataset = Arc::from(retained);
                self.status = EngineStatus::Ready;
                self.error_message = None;
                self.refresh();
            }
            Err(e) => {
                tracing::warn!("Catalog load failed: {}", e);
                self.dataset = Arc::from(Vec::new());
                self.filtered.clear();
                self.cursor = 0;
                self.status = EngineStatus::Error;
                self.error_message = Some(e.to_string());
            }
        }
        true
    }

    /// Replace the dataset with `records`.
    pub fn load(&mut self, records: Vec<RawGiftRecord>) {
        let ticket = self.begin_load();
        self.complete_load(ticket, Ok(records));
    }

    /// Replace the dataset with a raw JSON payload.
    pub fn load_json(&mut self, bytes: &[u8]) {
        let ticket = self.begin_load();
        self.complete_load(ticket, dataset::parse_payload(bytes));
    }

    /// Fetch from `source` and load the result. Failures end in `Error`
    /// status; nothing is retried.
    pub async fn load_from<S: CatalogSource>(&mut self, source: &S) {
        let ticket = self.begin_load();
        let result = source.fetch().await;
        self.complete_load(ticket, result);
    }

    // --- Filtering ---

    /// Merge `patch` into the filter state and release the first page of the
    /// new view. While loading, the patch is only recorded.
    pub fn set_filter_state(&mut self, patch: FilterPatch) {
        self.filter.apply(patch);
        self.bump_and_refresh();
    }

    pub fn reset_filters(&mut self) {
        self.filter = self.defaults.clone();
        self.bump_and_refresh();
    }

    fn bump_and_refresh(&mut self) {
        self.generation += 1;
        if self.status == EngineStatus::Ready {
            self.refresh();
        } else {
            tracing::debug!(
                "Filter change recorded while {:?} (generation {})",
                self.status,
                self.generation
            );
        }
    }

    /// Compute the view for the current dataset and filter state without
    /// installing it.
    pub fn compute_view(&self) -> ComputedView {
        ComputedView {
            generation: self.generation,
            dataset_generation: self.dataset_generation,
            entries: search::filter_catalog(&self.dataset, &self.filter),
        }
    }

    /// Install a computed view and release its first page.
    ///
    /// Views computed against an older filter state or dataset are dropped.
    pub fn install_view(&mut self, view: ComputedView) -> bool {
        if view.generation != self.generation
            || view.dataset_generation != self.dataset_generation
            || self.status != EngineStatus::Ready
        {
            tracing::debug!(
                "Dropping stale view (generation {} vs {})",
                view.generation,
                self.generation
            );
            return false;
        }
        self.filtered = view.entries;
        self.cursor = self.config.page_size.min(self.filtered.len());
        tracing::debug!(
            "View generation {}: {} matches, {} released",
            self.generation,
            self.filtered.len(),
            self.cursor
        );
        true
    }

    fn refresh(&mut self) {
        let view = self.compute_view();
        self.install_view(view);
    }

    // --- Pagination ---

    /// Release the next page. No-op once everything is released.
    pub fn load_more(&mut self) {
        if self.cursor >= self.filtered.len() {
            return;
        }
        self.cursor = (self.cursor + self.config.page_size).min(self.filtered.len());
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.filtered.len()
    }

    // --- Accessors ---

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn visible_entries(&self) -> &[CatalogEntry] {
        &self.filtered[..self.cursor]
    }

    pub fn filtered_entries(&self) -> &[CatalogEntry] {
        &self.filtered
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub fn total_matches(&self) -> usize {
        self.filtered.len()
    }

    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    /// Read-only handle to the deduplicated, permuted dataset.
    pub fn dataset(&self) -> Arc<[RawGiftRecord]> {
        Arc::clone(&self.dataset)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn has_active_filters(&self) -> bool {
        self.filter.has_active_filters(&self.defaults)
    }

    /// Loaded without error and nothing matches.
    pub fn is_empty(&self) -> bool {
        self.status == EngineStatus::Ready && self.filtered.is_empty()
    }

    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            status: self.status,
            visible_entries: self.visible_entries(),
            has_more: self.has_more(),
            error_message: self.error_message(),
            is_empty: self.is_empty(),
            total_matches: self.total_matches(),
        }
    }
}

impl Default for CatalogEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
