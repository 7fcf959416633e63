pub mod query;
pub mod ranking;

use gift_common::types::{CatalogEntry, RawGiftRecord};

use crate::state::FilterState;

use self::query::FilterPlan;

/// The filtered, sorted view of `records` under `filter`.
///
/// Pure: the same dataset and filter state always yield the same sequence.
pub fn filter_catalog(records: &[RawGiftRecord], filter: &FilterState) -> Vec<CatalogEntry> {
    let plan = FilterPlan::new(filter);
    let mut entries: Vec<CatalogEntry> = records
        .iter()
        .map(CatalogEntry::from)
        .filter(|entry| plan.admits(entry))
        .collect();
    ranking::sort_entries(&mut entries, filter.sort_key);
    entries
}
