use gift_common::normalization::id_numeric_value;
use gift_common::types::CatalogEntry;

use crate::state::SortKey;

/// Stable sort by `key`. Keys that do not reorder leave the session
/// permutation as it is.
pub fn sort_entries(entries: &mut Vec<CatalogEntry>, key: SortKey) {
    if !key.reorders() {
        return;
    }
    match key {
        SortKey::PriceAsc => entries.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => entries.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::IdAsc => sort_by_id(entries, false),
        SortKey::IdDesc => sort_by_id(entries, true),
        SortKey::RarityAsc | SortKey::RarityDesc | SortKey::None | SortKey::Latest => {}
    }
}

fn sort_by_id(entries: &mut Vec<CatalogEntry>, descending: bool) {
    let mut keyed: Vec<(f64, CatalogEntry)> = entries
        .drain(..)
        .map(|e| (id_numeric_value(&e.id), e))
        .collect();
    if descending {
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
    entries.extend(keyed.into_iter().map(|(_, e)| e));
}
