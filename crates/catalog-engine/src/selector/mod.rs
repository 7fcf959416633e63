//! Reference lists behind the collection, backdrop and symbol pickers.
//!
//! Each list is loaded once per session into a [`ReferenceCache`]. Pickers
//! show selected items first, in the order they were picked, then the rest
//! by name.

pub mod cache;

use std::cmp::Ordering;

use gift_common::normalization::fold_case;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

pub use cache::{ReferenceCache, ReferenceLists};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    Collection,
    Backdrop,
    Symbol,
}

impl SelectorKind {
    pub const ALL: [SelectorKind; 3] = [
        SelectorKind::Collection,
        SelectorKind::Backdrop,
        SelectorKind::Symbol,
    ];

    /// Conventional file name of the published list.
    pub fn list_file(self) -> &'static str {
        match self {
            SelectorKind::Collection => "collections_list.json",
            SelectorKind::Backdrop => "backdrops_list.json",
            SelectorKind::Symbol => "symbols_list.json",
        }
    }

    /// The value stored in the filter selection when `item` is picked.
    /// Collections select by slug (falling back to the name); backdrops and
    /// symbols by display name.
    pub fn identifier(self, item: &SelectorItem) -> &str {
        match self {
            SelectorKind::Collection if !item.slug.is_empty() => &item.slug,
            _ => &item.name,
        }
    }
}

/// One entry of a reference list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorItem {
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub href: Option<String>,
}

pub fn parse_selector_list(bytes: &[u8]) -> Result<Vec<SelectorItem>, CatalogError> {
    serde_json::from_slice(bytes).map_err(|e| CatalogError::MalformedSource(e.to_string()))
}

/// Selected items first in selection order, then the rest by name.
pub fn order_for_display<'a>(
    kind: SelectorKind,
    items: &'a [SelectorItem],
    selected: &[String],
) -> Vec<&'a SelectorItem> {
    let position = |item: &SelectorItem| {
        let id = kind.identifier(item);
        selected.iter().position(|s| s == id)
    };

    let mut picked: Vec<(usize, &SelectorItem)> = Vec::new();
    let mut rest: Vec<&SelectorItem> = Vec::new();
    for item in items {
        match position(item) {
            Some(idx) => picked.push((idx, item)),
            None => rest.push(item),
        }
    }

    picked.sort_by_key(|(idx, _)| *idx);
    rest.sort_by(|a, b| compare_names(&a.name, &b.name));

    picked.into_iter().map(|(_, item)| item).chain(rest).collect()
}

fn compare_names(a: &str, b: &str) -> Ordering {
    fold_case(a).cmp(&fold_case(b)).then_with(|| a.cmp(b))
}

/// Case-insensitive substring match on names. A blank query keeps everything.
pub fn search_items<'a>(items: &[&'a SelectorItem], query: &str) -> Vec<&'a SelectorItem> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    let query = fold_case(query);
    items
        .iter()
        .copied()
        .filter(|item| fold_case(&item.name).contains(query.as_str()))
        .collect()
}

/// Add `value` to the end of the selection, or remove it if present.
pub fn toggle_selection(selected: &mut Vec<String>, value: &str) {
    match selected.iter().position(|s| s == value) {
        Some(idx) => {
            selected.remove(idx);
        }
        None => selected.push(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, slug: &str) -> SelectorItem {
        SelectorItem {
            name: name.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }

    #[test]
    fn collection_identifier_prefers_slug() {
        let kind = SelectorKind::Collection;
        assert_eq!(kind.identifier(&item("B-Day Candle", "bdaycandle")), "bdaycandle");
        assert_eq!(kind.identifier(&item("B-Day Candle", "")), "B-Day Candle");
        assert_eq!(
            SelectorKind::Backdrop.identifier(&item("Grape", "grape")),
            "Grape"
        );
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selected = vec!["a".to_string()];
        toggle_selection(&mut selected, "b");
        assert_eq!(selected, vec!["a", "b"]);
        toggle_selection(&mut selected, "a");
        assert_eq!(selected, vec!["b"]);
    }

    #[test]
    fn list_parses_with_missing_fields() {
        let items = parse_selector_list(br#"[{"name": "Grape"}, {"name": "Onyx", "icon": "o.png"}]"#)
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].icon.as_deref(), Some("o.png"));
    }
}
