use gift_common::normalization::{fold_case, normalize_attribute, normalize_slug};
use gift_common::tokenization::{parse_search, SearchTerms};
use gift_common::types::CatalogEntry;

use crate::state::FilterState;

/// Predicates compiled once per recomputation from a [`FilterState`].
///
/// Each stage is `None` when it does not apply, so an inactive stage admits
/// everything.
#[derive(Clone, Debug)]
pub struct FilterPlan {
    pub search: Option<SearchTerms>,
    pub collections: Option<Vec<String>>,
    pub backdrops: Option<Vec<String>>,
    pub symbols: Option<Vec<String>>,
    pub price: Option<PriceRange>,
}

impl FilterPlan {
    pub fn new(filter: &FilterState) -> Self {
        FilterPlan {
            search: parse_search(&filter.search_text),
            collections: normalized_selection(&filter.selected_collections, normalize_slug),
            backdrops: normalized_selection(&filter.selected_backdrops, normalize_attribute),
            symbols: normalized_selection(&filter.selected_symbols, normalize_attribute),
            price: PriceRange::parse(&filter.price_min, &filter.price_max),
        }
    }

    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        if let Some(terms) = &self.search {
            if !matches_search(entry, terms) {
                return false;
            }
        }
        if let Some(selected) = &self.collections {
            if !matches_selection(entry.collection.as_deref(), selected, normalize_slug) {
                return false;
            }
        }
        if let Some(selected) = &self.backdrops {
            if !matches_selection(entry.backdrop.as_deref(), selected, normalize_attribute) {
                return false;
            }
        }
        if let Some(selected) = &self.symbols {
            if !matches_selection(entry.symbol.as_deref(), selected, normalize_attribute) {
                return false;
            }
        }
        if let Some(range) = &self.price {
            if !range.contains(entry.price) {
                return false;
            }
        }
        true
    }
}

fn normalized_selection(selected: &[String], normalize: fn(&str) -> String) -> Option<Vec<String>> {
    if selected.is_empty() {
        return None;
    }
    Some(selected.iter().map(|s| normalize(s)).collect())
}

fn matches_selection(value: Option<&str>, selected: &[String], normalize: fn(&str) -> String) -> bool {
    let Some(value) = value else {
        return false;
    };
    let value = normalize(value);
    selected.iter().any(|s| *s == value)
}

/// Text search over name, id and tags.
///
/// An entry matches when every word appears in its name, or the whole
/// phrase appears in its id, or any single word appears in any tag.
pub fn matches_search(entry: &CatalogEntry, terms: &SearchTerms) -> bool {
    let name = fold_case(&entry.name);
    if terms.words.iter().all(|w| name.contains(w.as_str())) {
        return true;
    }

    if fold_case(&entry.id).contains(terms.phrase.as_str()) {
        return true;
    }

    entry.tags.iter().any(|tag| {
        let tag = fold_case(tag);
        terms.words.iter().any(|w| tag.contains(w.as_str()))
    })
}

/// Inclusive price bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// `None` when either bound is not a number, which disables the price
    /// stage for this recomputation.
    pub fn parse(min: &str, max: &str) -> Option<Self> {
        let min = parse_bound(min)?;
        let max = parse_bound(max)?;
        Some(PriceRange { min, max })
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// A blank bound reads as 0, the way a cleared numeric input does.
fn parse_bound(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}
