use std::fmt;
use std::str::FromStr;

use gift_common::types::CatalogEntry;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};

// --- Status ---

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    #[default]
    Loading,
    Ready,
    Error,
}

// --- Sorting ---

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    None,
    Latest,
    #[serde(alias = "price-low")]
    PriceAsc,
    #[serde(alias = "price-high")]
    PriceDesc,
    IdAsc,
    IdDesc,
    RarityAsc,
    RarityDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::None,
        SortKey::Latest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::IdAsc,
        SortKey::IdDesc,
        SortKey::RarityAsc,
        SortKey::RarityDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Latest => "latest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::IdAsc => "id-asc",
            SortKey::IdDesc => "id-desc",
            SortKey::RarityAsc => "rarity-asc",
            SortKey::RarityDesc => "rarity-desc",
        }
    }

    /// Whether this key reorders the permutation at all. No rarity metric is
    /// defined for entries, so rarity keys are accepted and keep the order.
    pub fn reorders(self) -> bool {
        matches!(
            self,
            SortKey::PriceAsc | SortKey::PriceDesc | SortKey::IdAsc | SortKey::IdDesc
        )
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort key: {}", self.0)
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price-low" => Ok(SortKey::PriceAsc),
            "price-high" => Ok(SortKey::PriceDesc),
            other => SortKey::ALL
                .into_iter()
                .find(|k| k.as_str() == other)
                .ok_or_else(|| UnknownSortKey(s.to_string())),
        }
    }
}

// --- Filter state ---

/// Current search, sort and filter criteria.
///
/// Price bounds are kept as entered and parsed at evaluation time; a bound
/// that does not parse disables the price stage instead of failing.
/// Selections are insertion-ordered sets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search_text: String,
    pub sort_key: SortKey,
    pub price_min: String,
    pub price_max: String,
    pub selected_collections: Vec<String>,
    pub selected_backdrops: Vec<String>,
    pub selected_symbols: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_price_bounds(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX)
    }
}

impl FilterState {
    pub fn with_price_bounds(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::None,
            price_min: min.into(),
            price_max: max.into(),
            selected_collections: Vec::new(),
            selected_backdrops: Vec::new(),
            selected_symbols: Vec::new(),
        }
    }

    /// Merge a patch; fields the patch leaves unset are kept.
    pub fn apply(&mut self, patch: FilterPatch) {
        let FilterPatch {
            search_text,
            sort_key,
            price_min,
            price_max,
            selected_collections,
            selected_backdrops,
            selected_symbols,
        } = patch;

        if let Some(v) = search_text {
            self.search_text = v;
        }
        if let Some(v) = sort_key {
            self.sort_key = v;
        }
        if let Some(v) = price_min {
            self.price_min = v;
        }
        if let Some(v) = price_max {
            self.price_max = v;
        }
        if let Some(v) = selected_collections {
            self.selected_collections = ordered_set(v);
        }
        if let Some(v) = selected_backdrops {
            self.selected_backdrops = ordered_set(v);
        }
        if let Some(v) = selected_symbols {
            self.selected_symbols = ordered_set(v);
        }
    }

    /// Anything other than search differs from `defaults`.
    pub fn has_active_filters(&self, defaults: &FilterState) -> bool {
        self.sort_key != SortKey::None
            || self.price_min != defaults.price_min
            || self.price_max != defaults.price_max
            || !self.selected_collections.is_empty()
            || !self.selected_backdrops.is_empty()
            || !self.selected_symbols.is_empty()
    }
}

/// Drops repeats, keeping the first position of each value.
fn ordered_set(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// Partial update to a [`FilterState`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPatch {
    pub search_text: Option<String>,
    pub sort_key: Option<SortKey>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub selected_collections: Option<Vec<String>>,
    pub selected_backdrops: Option<Vec<String>>,
    pub selected_symbols: Option<Vec<String>>,
}

impl FilterPatch {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort_key = Some(key);
        self
    }

    pub fn price_min(mut self, min: impl Into<String>) -> Self {
        self.price_min = Some(min.into());
        self
    }

    pub fn price_max(mut self, max: impl Into<String>) -> Self {
        self.price_max = Some(max.into());
        self
    }

    pub fn collections<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_collections = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn backdrops<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_backdrops = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn symbols<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_symbols = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

// --- Presentation view ---

/// What the display layer reads after each operation.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogView<'a> {
    pub status: EngineStatus,
    pub visible_entries: &'a [CatalogEntry],
    pub has_more: bool,
    pub error_message: Option<&'a str>,
    /// Loaded without error, but nothing matches the current filters.
    pub is_empty: bool,
    pub total_matches: usize,
}
