use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::normalization;

/// One gift as supplied by the catalog source.
///
/// Every field is optional on the wire. Absent, `null` or wrongly typed
/// fields become empty strings or `None`; unknown fields are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawGiftRecord {
    #[serde(deserialize_with = "text_or_default")]
    pub name: String,
    #[serde(deserialize_with = "text_or_default")]
    pub collection: String,
    #[serde(deserialize_with = "text_or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub backdrop: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub issued: Option<String>,
    #[serde(deserialize_with = "lenient_price")]
    pub price_ton: Option<f64>,
    #[serde(deserialize_with = "lenient_price")]
    pub price_ton_discounted: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub lottie_url: Option<String>,
}

impl RawGiftRecord {
    /// Uniqueness key. Records sharing it are duplicates.
    pub fn key(&self) -> (&str, &str) {
        (&self.collection, &self.id)
    }
}

/// Display-facing projection of a [`RawGiftRecord`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Raw per-collection serial. Not prefixed with the collection, so two
    /// collections may share an id.
    pub id: String,
    pub name: String,
    pub price: f64,
    pub preview: Option<String>,
    pub in_stock: bool,
    pub models_count: u32,
    /// `[model, backdrop, symbol, collection]`, present values only.
    pub tags: Vec<String>,
    pub collection: Option<String>,
    pub backdrop: Option<String>,
    pub symbol: Option<String>,
}

impl From<&RawGiftRecord> for CatalogEntry {
    fn from(raw: &RawGiftRecord) -> Self {
        let model = present(raw.model.as_deref());
        let backdrop = present(raw.backdrop.as_deref());
        let symbol = present(raw.symbol.as_deref());
        let collection = present(Some(raw.collection.as_str()));

        let tags = [model, backdrop, symbol, collection]
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();

        CatalogEntry {
            id: raw.id.clone(),
            name: normalization::strip_serial(&raw.name),
            price: raw.price_ton_discounted.unwrap_or(0.0),
            preview: present(raw.lottie_url.as_deref()).map(str::to_string),
            in_stock: raw.price_ton.is_some_and(|p| p > 0.0),
            models_count: u32::from(model.is_some()),
            tags,
            collection: collection.map(str::to_string),
            backdrop: backdrop.map(str::to_string),
            symbol: symbol.map(str::to_string),
        }
    }
}

/// Empty strings count as absent, matching how the upstream parser emits
/// missing attributes.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl TextOrNumber {
    fn into_text(self) -> Option<String> {
        match self {
            TextOrNumber::Text(s) => Some(s),
            TextOrNumber::Integer(n) => Some(n.to_string()),
            TextOrNumber::Float(f) => Some(f.to_string()),
            TextOrNumber::Other(_) => None,
        }
    }

    fn into_price(self) -> Option<f64> {
        match self {
            TextOrNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
            TextOrNumber::Integer(n) => Some(n as f64),
            TextOrNumber::Float(f) => Some(f),
            TextOrNumber::Other(_) => None,
        }
    }
}

/// Accepts a string, a number, or `null`. Upstream dumps occasionally emit
/// serials as bare integers. Any other shape reads as empty.
fn text_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.and_then(TextOrNumber::into_text).unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.and_then(TextOrNumber::into_text))
}

/// Numbers pass through; numeric strings such as `"3.5"` are parsed.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.and_then(TextOrNumber::into_price))
}
