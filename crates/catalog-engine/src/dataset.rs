use std::collections::HashSet;

use gift_common::types::RawGiftRecord;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use crate::error::CatalogError;

/// Outcome of collapsing duplicate `(collection, id)` keys.
#[derive(Clone, Debug, Default)]
pub struct DedupResult {
    pub retained: Vec<RawGiftRecord>,
    pub duplicates: usize,
}

/// Keep the first record for each `(collection, id)` key, in input order.
pub fn deduplicate(records: impl IntoIterator<Item = RawGiftRecord>) -> DedupResult {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut result = DedupResult::default();

    for record in records {
        if seen.insert((record.collection.clone(), record.id.clone())) {
            result.retained.push(record);
        } else {
            result.duplicates += 1;
        }
    }
    result
}

/// Session permutation over the deduplicated set.
pub fn shuffle<R: Rng + ?Sized>(records: &mut [RawGiftRecord], rng: &mut R) {
    records.shuffle(rng);
}

/// Parse a catalog payload.
///
/// Anything other than a JSON array is a malformed source. Array items that
/// are not JSON objects are skipped; missing or wrongly typed fields inside
/// an object take their defaults.
pub fn parse_payload(bytes: &[u8]) -> Result<Vec<RawGiftRecord>, CatalogError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| CatalogError::MalformedSource(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(CatalogError::MalformedSource(format!(
                "expected an array of gifts, got {}",
                json_kind(&other)
            )))
        }
    };

    let total = items.len();
    let records: Vec<RawGiftRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match item {
            Value::Object(_) => match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping catalog item {}: {}", idx, e);
                    None
                }
            },
            other => {
                tracing::warn!(
                    "Skipping catalog item {}: expected an object, got {}",
                    idx,
                    json_kind(&other)
                );
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            "Skipped {} of {} catalog items that were not gift records",
            total - records.len(),
            total
        );
    }
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
