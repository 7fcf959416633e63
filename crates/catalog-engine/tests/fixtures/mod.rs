#![allow(dead_code)]

use catalog_engine::{CatalogEngine, EngineConfig};
use gift_common::types::RawGiftRecord;

pub const SEED: u64 = 0x5eed;

/// Engine with a fixed permutation.
pub fn engine() -> CatalogEngine {
    CatalogEngine::new(EngineConfig {
        shuffle_seed: Some(SEED),
        ..EngineConfig::default()
    })
}

pub fn gift(collection: &str, id: &str, price: f64) -> RawGiftRecord {
    RawGiftRecord {
        name: format!("{} #{}", title_case(collection), id),
        collection: collection.to_string(),
        id: id.to_string(),
        price_ton: Some(price),
        price_ton_discounted: Some(price),
        ..Default::default()
    }
}

pub fn gift_with_attrs(
    collection: &str,
    id: &str,
    price: f64,
    model: &str,
    backdrop: &str,
    symbol: &str,
) -> RawGiftRecord {
    RawGiftRecord {
        model: Some(model.to_string()),
        backdrop: Some(backdrop.to_string()),
        symbol: Some(symbol.to_string()),
        ..gift(collection, id, price)
    }
}

/// `n` distinct gifts across a few collections with varied prices.
pub fn catalog(n: usize) -> Vec<RawGiftRecord> {
    const COLLECTIONS: [&str; 4] = ["icecream", "plushpepe", "bdaycandle", "stellarrocket"];
    (0..n)
        .map(|i| {
            let collection = COLLECTIONS[i % COLLECTIONS.len()];
            let price = ((i * 37) % 101) as f64 + 0.5;
            gift(collection, &(1000 + i).to_string(), price)
        })
        .collect()
}

/// A small catalog with attributes, as the upstream parser emits it.
pub fn attributed_catalog() -> Vec<RawGiftRecord> {
    vec![
        gift_with_attrs("icecream", "91641", 12.0, "Vanilla 2%", "Grape 1.5%", "Star 0.4%"),
        gift_with_attrs("icecream", "2", 3.0, "Mint 1%", "Onyx Black 2%", "Moon 1%"),
        gift_with_attrs("plushpepe", "77", 250.0, "Gold 0.5%", "Grape 1,5 %", "Crown 0.2%"),
        gift_with_attrs("bdaycandle", "5", 7.5, "Classic 3%", "Cobalt Blue 1.5%", "Star 0.4%"),
        gift_with_attrs("stellarrocket", "12", 40.0, "Orbit 2%", "Midnight 1%", "Rocket 2%"),
    ]
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
