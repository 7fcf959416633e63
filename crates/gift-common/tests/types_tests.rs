use gift_common::types::{CatalogEntry, RawGiftRecord};

fn full_record() -> RawGiftRecord {
    serde_json::from_str(
        r#"{
            "name": "Ice Cream #91641",
            "collection": "icecream",
            "id": "91641",
            "url": "https://fragment.com/gift/icecream-91641",
            "model": "Vanilla 2%",
            "backdrop": "Grape 1.5%",
            "symbol": "Star 0.4%",
            "issued": "91641/120000",
            "price_ton": 12.5,
            "price_ton_discounted": 11.0,
            "lottie_url": "https://nft.fragment.com/gift/icecream-91641.lottie.json"
        }"#,
    )
    .unwrap()
}

#[test]
fn projection_strips_serial_from_name() {
    let entry = CatalogEntry::from(&full_record());
    assert_eq!(entry.name, "Ice Cream");
    assert_eq!(entry.id, "91641");
}

#[test]
fn projection_uses_discounted_price() {
    let entry = CatalogEntry::from(&full_record());
    assert_eq!(entry.price, 11.0);
    assert!(entry.in_stock);
}

#[test]
fn projection_orders_tags() {
    let entry = CatalogEntry::from(&full_record());
    assert_eq!(
        entry.tags,
        vec!["Vanilla 2%", "Grape 1.5%", "Star 0.4%", "icecream"]
    );
    assert_eq!(entry.models_count, 1);
}

#[test]
fn projection_skips_missing_tags() {
    let raw = RawGiftRecord {
        collection: "rocket".into(),
        symbol: Some("Moon".into()),
        ..Default::default()
    };
    let entry = CatalogEntry::from(&raw);
    assert_eq!(entry.tags, vec!["Moon", "rocket"]);
    assert_eq!(entry.models_count, 0);
    assert_eq!(entry.backdrop, None);
}

#[test]
fn projection_defaults_missing_price() {
    let raw = RawGiftRecord {
        price_ton: Some(0.0),
        ..Default::default()
    };
    let entry = CatalogEntry::from(&raw);
    assert_eq!(entry.price, 0.0);
    assert!(!entry.in_stock);
    assert_eq!(entry.preview, None);
    assert_eq!(entry.collection, None);
}

#[test]
fn negative_listing_price_is_not_in_stock() {
    let raw = RawGiftRecord {
        price_ton: Some(-1.0),
        price_ton_discounted: Some(5.0),
        ..Default::default()
    };
    let entry = CatalogEntry::from(&raw);
    assert!(!entry.in_stock);
    assert_eq!(entry.price, 5.0);
}

#[test]
fn record_tolerates_nulls_and_missing_fields() {
    let raw: RawGiftRecord =
        serde_json::from_str(r#"{"name": null, "collection": "x", "price_ton": null}"#).unwrap();
    assert_eq!(raw.name, "");
    assert_eq!(raw.id, "");
    assert_eq!(raw.price_ton, None);
}

#[test]
fn record_accepts_numeric_id() {
    let raw: RawGiftRecord = serde_json::from_str(r#"{"collection": "x", "id": 42}"#).unwrap();
    assert_eq!(raw.id, "42");
    assert_eq!(raw.key(), ("x", "42"));
}

#[test]
fn record_ignores_unknown_fields() {
    let raw: RawGiftRecord =
        serde_json::from_str(r#"{"collection": "x", "id": "1", "rarity": 3}"#).unwrap();
    assert_eq!(raw.key(), ("x", "1"));
}

#[test]
fn record_substitutes_defaults_for_wrongly_typed_fields() {
    let raw: RawGiftRecord = serde_json::from_str(
        r#"{
            "name": true,
            "collection": "icecream",
            "id": 7,
            "model": 5,
            "backdrop": ["Grape"],
            "symbol": {"name": "Star"},
            "issued": false,
            "price_ton": "4",
            "price_ton_discounted": "3.5",
            "lottie_url": 12
        }"#,
    )
    .unwrap();
    assert_eq!(raw.name, "");
    assert_eq!(raw.key(), ("icecream", "7"));
    assert_eq!(raw.model.as_deref(), Some("5"));
    assert_eq!(raw.backdrop, None);
    assert_eq!(raw.symbol, None);
    assert_eq!(raw.issued, None);
    assert_eq!(raw.price_ton, Some(4.0));
    assert_eq!(raw.price_ton_discounted, Some(3.5));
    assert_eq!(raw.lottie_url.as_deref(), Some("12"));
}

#[test]
fn unparsable_price_text_reads_as_missing() {
    let raw: RawGiftRecord = serde_json::from_str(
        r#"{"collection": "x", "id": "1", "price_ton": "soon", "price_ton_discounted": "NaN"}"#,
    )
    .unwrap();
    assert_eq!(raw.price_ton, None);
    assert_eq!(raw.price_ton_discounted, None);
    let entry = CatalogEntry::from(&raw);
    assert_eq!(entry.price, 0.0);
    assert!(!entry.in_stock);
}
