use gift_common::tokenization::*;

#[test]
fn tokenize_splits_on_whitespace() {
    assert_eq!(tokenize("ice  cream\tcone"), vec!["ice", "cream", "cone"]);
}

#[test]
fn tokenize_lowercases() {
    assert_eq!(tokenize("Ice CREAM"), vec!["ice", "cream"]);
}

#[test]
fn tokenize_keeps_punctuation() {
    // Only whitespace separates words; ids like "#91641" stay whole.
    assert_eq!(tokenize("pepe #91641"), vec!["pepe", "#91641"]);
}

#[test]
fn tokenize_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
}

#[test]
fn blank_query_has_no_terms() {
    assert_eq!(parse_search(""), None);
    assert_eq!(parse_search(" \t "), None);
}

#[test]
fn phrase_is_not_trimmed() {
    let terms = parse_search(" Ice Cream").unwrap();
    assert_eq!(terms.phrase, " ice cream");
    assert_eq!(terms.words, vec!["ice", "cream"]);
}

#[test]
fn is_blank_detects_whitespace() {
    assert!(is_blank("\n"));
    assert!(!is_blank(" a "));
}
