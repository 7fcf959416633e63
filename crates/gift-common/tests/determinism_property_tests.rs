use gift_common::{normalization, tokenization};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_attribute_is_idempotent(s in "[a-zA-Z0-9 .,%_-]{0,64}") {
        let once = normalization::normalize_attribute(&s);
        let twice = normalization::normalize_attribute(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_attribute_ignores_rarity(
        name in "[a-zA-Z]{1,12}( [a-zA-Z]{1,12})?",
        whole in 0u32..100,
        frac in 0u32..10,
    ) {
        let with_rarity = format!("{name} {whole}.{frac}%");
        prop_assert_eq!(
            normalization::normalize_attribute(&with_rarity),
            normalization::normalize_attribute(&name)
        );
    }

    #[test]
    fn normalized_attribute_has_no_separators(s in ".{0,64}") {
        let n = normalization::normalize_attribute(&s);
        prop_assert!(!n.chars().any(|c| c.is_whitespace() || c == '-' || c == '_'));
        prop_assert!(!n.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn strip_serial_never_contains_hash(s in ".{0,64}") {
        prop_assert!(!normalization::strip_serial(&s).contains('#'));
    }

    #[test]
    fn tokenize_words_have_no_whitespace(s in ".{0,128}") {
        for word in tokenization::tokenize(&s) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn id_value_matches_digit_parse(n in 0u64..1_000_000_000) {
        let id = format!("#{n}x");
        prop_assert_eq!(normalization::id_numeric_value(&id), n as f64);
    }
}
