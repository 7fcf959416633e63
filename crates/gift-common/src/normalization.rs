use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A rarity percentage such as `1.5%`, `2 %` or `1,5%`, with any leading
/// whitespace.
static PERCENT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[0-9]+(?:[.,][0-9]*)?\s*%").expect("valid percent regex"));

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[0-9]+").expect("valid digit regex"));

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-_]").expect("valid separator regex"));

/// Drop everything from the first `#` onward and trim.
///
/// `"Ice Cream #91641"` becomes `"Ice Cream"`.
pub fn strip_serial(name: &str) -> String {
    let base = match name.find('#') {
        Some(idx) => &name[..idx],
        None => name,
    };
    base.trim().to_string()
}

/// Case-fold for comparisons: NFC, then lowercase.
pub fn fold_case(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Collection slugs compare trimmed and lowercased.
pub fn normalize_slug(slug: &str) -> String {
    fold_case(slug.trim())
}

/// Identity form of a backdrop or symbol name.
///
/// Lowercases, removes rarity percentages, then any remaining digit runs,
/// then whitespace, hyphens and underscores. `"Cobalt Blue 1.5%"` and
/// `"cobalt-blue"` both normalize to `"cobaltblue"`.
pub fn normalize_attribute(name: &str) -> String {
    let lower = fold_case(name);
    let no_percent = PERCENT_TOKEN.replace_all(&lower, "");
    let no_digits = DIGIT_RUN.replace_all(&no_percent, "");
    SEPARATORS.replace_all(&no_digits, "").trim().to_string()
}

/// Numeric value of an id's digits, ignoring every other character.
/// An id with no digits is worth 0.
pub fn id_numeric_value(id: &str) -> f64 {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse().unwrap_or(0.0)
}
