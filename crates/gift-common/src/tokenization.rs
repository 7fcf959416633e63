use crate::normalization::fold_case;

/// A search query split for matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerms {
    /// Whole query, case-folded but not split or trimmed. Matched against ids.
    pub phrase: String,
    /// Case-folded whitespace-separated words. Matched against names and tags.
    pub words: Vec<String>,
}

/// Tokenize a search query. Returns `None` for a blank query, which means
/// the search stage does not run at all.
pub fn parse_search(query: &str) -> Option<SearchTerms> {
    if is_blank(query) {
        return None;
    }
    let phrase = fold_case(query);
    let words = tokenize(&phrase);
    Some(SearchTerms { phrase, words })
}

/// Split on whitespace and case-fold each word.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(fold_case).collect()
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
