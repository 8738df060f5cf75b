use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // A token is either a maximal run of alphanumerics or a run of other
    // non-whitespace characters (punctuation, kept as its own unit so the
    // filter stage can drop it).
    static ref TOKEN_RE: Regex =
        Regex::new(r"(?u)[\p{L}\p{N}]+|[^\p{L}\p{N}\s]+").expect("valid regex");
}

/// Tokenize raw text: NFKC-normalize, lowercase, then split into word and
/// punctuation tokens. Empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    TOKEN_RE
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Keep only tokens that are entirely alphanumeric and not stopwords.
/// Order-preserving; an empty stopword set leaves every word token intact.
pub fn filter_tokens(tokens: Vec<String>, stopwords: &HashSet<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| t.chars().all(char::is_alphanumeric) && !stopwords.contains(t))
        .collect()
}
