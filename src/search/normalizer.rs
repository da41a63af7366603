use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("static pattern compiles"));

/// Strips every character that is not an ASCII letter, digit or whitespace,
/// then lowercases what remains.
///
/// Applied identically to catalog fields and to query text so that both land
/// in the same vocabulary.
pub fn normalize(text: &str) -> String {
    NON_ALPHANUMERIC.replace_all(text, "").to_lowercase()
}

/// Splits normalized text into vocabulary terms.
pub fn terms(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
