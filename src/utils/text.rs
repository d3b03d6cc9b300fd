//! Text matching helpers
//!
//! Family lookup and method recommendation both classify plants by keyword
//! containment rather than by exact name, so "Cherry Tomato" and "Beefsteak
//! Tomato" land in the same bucket.

/// True if `needle` occurs anywhere in `haystack`, ignoring case
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if any keyword occurs in `haystack`, ignoring case
pub fn contains_any_keyword(haystack: &str, keywords: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    keywords.iter().any(|k| lower.contains(&k.to_lowercase()))
}

/// Numeric lookup key for a hardiness zone code
///
/// Strips every alphabetic character and any whitespace: "7b" -> "7",
/// " 10a " -> "10". Codes with no digits produce an empty key, which no zone
/// table contains.
pub fn zone_key(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_alphabetic() && !c.is_whitespace())
        .collect()
}
