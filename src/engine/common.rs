//! Common utilities for rule matchers
//!
//! Shared text handling used by the MALPIP and interaction matchers.

/// Normalize text for matching
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Check whether a normalized trigger term occurs in normalized case text.
///
/// Plain substring containment with no word boundaries. A blank term never
/// matches, so an empty field cannot match every case.
pub fn contains_term(case_text: &str, term: &str) -> bool {
    if term.trim().is_empty() {
        return false;
    }
    case_text.contains(term)
}
