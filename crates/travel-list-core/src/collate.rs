//! Description Collation
//!
//! Locale-aware-ish ordering for item descriptions. Three levels, like a
//! browser `localeCompare`:
//! 1. base letters (NFKD, combining marks dropped, lowercased)
//! 2. accents
//! 3. case, lowercase first

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary collation key: `"Éclair"` and `"eclair"` share the same key
pub fn base_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        // Same letters, different case: uppercase sorts after lowercase
        .then_with(|| b.cmp(a))
}
