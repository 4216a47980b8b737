//! Case-aware lexicographic orders for lemmas.

use std::cmp::Ordering;

/// Compares ignoring case; among equal spellings, lower case comes first.
pub fn lower_first(a: &str, b: &str) -> Ordering {
    compare_ignore_case(a, b).then_with(|| b.cmp(a))
}

/// Compares ignoring case; among equal spellings, upper case comes first.
pub fn upper_first(a: &str, b: &str) -> Ordering {
    compare_ignore_case(a, b).then_with(|| a.cmp(b))
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
