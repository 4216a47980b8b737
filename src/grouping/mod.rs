//! Derived groupings over a built model.
//!
//! These are computed on demand and never cached: each call walks the
//! model again.

mod lexes;
mod senses;

pub use lexes::{
    counts_by_lc_lemma, cs_lemmas_by_lc_lemma, cs_lemmas_for_lc_lemma,
    cs_lemmas_having_multiple_casings, hyper_map_by_lc_lemma, multiple_counts_by_lc_lemma,
};
pub use senses::{
    by_decreasing_tag_count, senses_by_lc_lemma, senses_by_lc_lemma_and_pos,
    senses_for_lc_lemma, senses_for_lc_lemma_and_pos, LcLemmaPos,
};

use std::collections::{BTreeMap, BTreeSet};

/// Groups distinct items by key, keeping only groups of two or more.
pub fn group_by_having_multiple<T, K, F, I>(items: I, key: F) -> BTreeMap<K, BTreeSet<T>>
where
    I: IntoIterator<Item = T>,
    T: Ord,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups = group_distinct(items, key);
    groups.retain(|_, values| values.len() > 1);
    groups
}

/// Number of distinct items per key.
pub fn counts_by<T, K, F, I>(items: I, key: F) -> BTreeMap<K, usize>
where
    I: IntoIterator<Item = T>,
    T: Ord,
    K: Ord,
    F: Fn(&T) -> K,
{
    group_distinct(items, key)
        .into_iter()
        .map(|(k, values)| (k, values.len()))
        .collect()
}

/// Number of distinct items per key, for keys with two or more.
pub fn multiple_counts_by<T, K, F, I>(items: I, key: F) -> BTreeMap<K, usize>
where
    I: IntoIterator<Item = T>,
    T: Ord,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut counts = counts_by(items, key);
    counts.retain(|_, count| *count > 1);
    counts
}

fn group_distinct<T, K, F, I>(items: I, key: F) -> BTreeMap<K, BTreeSet<T>>
where
    I: IntoIterator<Item = T>,
    T: Ord,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, BTreeSet<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().insert(item);
    }
    groups
}
