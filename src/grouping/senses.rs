//! Sense groupings and orderings.

use crate::entity::{Category, Sense};
use crate::finder;
use crate::model::Model;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Lower-cased lemma and part of speech, the Princeton sense grouping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LcLemmaPos {
    /// Lower-cased lemma.
    pub lc_lemma: String,
    /// Part of speech, never `S`.
    pub pos: Category,
}

impl LcLemmaPos {
    /// Creates a key, lower-casing the lemma and folding satellites.
    pub fn new(lemma: &str, category: Category) -> Self {
        Self {
            lc_lemma: lemma.to_lowercase(),
            pos: category.part_of_speech(),
        }
    }
}

impl fmt::Display for LcLemmaPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'-{}", self.lc_lemma, self.pos)
    }
}

/// Senses per lower-cased lemma of their owning lex.
pub fn senses_by_lc_lemma(model: &Model) -> BTreeMap<String, BTreeSet<&Sense>> {
    group_senses(model, |lemma, _| lemma.to_lowercase())
}

/// Senses per lower-cased lemma and part of speech.
pub fn senses_by_lc_lemma_and_pos(model: &Model) -> BTreeMap<LcLemmaPos, BTreeSet<&Sense>> {
    group_senses(model, |lemma, sense| LcLemmaPos::new(lemma, sense.category))
}

/// Senses of lexes whose lemma lower-cases to `lc_lemma`, empty when unknown.
pub fn senses_for_lc_lemma<'a>(model: &'a Model, lc_lemma: &str) -> BTreeSet<&'a Sense> {
    finder::lc_lexes(model, lc_lemma)
        .flat_map(move |lex| model.senses_of(lex))
        .collect()
}

/// Senses for one lower-cased lemma and part of speech (`s` matches `a`).
pub fn senses_for_lc_lemma_and_pos<'a>(
    model: &'a Model,
    lc_lemma: &str,
    category: Category,
) -> BTreeSet<&'a Sense> {
    let pos = category.part_of_speech();
    finder::lc_lexes(model, lc_lemma)
        .flat_map(move |lex| model.senses_of(lex))
        .filter(|sense| sense.category.part_of_speech() == pos)
        .collect()
}

fn group_senses<K, F>(model: &Model, key: F) -> BTreeMap<K, BTreeSet<&Sense>>
where
    K: Ord,
    F: Fn(&str, &Sense) -> K,
{
    let mut groups: BTreeMap<K, BTreeSet<&Sense>> = BTreeMap::new();
    for lex in model.lexes() {
        for sense in model.senses_of(lex) {
            groups.entry(key(lex.lemma.as_str(), sense)).or_default().insert(sense);
        }
    }
    groups
}

/// Orders senses by decreasing tag count. Untagged senses count as zero.
pub fn by_decreasing_tag_count(a: &Sense, b: &Sense) -> Ordering {
    let count = |s: &Sense| s.tag_count.map_or(0, |t| t.count);
    count(b).cmp(&count(a))
}
