//! Lemma-keyed multimaps over lexes.

use crate::entity::{Lex, LexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sorted multimap from a lemma form to the lexes carrying it.
///
/// Each group keeps the order in which its lexes were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LemmaIndex {
    groups: BTreeMap<String, Vec<LexId>>,
}

impl LemmaIndex {
    /// Groups lexes by their exact (case-sensitive) lemma.
    pub fn by_lemma(lexes: &[Lex]) -> Self {
        Self::group(lexes, |lex| lex.lemma.clone())
    }

    /// Groups lexes by their lower-cased lemma.
    pub fn by_lc_lemma(lexes: &[Lex]) -> Self {
        Self::group(lexes, Lex::lc_lemma)
    }

    fn group<F>(lexes: &[Lex], key: F) -> Self
    where
        F: Fn(&Lex) -> String,
    {
        let mut groups: BTreeMap<String, Vec<LexId>> = BTreeMap::new();
        for (position, lex) in lexes.iter().enumerate() {
            groups
                .entry(key(lex))
                .or_default()
                .push(LexId(position as u32));
        }
        Self { groups }
    }

    /// Lexes for a lemma, empty when the lemma is unknown.
    pub fn get(&self, lemma: &str) -> &[LexId] {
        self.groups.get(lemma).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if the lemma is indexed.
    pub fn contains(&self, lemma: &str) -> bool {
        self.groups.contains_key(lemma)
    }

    /// Iterates (lemma, lexes) groups in lemma order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LexId])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Checks if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
