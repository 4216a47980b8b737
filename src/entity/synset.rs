//! Synsets: sets of synonymous senses.

use crate::entity::{Category, Related, Relations};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A synset. Identity is the synset id.
///
/// `members` is ordered: position `i` lines up with the `i`-th sense
/// returned by [`Model::synset_senses`](crate::Model::synset_senses).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synset {
    /// Globally unique synset id.
    pub id: String,
    /// Lexical category.
    pub category: Category,
    /// Lexicographer domain (e.g. "communication").
    pub domain: String,
    /// Member lemmas.
    pub members: Vec<String>,
    /// Definitions, the first one is the main gloss.
    pub definitions: Vec<String>,
    /// Usage examples.
    pub examples: Vec<String>,
    /// Wikidata item.
    pub wikidata: Option<String>,
    /// Outgoing synset relations.
    pub relations: Relations,
}

impl Synset {
    /// Creates a synset with no definition or relation.
    pub fn new(
        id: impl Into<String>,
        category: Category,
        domain: impl Into<String>,
        members: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            domain: domain.into(),
            members,
            definitions: Vec::new(),
            examples: Vec::new(),
            wikidata: None,
            relations: Relations::new(),
        }
    }

    /// Adds a definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definitions.push(definition.into());
        self
    }

    /// Adds a usage example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Sets the wikidata item.
    pub fn with_wikidata(mut self, item: impl Into<String>) -> Self {
        self.wikidata = Some(item.into());
        self
    }

    /// Adds an outgoing relation.
    pub fn with_relation(mut self, relation: &str, target: impl Into<String>) -> Self {
        self.relations
            .entry(relation.to_string())
            .or_default()
            .insert(target.into());
        self
    }

    /// Part of speech (satellites fold into adjectives).
    #[inline]
    pub fn part_of_speech(&self) -> Category {
        self.category.part_of_speech()
    }

    /// Main definition.
    pub fn definition(&self) -> Option<&str> {
        self.definitions.first().map(String::as_str)
    }

    /// Lexicographer file name, e.g. `verb.communication`.
    pub fn lexfile(&self) -> String {
        format!("{}.{}", self.category.lexfile_prefix(), self.domain)
    }

    /// Position of a member lemma.
    pub fn member_index(&self, lemma: &str) -> Option<usize> {
        self.members.iter().position(|m| m == lemma)
    }
}

impl Related for Synset {
    fn id(&self) -> &str {
        &self.id
    }

    fn relations(&self) -> &Relations {
        &self.relations
    }

    fn relations_mut(&mut self) -> &mut Relations {
        &mut self.relations
    }
}

impl PartialEq for Synset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Synset {}

impl Hash for Synset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Synset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Synset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joke() -> Synset {
        Synset::new(
            "00855315-v",
            Category::V,
            "communication",
            vec!["jest".to_string(), "joke".to_string()],
        )
        .with_definition("tell a joke; speak humorously")
        .with_definition("second gloss")
    }

    #[test]
    fn test_lexfile() {
        assert_eq!(joke().lexfile(), "verb.communication");
        let sat = Synset::new("1-s", Category::S, "all", vec![]);
        assert_eq!(sat.lexfile(), "adj.all");
    }

    #[test]
    fn test_definition_and_members() {
        let synset = joke();
        assert_eq!(synset.definition(), Some("tell a joke; speak humorously"));
        assert_eq!(synset.member_index("joke"), Some(1));
        assert_eq!(synset.member_index("Joke"), None);
    }
}
