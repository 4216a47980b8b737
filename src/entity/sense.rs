//! Senses: one meaning of one lex.

use crate::entity::{Category, LexId, Related, Relations};
use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Syntactic position of an adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjPosition {
    /// Attributive (`a`).
    Attributive,
    /// Immediately postnominal (`ip`).
    ImmediatePostnominal,
    /// Predicative (`p`).
    Predicative,
}

impl AdjPosition {
    /// Short tag used in source files.
    pub fn tag(self) -> &'static str {
        match self {
            AdjPosition::Attributive => "a",
            AdjPosition::ImmediatePostnominal => "ip",
            AdjPosition::Predicative => "p",
        }
    }

    /// Parses a short tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" => Some(AdjPosition::Attributive),
            "ip" => Some(AdjPosition::ImmediatePostnominal),
            "p" => Some(AdjPosition::Predicative),
            _ => None,
        }
    }
}

/// Corpus tag count of a sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagCount {
    /// Sense number within the lemma.
    pub sense_num: u32,
    /// Number of tagged occurrences.
    pub count: u32,
}

impl TagCount {
    /// Creates a tag count.
    pub fn new(sense_num: u32, count: u32) -> Self {
        Self { sense_num, count }
    }
}

/// A sense of a lex, tied to one synset.
///
/// Identity is the sensekey: equality, hashing and ordering ignore all
/// other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sense {
    /// Globally unique sensekey.
    pub sensekey: String,
    /// Owning lex.
    pub lex: LexId,
    /// Lexical category.
    pub category: Category,
    /// Position among the owning lex's senses.
    pub index_in_lex: usize,
    /// Synset this sense belongs to.
    pub synset_id: String,
    /// Usage examples.
    pub examples: Vec<String>,
    /// Verb frame ids.
    pub verb_frames: Vec<String>,
    /// Verb template ids, set when the model is built.
    pub verb_templates: Vec<u32>,
    /// Adjective position.
    pub adj_position: Option<AdjPosition>,
    /// Tag count, set when the model is built.
    pub tag_count: Option<TagCount>,
    /// Outgoing sense relations.
    pub relations: Relations,
}

impl Sense {
    /// Creates a sense with no examples, frames or relations.
    pub fn new(
        sensekey: impl Into<String>,
        lex: LexId,
        category: Category,
        index_in_lex: usize,
        synset_id: impl Into<String>,
    ) -> Self {
        Self {
            sensekey: sensekey.into(),
            lex,
            category,
            index_in_lex,
            synset_id: synset_id.into(),
            examples: Vec::new(),
            verb_frames: Vec::new(),
            verb_templates: Vec::new(),
            adj_position: None,
            tag_count: None,
            relations: Relations::new(),
        }
    }

    /// Adds a usage example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Sets the verb frames.
    pub fn with_verb_frames(mut self, frames: Vec<String>) -> Self {
        self.verb_frames = frames;
        self
    }

    /// Sets the adjective position.
    pub fn with_adj_position(mut self, position: AdjPosition) -> Self {
        self.adj_position = Some(position);
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

    /// Parses the lex_id field of the sensekey.
    ///
    /// Sensekeys read `lemma%ss_type:lex_filenum:lex_id:head_word:head_id`.
    pub fn lex_id_number(&self) -> Result<u32> {
        let invalid = || ModelError::InvalidSensekey(self.sensekey.clone());
        let (_, tail) = self.sensekey.split_once('%').ok_or_else(invalid)?;
        let field = tail.split(':').nth(2).ok_or_else(invalid)?;
        field.parse().map_err(|_| invalid())
    }
}

impl Related for Sense {
    fn id(&self) -> &str {
        &self.sensekey
    }

    fn relations(&self) -> &Relations {
        &self.relations
    }

    fn relations_mut(&mut self) -> &mut Relations {
        &mut self.relations
    }
}

impl PartialEq for Sense {
    fn eq(&self, other: &Self) -> bool {
        self.sensekey == other.sensekey
    }
}

impl Eq for Sense {}

impl Hash for Sense {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sensekey.hash(state);
    }
}

impl PartialOrd for Sense {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sense {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sensekey.cmp(&other.sensekey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_id_number() {
        let sense = Sense::new("jest%2:32:01::", LexId(0), Category::V, 0, "00855315-v");
        assert_eq!(sense.lex_id_number().unwrap(), 1);

        let bad = Sense::new("jest", LexId(0), Category::V, 0, "00855315-v");
        assert!(matches!(
            bad.lex_id_number(),
            Err(ModelError::InvalidSensekey(_))
        ));
    }

    #[test]
    fn test_identity_is_sensekey() {
        let a = Sense::new("earth%1:15:00::", LexId(0), Category::N, 0, "09334396-n");
        let b = Sense::new("earth%1:15:00::", LexId(1), Category::N, 3, "other")
            .with_example("ignored");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_relation_helpers() {
        let mut sense = Sense::new("a%1:00:00::", LexId(0), Category::N, 0, "1-n")
            .with_relation("domain_topic", "b%1:00:00::");
        assert!(sense.has_relation("domain_topic", "b%1:00:00::"));
        assert!(!sense.add_relation("domain_topic", "b%1:00:00::"));
        assert!(sense.add_relation("domain_topic", "c%1:00:00::"));
        assert_eq!(sense.targets("domain_topic").count(), 2);
        assert_eq!(sense.targets("antonym").count(), 0);
    }

    #[test]
    fn test_adj_position_tags() {
        for pos in [
            AdjPosition::Attributive,
            AdjPosition::ImmediatePostnominal,
            AdjPosition::Predicative,
        ] {
            assert_eq!(AdjPosition::from_tag(pos.tag()), Some(pos));
        }
        assert_eq!(AdjPosition::from_tag("x"), None);
    }
}
