//! Immutable model: entity arenas plus the indices built over them.

use crate::entity::{Lex, LexId, Sense, Synset};
use crate::error::{ModelError, Result};
use crate::finder;
use crate::index::{IdIndex, LemmaIndex};
use crate::storage::ModelFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A built lexical model.
///
/// Holds only owned, eagerly computed data, so it is `Send + Sync` and can
/// be shared across threads without locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub(crate) lexes: Vec<Lex>,
    pub(crate) senses: Vec<Sense>,
    pub(crate) synsets: Vec<Synset>,
    pub(crate) senses_by_id: IdIndex,
    pub(crate) synsets_by_id: IdIndex,
    pub(crate) lexes_by_lemma: LemmaIndex,
    pub(crate) lexes_by_lc_lemma: LemmaIndex,
    pub(crate) inverse_closed: bool,
}

impl Model {
    /// Lexes in insertion order.
    pub fn lexes(&self) -> &[Lex] {
        &self.lexes
    }

    /// Senses in sensekey order.
    pub fn senses(&self) -> &[Sense] {
        &self.senses
    }

    /// Synsets in id order.
    pub fn synsets(&self) -> &[Synset] {
        &self.synsets
    }

    /// Looks up a lex by arena id.
    pub fn lex(&self, id: LexId) -> Option<&Lex> {
        self.lexes.get(id.index())
    }

    /// Looks up a sense by sensekey.
    pub fn sense(&self, sensekey: &str) -> Option<&Sense> {
        self.senses_by_id
            .get(sensekey)
            .and_then(|pos| self.senses.get(pos))
    }

    /// Looks up a synset by id.
    pub fn synset(&self, synset_id: &str) -> Option<&Synset> {
        self.synsets_by_id
            .get(synset_id)
            .and_then(|pos| self.synsets.get(pos))
    }

    /// Sensekey to sense position.
    pub fn senses_by_id(&self) -> &IdIndex {
        &self.senses_by_id
    }

    /// Synset id to synset position.
    pub fn synsets_by_id(&self) -> &IdIndex {
        &self.synsets_by_id
    }

    /// Exact lemma to lexes.
    pub fn lexes_by_lemma(&self) -> &LemmaIndex {
        &self.lexes_by_lemma
    }

    /// Lower-cased lemma to lexes.
    pub fn lexes_by_lc_lemma(&self) -> &LemmaIndex {
        &self.lexes_by_lc_lemma
    }

    /// Returns true if inverse relations were generated during the build.
    pub fn is_inverse_closed(&self) -> bool {
        self.inverse_closed
    }

    /// Owning lex of a sense.
    pub fn lex_of(&self, sense: &Sense) -> Option<&Lex> {
        self.lex(sense.lex)
    }

    /// Synset of a sense.
    pub fn synset_of(&self, sense: &Sense) -> Option<&Synset> {
        self.synset(&sense.synset_id)
    }

    /// Senses of a lex, in sense order.
    pub fn senses_of<'a>(&'a self, lex: &'a Lex) -> impl Iterator<Item = &'a Sense> + 'a {
        lex.senses().iter().filter_map(move |key| self.sense(key))
    }

    /// Senses of a synset, aligned with its members.
    ///
    /// Each member lemma must resolve, among lexes of the synset's part of
    /// speech, to exactly one sense pointing back at the synset.
    pub fn synset_senses(&self, synset: &Synset) -> Result<Vec<&Sense>> {
        synset
            .members
            .iter()
            .map(|member| self.member_sense(synset, member))
            .collect()
    }

    /// Sense of `lemma` in a synset.
    ///
    /// Returns the first sense, among lexes of the synset's part of speech,
    /// that points at the synset. The lemma need not be a listed member.
    pub fn find_sense_of(&self, synset: &Synset, lemma: &str) -> Option<&Sense> {
        finder::lexes_having_pos(self, lemma, synset.category)
            .flat_map(|lex| self.senses_of(lex))
            .find(|sense| sense.synset_id == synset.id)
    }

    /// Position of a sense's lemma among its synset's members.
    pub fn synset_index_of(&self, sense: &Sense) -> Option<usize> {
        let lemma = &self.lex_of(sense)?.lemma;
        self.synset_of(sense)?.member_index(lemma)
    }

    fn member_sense(&self, synset: &Synset, member: &str) -> Result<&Sense> {
        let mut found: Vec<&Sense> = finder::lexes_having_pos(self, member, synset.category)
            .flat_map(|lex| self.senses_of(lex))
            .filter(|sense| sense.synset_id == synset.id)
            .collect();
        found.sort();
        found.dedup();

        match found.as_slice() {
            [sense] => Ok(*sense),
            other => Err(ModelError::InvariantViolation(format!(
                "member {:?} of synset {} resolves to {} senses",
                member,
                synset.id,
                other.len()
            ))),
        }
    }

    /// Checks that every index position and lex back-reference points
    /// inside the arenas. Decoded models must pass this before use.
    pub(crate) fn check_positions(&self) -> Result<()> {
        let out_of_range = |what: &str, id: &str, pos: usize, len: usize| {
            ModelError::InvalidFormat(format!(
                "{} {} points at position {}, arena holds {}",
                what, id, pos, len
            ))
        };

        for (id, pos) in self.senses_by_id.iter() {
            if pos >= self.senses.len() {
                return Err(out_of_range("sense", id, pos, self.senses.len()));
            }
        }
        for (id, pos) in self.synsets_by_id.iter() {
            if pos >= self.synsets.len() {
                return Err(out_of_range("synset", id, pos, self.synsets.len()));
            }
        }
        for index in [&self.lexes_by_lemma, &self.lexes_by_lc_lemma] {
            for (lemma, ids) in index.iter() {
                if let Some(bad) = ids.iter().find(|id| id.index() >= self.lexes.len()) {
                    return Err(out_of_range("lemma", lemma, bad.index(), self.lexes.len()));
                }
            }
        }
        for sense in &self.senses {
            if sense.lex.index() >= self.lexes.len() {
                return Err(out_of_range(
                    "lex of sense",
                    &sense.sensekey,
                    sense.lex.index(),
                    self.lexes.len(),
                ));
            }
        }
        Ok(())
    }

    /// One-line summary of the model size.
    pub fn info(&self) -> String {
        format!(
            "lexes: {}, senses: {}, synsets: {}",
            self.lexes.len(),
            self.senses.len(),
            self.synsets.len()
        )
    }

    /// Loads a model from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        ModelFormat::read(path)
    }

    /// Saves the model to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        ModelFormat::write(path, self)
    }
}
