//! Two-phase model construction.
//!
//! Entities are added to a [`ModelBuilder`], which is the only mutable
//! phase. [`ModelBuilder::build`] then runs, in order: id indexing, the
//! verb template and tag count pass, inverse relation closure, lemma
//! indexing and member validation, and returns a frozen [`Model`].

use crate::config::Config;
use crate::entity::{Lex, LexId, Sense, Synset, TagCount};
use crate::error::{ModelError, Result};
use crate::index::{IdIndex, LemmaIndex};
use crate::inverse::InverseRelationGenerator;
use crate::model::Model;
use log::{debug, info};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Collects entities and builds a [`Model`].
pub struct ModelBuilder {
    config: Config,
    lexes: Vec<Lex>,
    senses: Vec<Sense>,
    synsets: Vec<Synset>,
    verb_templates: BTreeMap<String, Vec<u32>>,
    tag_counts: BTreeMap<String, TagCount>,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ModelBuilder {
    /// Creates an empty builder.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            lexes: Vec::new(),
            senses: Vec::new(),
            synsets: Vec::new(),
            verb_templates: BTreeMap::new(),
            tag_counts: BTreeMap::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds a lex and returns its id. Any senses already listed on the lex
    /// are dropped: senses are attached through [`add_sense`](Self::add_sense).
    pub fn add_lex(&mut self, mut lex: Lex) -> LexId {
        lex.senses.clear();
        let id = LexId(self.lexes.len() as u32);
        self.lexes.push(lex);
        id
    }

    /// Adds a sense to its owning lex.
    ///
    /// The owning lex must exist and `index_in_lex` must equal the number of
    /// senses it already has.
    pub fn add_sense(&mut self, sense: Sense) -> Result<()> {
        let lex = self.lexes.get_mut(sense.lex.index()).ok_or_else(|| {
            ModelError::InvariantViolation(format!(
                "sense {} refers to unknown lex {}",
                sense.sensekey,
                sense.lex.index()
            ))
        })?;
        if sense.index_in_lex != lex.senses.len() {
            return Err(ModelError::InvariantViolation(format!(
                "sense {} has index {} but {} {} has {} senses",
                sense.sensekey,
                sense.index_in_lex,
                lex.lemma,
                lex.code(),
                lex.senses.len()
            )));
        }
        lex.senses.push(sense.sensekey.clone());
        self.senses.push(sense);
        Ok(())
    }

    /// Adds a synset.
    pub fn add_synset(&mut self, synset: Synset) {
        self.synsets.push(synset);
    }

    /// Sets verb template ids by sensekey, applied during the build.
    pub fn set_verb_templates<I>(&mut self, templates: I)
    where
        I: IntoIterator<Item = (String, Vec<u32>)>,
    {
        self.verb_templates.extend(templates);
    }

    /// Sets tag counts by sensekey, applied during the build.
    pub fn set_tag_counts<I>(&mut self, counts: I)
    where
        I: IntoIterator<Item = (String, TagCount)>,
    {
        self.tag_counts.extend(counts);
    }

    /// Builds the model.
    pub fn build(self) -> Result<Model> {
        let ModelBuilder {
            config,
            lexes,
            senses,
            synsets,
            verb_templates,
            tag_counts,
        } = self;

        info!(
            "Building model from {} lexes, {} senses, {} synsets",
            lexes.len(),
            senses.len(),
            synsets.len()
        );

        let (mut senses, senses_by_id) = IdIndex::build(
            senses,
            |s| s.sensekey.as_str(),
            |s| lexes.get(s.lex.index()).is_some_and(Lex::is_cased),
            config.index.sense_collision,
            "sense",
        )?;
        let (mut synsets, synsets_by_id) = IdIndex::build(
            synsets,
            |s| s.id.as_str(),
            |_| false,
            config.index.synset_collision,
            "synset",
        )?;

        let mut applied = 0;
        for (sensekey, templates) in verb_templates {
            match senses_by_id.get(&sensekey) {
                Some(pos) => {
                    senses[pos].verb_templates = templates;
                    applied += 1;
                }
                None => debug!("Verb templates for unknown sense {}", sensekey),
            }
        }
        for (sensekey, count) in tag_counts {
            match senses_by_id.get(&sensekey) {
                Some(pos) => {
                    senses[pos].tag_count = Some(count);
                    applied += 1;
                }
                None => debug!("Tag count for unknown sense {}", sensekey),
            }
        }
        if applied > 0 {
            info!("Applied {} verb template and tag count entries", applied);
        }

        if config.inverse.generate {
            let generator = InverseRelationGenerator::from_config(&config.inverse);
            let synset_edges = generator.close_synsets(&mut synsets, &synsets_by_id)?;
            let sense_edges = generator.close_senses(&mut senses, &senses_by_id)?;
            info!(
                "Inverse relations: {} synset edges, {} sense edges",
                synset_edges, sense_edges
            );
        }

        let lexes_by_lemma = LemmaIndex::by_lemma(&lexes);
        let lexes_by_lc_lemma = LemmaIndex::by_lc_lemma(&lexes);

        let model = Model {
            lexes,
            senses,
            synsets,
            senses_by_id,
            synsets_by_id,
            lexes_by_lemma,
            lexes_by_lc_lemma,
            inverse_closed: config.inverse.generate,
        };

        if config.index.validate_members {
            model
                .synsets
                .par_iter()
                .try_for_each(|synset| model.synset_senses(synset).map(|_| ()))?;
        }

        info!("Model built: {}", model.info());
        Ok(model)
    }
}
