//! Inverse relation generation.
//!
//! Explicit relations are stored in one direction only (a synset knows its
//! hypernym, not its hyponyms). The generator adds the missing half: for
//! every edge `(E, type, T)` whose type has an inverse, it adds
//! `(T, inverse, E)`.
//!
//! The pass runs in two phases. New edges are first collected from an
//! immutable view of the entities, then applied by a single writer.

use crate::config::{DuplicateEdgePolicy, InverseConfig};
use crate::entity::{Related, Sense, Synset};
use crate::error::{ModelError, Result};
use crate::index::IdIndex;
use log::warn;

/// Invertible synset relations, as (explicit, inverse) pairs.
pub const SYNSET_INVERSES: &[(&str, &str)] = &[
    ("hypernym", "hyponym"),
    ("instance_hypernym", "instance_hyponym"),
    ("mero_part", "holo_part"),
    ("mero_member", "holo_member"),
    ("mero_substance", "holo_substance"),
    ("causes", "is_caused_by"),
    ("entails", "is_entailed_by"),
    ("exemplifies", "is_exemplified_by"),
    ("domain_topic", "has_domain_topic"),
    ("domain_region", "has_domain_region"),
];

/// Invertible sense relations, as (explicit, inverse) pairs.
pub const SENSE_INVERSES: &[(&str, &str)] = &[
    ("exemplifies", "is_exemplified_by"),
    ("domain_topic", "has_domain_topic"),
    ("domain_region", "has_domain_region"),
];

/// A pending edge: target position, relation, source id.
type Edge = (usize, String, String);

/// Closes synset and sense relation graphs under a table of inverses.
#[derive(Debug, Clone)]
pub struct InverseRelationGenerator {
    synset_table: Vec<(String, String)>,
    sense_table: Vec<(String, String)>,
    policy: DuplicateEdgePolicy,
}

impl Default for InverseRelationGenerator {
    fn default() -> Self {
        Self::new(DuplicateEdgePolicy::default())
    }
}

impl InverseRelationGenerator {
    /// Creates a generator over the standard tables.
    pub fn new(policy: DuplicateEdgePolicy) -> Self {
        Self::with_tables(SYNSET_INVERSES, SENSE_INVERSES, policy)
    }

    /// Creates a generator over caller-supplied tables.
    pub fn with_tables(
        synset_table: &[(&str, &str)],
        sense_table: &[(&str, &str)],
        policy: DuplicateEdgePolicy,
    ) -> Self {
        Self {
            synset_table: owned_table(synset_table),
            sense_table: owned_table(sense_table),
            policy,
        }
    }

    /// Creates a generator from configuration.
    pub fn from_config(config: &InverseConfig) -> Self {
        Self::new(config.duplicate_edge)
    }

    /// Returns the duplicate edge policy.
    pub fn policy(&self) -> DuplicateEdgePolicy {
        self.policy
    }

    /// Inverse of a synset relation, if it has one.
    pub fn synset_inverse(&self, relation: &str) -> Option<&str> {
        lookup(&self.synset_table, relation)
    }

    /// Inverse of a sense relation, if it has one.
    pub fn sense_inverse(&self, relation: &str) -> Option<&str> {
        lookup(&self.sense_table, relation)
    }

    /// Adds inverse synset edges. `index` maps synset ids to positions in
    /// `synsets`. Returns the number of edges added.
    pub fn close_synsets(&self, synsets: &mut [Synset], index: &IdIndex) -> Result<usize> {
        self.close(synsets, index, &self.synset_table)
    }

    /// Adds inverse sense edges. `index` maps sensekeys to positions in
    /// `senses`. Returns the number of edges added.
    pub fn close_senses(&self, senses: &mut [Sense], index: &IdIndex) -> Result<usize> {
        self.close(senses, index, &self.sense_table)
    }

    fn close<T: Related>(
        &self,
        items: &mut [T],
        index: &IdIndex,
        table: &[(String, String)],
    ) -> Result<usize> {
        let edges = collect_edges(items, index, table)?;

        let mut added = 0;
        for (target, relation, source) in edges {
            let entity = &mut items[target];
            if entity.add_relation(&relation, &source) {
                added += 1;
                continue;
            }
            match self.policy {
                DuplicateEdgePolicy::Skip => {}
                DuplicateEdgePolicy::Warn => {
                    warn!("{} -{}-> {} already present", entity.id(), relation, source);
                }
                DuplicateEdgePolicy::Strict => {
                    return Err(ModelError::DuplicateEdge {
                        relation,
                        source_id: entity.id().to_string(),
                        target_id: source,
                    });
                }
            }
        }
        Ok(added)
    }
}

fn owned_table(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(rel, inv)| (rel.to_string(), inv.to_string()))
        .collect()
}

fn lookup<'a>(table: &'a [(String, String)], relation: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(rel, _)| rel == relation)
        .map(|(_, inv)| inv.as_str())
}

fn collect_edges<T: Related>(
    items: &[T],
    index: &IdIndex,
    table: &[(String, String)],
) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    for item in items {
        for (relation, inverse) in table {
            for target_id in item.targets(relation) {
                let target = index.get(target_id).ok_or_else(|| {
                    ModelError::InvariantViolation(format!(
                        "{} -{}-> {}: target not found",
                        item.id(),
                        relation,
                        target_id
                    ))
                })?;
                edges.push((target, inverse.clone(), item.id().to_string()));
            }
        }
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollisionPolicy;
    use crate::entity::Category;

    fn synsets() -> (Vec<Synset>, IdIndex) {
        let items = vec![
            Synset::new("n001", Category::N, "animal", vec!["dog".into()])
                .with_relation("hypernym", "n002"),
            Synset::new("n002", Category::N, "animal", vec!["canine".into()]),
        ];
        IdIndex::build(
            items,
            |s| s.id.as_str(),
            |_| false,
            CollisionPolicy::Strict,
            "synset",
        )
        .unwrap()
    }

    #[test]
    fn test_adds_inverse() {
        let (mut items, index) = synsets();
        let added = InverseRelationGenerator::default()
            .close_synsets(&mut items, &index)
            .unwrap();

        assert_eq!(added, 1);
        let canine = &items[index.get("n002").unwrap()];
        assert!(canine.has_relation("hyponym", "n001"));
    }

    #[test]
    fn test_skip_is_idempotent() {
        let (mut items, index) = synsets();
        let generator = InverseRelationGenerator::new(DuplicateEdgePolicy::Skip);
        assert_eq!(generator.close_synsets(&mut items, &index).unwrap(), 1);
        assert_eq!(generator.close_synsets(&mut items, &index).unwrap(), 0);
    }

    #[test]
    fn test_warn_skips() {
        let (mut items, index) = synsets();
        let generator = InverseRelationGenerator::new(DuplicateEdgePolicy::Warn);
        generator.close_synsets(&mut items, &index).unwrap();
        assert_eq!(generator.close_synsets(&mut items, &index).unwrap(), 0);
    }

    #[test]
    fn test_strict_rejects_second_pass() {
        let (mut items, index) = synsets();
        let generator = InverseRelationGenerator::new(DuplicateEdgePolicy::Strict);
        generator.close_synsets(&mut items, &index).unwrap();

        match generator.close_synsets(&mut items, &index) {
            Err(ModelError::DuplicateEdge { relation, source_id, target_id }) => {
                assert_eq!(relation, "hyponym");
                assert_eq!(source_id, "n002");
                assert_eq!(target_id, "n001");
            }
            other => panic!("expected duplicate edge, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_target() {
        let items = vec![Synset::new("n001", Category::N, "animal", vec![])
            .with_relation("hypernym", "n404")];
        let (mut items, index) =
            IdIndex::build(items, |s| s.id.as_str(), |_| false, CollisionPolicy::Strict, "synset").unwrap();

        let err = InverseRelationGenerator::default()
            .close_synsets(&mut items, &index)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvariantViolation(_)));
    }

    #[test]
    fn test_non_invertible_relation_ignored() {
        let items = vec![
            Synset::new("a1", Category::A, "all", vec![]).with_relation("antonym", "a2"),
            Synset::new("a2", Category::A, "all", vec![]),
        ];
        let (mut items, index) =
            IdIndex::build(items, |s| s.id.as_str(), |_| false, CollisionPolicy::Strict, "synset").unwrap();

        let added = InverseRelationGenerator::default()
            .close_synsets(&mut items, &index)
            .unwrap();
        assert_eq!(added, 0);
        assert!(items[1].relations.is_empty());
    }

    #[test]
    fn test_custom_table() {
        let items = vec![
            Synset::new("v1", Category::V, "motion", vec![]).with_relation("also", "v2"),
            Synset::new("v2", Category::V, "motion", vec![]),
        ];
        let (mut items, index) =
            IdIndex::build(items, |s| s.id.as_str(), |_| false, CollisionPolicy::Strict, "synset").unwrap();

        let generator = InverseRelationGenerator::with_tables(
            &[("also", "also")],
            SENSE_INVERSES,
            DuplicateEdgePolicy::Strict,
        );
        assert_eq!(generator.synset_inverse("also"), Some("also"));
        assert_eq!(generator.synset_inverse("hypernym"), None);
        assert_eq!(generator.close_synsets(&mut items, &index).unwrap(), 1);
        assert!(items[1].has_relation("also", "v1"));
    }

    #[test]
    fn test_sense_table() {
        let generator = InverseRelationGenerator::default();
        assert_eq!(generator.sense_inverse("domain_topic"), Some("has_domain_topic"));
        assert_eq!(generator.sense_inverse("hypernym"), None);
    }
}
