//! Configuration for model building.

use serde::{Deserialize, Serialize};

/// Main configuration for [`ModelBuilder`](crate::ModelBuilder).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Id and lemma index configuration.
    pub index: IndexConfig,

    /// Inverse relation configuration.
    pub inverse: InverseConfig,
}

/// How two entities sharing an id are folded into one index entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Keep the entry seen first.
    KeepFirst,
    /// Keep the entry seen last.
    KeepLast,
    /// Keep the entry whose lex lemma carries upper case.
    /// Falls back to the first entry when neither or both are cased,
    /// and for entities without a lemma.
    PreferCased,
    /// Fail with [`ModelError::DuplicateId`](crate::ModelError::DuplicateId).
    Strict,
}

/// What the inverse pass does with an edge that is already present.
///
/// The pass is idempotent under `Skip`: running it twice adds nothing
/// the second time and reports no error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicateEdgePolicy {
    /// Leave the existing edge and carry on silently.
    #[default]
    Skip,
    /// Log a warning and carry on.
    Warn,
    /// Fail with [`ModelError::DuplicateEdge`](crate::ModelError::DuplicateEdge).
    Strict,
}

/// Index building configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Collision policy for sensekeys.
    /// Default: PreferCased (lemmas "Earth" and "earth" share sensekeys).
    pub sense_collision: CollisionPolicy,

    /// Collision policy for synset ids.
    /// Default: Strict.
    pub synset_collision: CollisionPolicy,

    /// Check that every synset member resolves to exactly one sense of
    /// that synset.
    /// Default: true.
    pub validate_members: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sense_collision: CollisionPolicy::PreferCased,
            synset_collision: CollisionPolicy::Strict,
            validate_members: true,
        }
    }
}

/// Inverse relation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverseConfig {
    /// Generate inverse edges during the build.
    /// Default: true.
    pub generate: bool,

    /// Handling of edges that already exist.
    /// Default: Skip.
    pub duplicate_edge: DuplicateEdgePolicy,
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            generate: true,
            duplicate_edge: DuplicateEdgePolicy::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.index.sense_collision, CollisionPolicy::PreferCased);
        assert_eq!(config.index.synset_collision, CollisionPolicy::Strict);
        assert!(config.index.validate_members);
        assert!(config.inverse.generate);
        assert_eq!(config.inverse.duplicate_edge, DuplicateEdgePolicy::Skip);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.inverse.duplicate_edge = DuplicateEdgePolicy::Strict;
        config.index.sense_collision = CollisionPolicy::KeepLast;

        let bytes = bincode::serialize(&config).unwrap();
        let recovered: Config = bincode::deserialize(&bytes).unwrap();

        assert_eq!(recovered.inverse.duplicate_edge, DuplicateEdgePolicy::Strict);
        assert_eq!(recovered.index.sense_collision, CollisionPolicy::KeepLast);
    }
}
