//! Error types for the lexical model.

use thiserror::Error;

/// The main error type for model building and lookup.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A single-valued key resolved to zero or several lexes.
    #[error("Key {key} resolved to {matches} entries, expected exactly one")]
    NotFound {
        /// Display form of the key.
        key: String,
        /// Number of entries that matched.
        matches: usize,
    },

    /// Two entities share an id under a strict collision policy.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// Entity kind ("sense" or "synset").
        kind: &'static str,
        /// The colliding id.
        id: String,
    },

    /// An inverse edge already exists under a strict edge policy.
    #[error("Duplicate {relation} edge: {source_id} -> {target_id}")]
    DuplicateEdge {
        /// Relation name of the edge.
        relation: String,
        /// Entity holding the edge.
        source_id: String,
        /// Entity the edge points to.
        target_id: String,
    },

    /// The model breaks one of its structural invariants.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Unknown lexical category character.
    #[error("Invalid category: {0:?}")]
    InvalidCategory(char),

    /// Malformed type/discriminant code.
    #[error("Invalid lex code: {0:?}")]
    InvalidCode(String),

    /// Malformed sensekey.
    #[error("Invalid sensekey: {0:?}")]
    InvalidSensekey(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid model file or buffer.
    #[error("Invalid model format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

impl From<bincode::Error> for ModelError {
    fn from(err: bincode::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}
