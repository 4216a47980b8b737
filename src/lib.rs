//! # Lexicore - Lexical Model Core
//!
//! Lexicore turns flat collections of lexical entries, senses and synsets
//! into an immutable, indexed model, and closes the relation graph by
//! generating inverse relations.
//!
//! ## Overview
//!
//! A [`Lex`] is one written form in one category. It deliberately has no
//! equality: the five [`LexKey`] schemes each decide which fields make two
//! entries the same, and resolve against a [`Model`] to one or many lexes.
//!
//! ## Key Features
//!
//! - **Two-phase build**: a mutable [`ModelBuilder`] produces a frozen,
//!   thread-safe [`Model`]
//! - **Explicit collision policies** for duplicate sensekeys and synset ids
//! - **Lemma indices** by exact and lower-cased lemma
//! - **Inverse relation closure** for synsets and senses
//! - **Binary format** for persistence
//!
//! ## Quick Start
//!
//! ```rust
//! use lexicore::{Category, KeyKind, Lex, LexKey, ModelBuilder, Pronunciation, Sense, Synset};
//!
//! let mut builder = ModelBuilder::default();
//! let row = builder.add_lex(
//!     Lex::from_code("row", "n-1")?.with_pronunciations(vec![Pronunciation::new("ɹəʊ")]),
//! );
//! builder.add_sense(Sense::new("row%1:14:00::", row, Category::N, 0, "08456176-n"))?;
//! builder.add_synset(Synset::new("08456176-n", Category::N, "group", vec!["row".into()]));
//! let model = builder.build()?;
//!
//! let key = LexKey::of(KeyKind::Deep, &model.lexes()[0]);
//! let lex = key.resolve(&model)?.mono().unwrap();
//! assert_eq!(lex.code(), "n-1");
//! # Ok::<(), lexicore::ModelError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`entity`] - Lexes, senses, synsets and their value types
//! - [`key`] - Lex identity keys
//! - [`index`] - Id and lemma indices
//! - [`finder`] - Lemma lookup and filters
//! - [`inverse`] - Inverse relation generation
//! - [`model`] - Builder and frozen model
//! - [`storage`] - Binary format and persistence
//! - [`grouping`], [`order`] - Derived groupings and lemma orders

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod entity;
pub mod error;
pub mod finder;
pub mod grouping;
pub mod index;
pub mod inverse;
pub mod key;
pub mod model;
pub mod order;
pub mod storage;

// Re-export commonly used types
pub use config::{CollisionPolicy, Config, DuplicateEdgePolicy, IndexConfig, InverseConfig};
pub use entity::{
    AdjPosition, Category, Lex, LexId, Pronunciation, PronunciationSet, Related, Relations, Sense,
    Synset, TagCount,
};
pub use error::{ModelError, Result};
pub use index::{IdIndex, LemmaIndex};
pub use inverse::InverseRelationGenerator;
pub use key::{Cardinality, KeyKind, LexKey, Resolution};
pub use model::{Model, ModelBuilder};
pub use storage::{deserialize, serialize, ModelFormat, ModelHeader};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_model_is_send_sync() {
        assert_send_sync::<Model>();
    }
}
