//! Id-keyed and lemma-keyed indices over the entity arenas.

mod id;
mod lemma;

pub use id::IdIndex;
pub use lemma::LemmaIndex;
