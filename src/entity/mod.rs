//! Entity model: lexes, senses, synsets and the value types they carry.

mod category;
mod lex;
mod pronunciation;
mod relations;
mod sense;
mod synset;

pub use category::Category;
pub use lex::{Lex, LexId};
pub use pronunciation::{Pronunciation, PronunciationSet};
pub use relations::{Related, Relations};
pub use sense::{AdjPosition, Sense, TagCount};
pub use synset::Synset;
