//! Lex lookup over a built model.
//!
//! Every function returns a lazy iterator over borrowed lexes in index
//! order. An unknown lemma yields an empty iterator. Filters take any lex
//! iterator, so they compose with the lookups:
//!
//! ```rust,ignore
//! let prons = PronunciationSet::from(lex.pronunciations.as_slice());
//! let found: Vec<&Lex> =
//!     finder::having_pronunciations(finder::lexes_having_type(&model, "row", Category::N), &prons)
//!         .collect();
//! ```

use crate::entity::{Category, Lex, PronunciationSet};
use crate::model::Model;

/// Lexes with exactly this lemma.
pub fn lexes<'a>(model: &'a Model, lemma: &str) -> impl Iterator<Item = &'a Lex> + 'a {
    model
        .lexes_by_lemma()
        .get(lemma)
        .iter()
        .filter_map(move |&id| model.lex(id))
}

/// Lexes with exactly this lemma and category.
pub fn lexes_having_type<'a>(
    model: &'a Model,
    lemma: &str,
    category: Category,
) -> impl Iterator<Item = &'a Lex> + 'a {
    lexes(model, lemma).filter(move |lex| lex.category == category)
}

/// Lexes with exactly this lemma and part of speech (`s` matches `a`).
pub fn lexes_having_pos<'a>(
    model: &'a Model,
    lemma: &str,
    pos: Category,
) -> impl Iterator<Item = &'a Lex> + 'a {
    let pos = pos.part_of_speech();
    lexes(model, lemma).filter(move |lex| lex.part_of_speech() == pos)
}

/// Lexes whose lemma equals this one ignoring case.
pub fn lc_lexes<'a>(model: &'a Model, lemma: &str) -> impl Iterator<Item = &'a Lex> + 'a {
    model
        .lexes_by_lc_lemma()
        .get(&lemma.to_lowercase())
        .iter()
        .filter_map(move |&id| model.lex(id))
}

/// Lexes whose lemma equals this one ignoring case, with this category.
pub fn lc_lexes_having_type<'a>(
    model: &'a Model,
    lemma: &str,
    category: Category,
) -> impl Iterator<Item = &'a Lex> + 'a {
    lc_lexes(model, lemma).filter(move |lex| lex.category == category)
}

/// Lexes whose lemma equals this one ignoring case, with this part of speech.
pub fn lc_lexes_having_pos<'a>(
    model: &'a Model,
    lemma: &str,
    pos: Category,
) -> impl Iterator<Item = &'a Lex> + 'a {
    let pos = pos.part_of_speech();
    lc_lexes(model, lemma).filter(move |lex| lex.part_of_speech() == pos)
}

/// Keeps lexes whose pronunciations form exactly this set.
pub fn having_pronunciations<'a, 'p, I>(
    lexes: I,
    pronunciations: &'p PronunciationSet,
) -> impl Iterator<Item = &'a Lex> + 'p
where
    I: Iterator<Item = &'a Lex> + 'p,
    'a: 'p,
{
    lexes.filter(move |lex| pronunciations.matches(&lex.pronunciations))
}

/// Keeps lexes with this discriminant (`None` matches only `None`).
pub fn having_discriminant<'a, 'd, I>(
    lexes: I,
    discriminant: Option<&'d str>,
) -> impl Iterator<Item = &'a Lex> + 'd
where
    I: Iterator<Item = &'a Lex> + 'd,
    'a: 'd,
{
    lexes.filter(move |lex| lex.discriminant.as_deref() == discriminant)
}
