//! Lexical entries.

use crate::entity::{Category, Pronunciation, PronunciationSet};
use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a [`Lex`] in its model's lex arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LexId(pub(crate) u32);

impl LexId {
    /// Returns the arena position.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A lexical entry: one written form in one category.
///
/// `Lex` has no value equality and cannot be hashed. Which fields make two
/// entries "the same" depends on the use, so comparisons go through an
/// explicit [`LexKey`](crate::LexKey) instead.
///
/// ```compile_fail
/// use lexicore::{Category, Lex};
/// use std::collections::HashSet;
///
/// let mut set = HashSet::new();
/// set.insert(Lex::new("row", Category::N));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lex {
    /// Written form, case preserved.
    pub lemma: String,
    /// Lexical category.
    pub category: Category,
    /// Discriminant between homographs (e.g. "-1").
    pub discriminant: Option<String>,
    /// Pronunciations, compared as a set.
    pub pronunciations: Vec<Pronunciation>,
    /// Inflected forms.
    pub forms: Vec<String>,
    /// Source tag.
    pub source: Option<String>,
    /// Sensekeys in sense order, filled in by the model builder.
    pub(crate) senses: Vec<String>,
}

impl Lex {
    /// Creates a lex with no discriminant, pronunciation or form.
    pub fn new(lemma: impl Into<String>, category: Category) -> Self {
        Self {
            lemma: lemma.into(),
            category,
            discriminant: None,
            pronunciations: Vec::new(),
            forms: Vec::new(),
            source: None,
            senses: Vec::new(),
        }
    }

    /// Creates a lex from a type code such as `"n"` or `"n-1"`.
    ///
    /// The first character is the category, the rest is the discriminant.
    pub fn from_code(lemma: impl Into<String>, code: &str) -> Result<Self> {
        let mut chars = code.chars();
        let first = chars
            .next()
            .ok_or_else(|| ModelError::InvalidCode(code.to_string()))?;
        let category =
            Category::from_char(first).map_err(|_| ModelError::InvalidCode(code.to_string()))?;
        let rest = chars.as_str();

        let mut lex = Self::new(lemma, category);
        if !rest.is_empty() {
            lex.discriminant = Some(rest.to_string());
        }
        Ok(lex)
    }

    /// Sets the discriminant.
    pub fn with_discriminant(mut self, discriminant: impl Into<String>) -> Self {
        self.discriminant = Some(discriminant.into());
        self
    }

    /// Sets the pronunciations.
    pub fn with_pronunciations(mut self, pronunciations: Vec<Pronunciation>) -> Self {
        self.pronunciations = pronunciations;
        self
    }

    /// Sets the inflected forms.
    pub fn with_forms(mut self, forms: Vec<String>) -> Self {
        self.forms = forms;
        self
    }

    /// Sets the source tag.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Part of speech (satellites fold into adjectives).
    #[inline]
    pub fn part_of_speech(&self) -> Category {
        self.category.part_of_speech()
    }

    /// Type code: category followed by the discriminant.
    pub fn code(&self) -> String {
        match &self.discriminant {
            Some(d) => format!("{}{}", self.category, d),
            None => self.category.to_string(),
        }
    }

    /// Lower-cased lemma.
    pub fn lc_lemma(&self) -> String {
        self.lemma.to_lowercase()
    }

    /// Returns true if the lemma differs from its lower-cased form.
    pub fn is_cased(&self) -> bool {
        self.lemma != self.lc_lemma()
    }

    /// Pronunciations as an order-insensitive set.
    pub fn pronunciation_set(&self) -> PronunciationSet {
        PronunciationSet::from(self.pronunciations.as_slice())
    }

    /// Sensekeys of this lex in sense order.
    pub fn senses(&self) -> &[String] {
        &self.senses
    }
}

impl fmt::Display for Lex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lemma, self.code())?;
        for p in &self.pronunciations {
            write!(f, " {}", p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        let lex = Lex::from_code("row", "n-1").unwrap();
        assert_eq!(lex.category, Category::N);
        assert_eq!(lex.discriminant.as_deref(), Some("-1"));
        assert_eq!(lex.code(), "n-1");

        let plain = Lex::from_code("critical", "s").unwrap();
        assert_eq!(plain.category, Category::S);
        assert_eq!(plain.discriminant, None);
        assert_eq!(plain.part_of_speech(), Category::A);

        assert!(matches!(
            Lex::from_code("x", ""),
            Err(ModelError::InvalidCode(_))
        ));
        assert!(matches!(
            Lex::from_code("x", "q-1"),
            Err(ModelError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_casing() {
        assert!(Lex::new("Earth", Category::N).is_cased());
        assert!(!Lex::new("earth", Category::N).is_cased());
        assert_eq!(Lex::new("Earth", Category::N).lc_lemma(), "earth");
    }

    #[test]
    fn test_display() {
        let lex = Lex::new("row", Category::N)
            .with_discriminant("-2")
            .with_pronunciations(vec![Pronunciation::new("ɹaʊ")]);
        assert_eq!(lex.to_string(), "row n-2 /ɹaʊ/");
    }
}
