//! Lexical categories.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category of a lex, sense or synset.
///
/// Ordering follows the one-letter codes: a < n < r < s < v.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Adjective (`a`).
    A,
    /// Noun (`n`).
    N,
    /// Adverb (`r`).
    R,
    /// Adjective satellite (`s`).
    S,
    /// Verb (`v`).
    V,
}

impl Category {
    /// Parses a one-letter category code.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'a' => Ok(Category::A),
            'n' => Ok(Category::N),
            'r' => Ok(Category::R),
            's' => Ok(Category::S),
            'v' => Ok(Category::V),
            other => Err(ModelError::InvalidCategory(other)),
        }
    }

    /// Returns the one-letter code.
    pub fn as_char(self) -> char {
        match self {
            Category::A => 'a',
            Category::N => 'n',
            Category::R => 'r',
            Category::S => 's',
            Category::V => 'v',
        }
    }

    /// Returns the part of speech: satellites fold into adjectives.
    #[inline]
    pub fn part_of_speech(self) -> Self {
        match self {
            Category::S => Category::A,
            other => other,
        }
    }

    /// Returns true for adjective satellites.
    #[inline]
    pub fn is_satellite(self) -> bool {
        self == Category::S
    }

    /// Lexicographer file prefix for this part of speech.
    pub fn lexfile_prefix(self) -> &'static str {
        match self.part_of_speech() {
            Category::N => "noun",
            Category::V => "verb",
            Category::R => "adv",
            _ => "adj",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for c in ['a', 'n', 'r', 's', 'v'] {
            assert_eq!(Category::from_char(c).unwrap().as_char(), c);
        }
        assert!(matches!(
            Category::from_char('x'),
            Err(ModelError::InvalidCategory('x'))
        ));
    }

    #[test]
    fn test_part_of_speech() {
        assert_eq!(Category::S.part_of_speech(), Category::A);
        assert_eq!(Category::A.part_of_speech(), Category::A);
        assert_eq!(Category::V.part_of_speech(), Category::V);
        assert!(Category::S.is_satellite());
    }

    #[test]
    fn test_ordering() {
        let mut cats = vec![Category::V, Category::S, Category::A, Category::R, Category::N];
        cats.sort();
        let codes: String = cats.iter().map(|c| c.as_char()).collect();
        assert_eq!(codes, "anrsv");
    }
}
