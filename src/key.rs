//! Identity keys over lexes.
//!
//! A [`Lex`] has no intrinsic equality. Each [`LexKey`] variant picks the
//! fields that make two entries "the same" for one purpose, and knows how
//! to find matching entries in a [`Model`].
//!
//! | Variant | Fields | Resolves to |
//! |---|---|---|
//! | `Deep` | lemma, category, pronunciation set | exactly one lex |
//! | `Shallow` | lemma, category, discriminant | exactly one lex |
//! | `Pos` | lemma, part of speech, pronunciation set | first matching lex |
//! | `IgnoreCase` | lower-cased lemma, category, pronunciation set | all matches |
//! | `Pwn` | lemma, part of speech | all matches |

use crate::entity::{Category, Lex, Pronunciation, PronunciationSet, Sense};
use crate::error::{ModelError, Result};
use crate::finder;
use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five key schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    /// Lemma, category and pronunciations.
    Deep,
    /// Lemma, category and discriminant.
    Shallow,
    /// Lemma, part of speech and pronunciations.
    Pos,
    /// Lower-cased lemma, category and pronunciations.
    IgnoreCase,
    /// Lemma and part of speech.
    Pwn,
}

/// How many lexes a key resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// A single lex.
    Mono,
    /// Any number of lexes.
    Multi,
}

impl KeyKind {
    /// Every key scheme.
    pub const ALL: [KeyKind; 5] = [
        KeyKind::Deep,
        KeyKind::Shallow,
        KeyKind::Pos,
        KeyKind::IgnoreCase,
        KeyKind::Pwn,
    ];

    /// Resolution cardinality of this scheme.
    pub fn cardinality(self) -> Cardinality {
        match self {
            KeyKind::Deep | KeyKind::Shallow | KeyKind::Pos => Cardinality::Mono,
            KeyKind::IgnoreCase | KeyKind::Pwn => Cardinality::Multi,
        }
    }
}

/// An identity key for lexes.
///
/// Equality, hashing and ordering are structural over the fields of each
/// variant. Pronunciations compare as sets, the empty set first; a missing
/// discriminant sorts before any present one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LexKey {
    /// Lemma, category and pronunciation set.
    Deep {
        /// Case-sensitive lemma.
        lemma: String,
        /// Category.
        category: Category,
        /// Pronunciations.
        pronunciations: PronunciationSet,
    },
    /// Lemma, category and discriminant.
    Shallow {
        /// Case-sensitive lemma.
        lemma: String,
        /// Category.
        category: Category,
        /// Homograph discriminant.
        discriminant: Option<String>,
    },
    /// Lemma, part of speech and pronunciation set.
    Pos {
        /// Case-sensitive lemma.
        lemma: String,
        /// Part of speech, never `S`.
        pos: Category,
        /// Pronunciations.
        pronunciations: PronunciationSet,
    },
    /// Lower-cased lemma, category and pronunciation set.
    IgnoreCase {
        /// Lower-cased lemma.
        lc_lemma: String,
        /// Category.
        category: Category,
        /// Pronunciations.
        pronunciations: PronunciationSet,
    },
    /// Lemma and part of speech.
    Pwn {
        /// Case-sensitive lemma.
        lemma: String,
        /// Part of speech, never `S`.
        pos: Category,
    },
}

/// Lexes a key resolved to.
#[derive(Debug, Clone)]
pub enum Resolution<'a> {
    /// The single lex of a mono-valued key.
    Mono(&'a Lex),
    /// All lexes of a multi-valued key, possibly none.
    Multi(Vec<&'a Lex>),
}

impl<'a> Resolution<'a> {
    /// The single lex, if this is a mono resolution.
    pub fn mono(&self) -> Option<&'a Lex> {
        match self {
            Resolution::Mono(lex) => Some(*lex),
            Resolution::Multi(_) => None,
        }
    }

    /// Number of lexes resolved.
    pub fn len(&self) -> usize {
        match self {
            Resolution::Mono(_) => 1,
            Resolution::Multi(lexes) => lexes.len(),
        }
    }

    /// Returns true if nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All resolved lexes.
    pub fn into_vec(self) -> Vec<&'a Lex> {
        match self {
            Resolution::Mono(lex) => vec![lex],
            Resolution::Multi(lexes) => lexes,
        }
    }
}

impl LexKey {
    /// Deep key from explicit fields.
    pub fn deep<P>(lemma: impl Into<String>, category: Category, pronunciations: P) -> Self
    where
        P: IntoIterator<Item = Pronunciation>,
    {
        LexKey::Deep {
            lemma: lemma.into(),
            category,
            pronunciations: pronunciations.into_iter().collect(),
        }
    }

    /// Shallow key from explicit fields.
    pub fn shallow(
        lemma: impl Into<String>,
        category: Category,
        discriminant: Option<&str>,
    ) -> Self {
        LexKey::Shallow {
            lemma: lemma.into(),
            category,
            discriminant: discriminant.map(str::to_string),
        }
    }

    /// Part-of-speech key from explicit fields. `S` is folded into `A`.
    pub fn pos<P>(lemma: impl Into<String>, category: Category, pronunciations: P) -> Self
    where
        P: IntoIterator<Item = Pronunciation>,
    {
        LexKey::Pos {
            lemma: lemma.into(),
            pos: category.part_of_speech(),
            pronunciations: pronunciations.into_iter().collect(),
        }
    }

    /// Case-insensitive key from explicit fields. The lemma is lower-cased.
    pub fn ignore_case<P>(lemma: &str, category: Category, pronunciations: P) -> Self
    where
        P: IntoIterator<Item = Pronunciation>,
    {
        LexKey::IgnoreCase {
            lc_lemma: lemma.to_lowercase(),
            category,
            pronunciations: pronunciations.into_iter().collect(),
        }
    }

    /// Princeton-style key from explicit fields. `S` is folded into `A`.
    pub fn pwn(lemma: impl Into<String>, category: Category) -> Self {
        LexKey::Pwn {
            lemma: lemma.into(),
            pos: category.part_of_speech(),
        }
    }

    /// Key of a lex under one scheme.
    pub fn of(kind: KeyKind, lex: &Lex) -> Self {
        let prons = || lex.pronunciations.iter().cloned();
        match kind {
            KeyKind::Deep => Self::deep(lex.lemma.as_str(), lex.category, prons()),
            KeyKind::Shallow => {
                Self::shallow(lex.lemma.as_str(), lex.category, lex.discriminant.as_deref())
            }
            KeyKind::Pos => Self::pos(lex.lemma.as_str(), lex.category, prons()),
            KeyKind::IgnoreCase => Self::ignore_case(&lex.lemma, lex.category, prons()),
            KeyKind::Pwn => Self::pwn(lex.lemma.as_str(), lex.category),
        }
    }

    /// Key of a sense's owning lex under one scheme.
    pub fn of_sense(kind: KeyKind, sense: &Sense, model: &Model) -> Result<Self> {
        let lex = model.lex_of(sense).ok_or_else(|| {
            ModelError::InvariantViolation(format!(
                "sense {} has no owning lex in this model",
                sense.sensekey
            ))
        })?;
        Ok(Self::of(kind, lex))
    }

    /// Scheme of this key.
    pub fn kind(&self) -> KeyKind {
        match self {
            LexKey::Deep { .. } => KeyKind::Deep,
            LexKey::Shallow { .. } => KeyKind::Shallow,
            LexKey::Pos { .. } => KeyKind::Pos,
            LexKey::IgnoreCase { .. } => KeyKind::IgnoreCase,
            LexKey::Pwn { .. } => KeyKind::Pwn,
        }
    }

    /// Resolution cardinality of this key.
    pub fn cardinality(&self) -> Cardinality {
        self.kind().cardinality()
    }

    /// Returns true if the lex has this key.
    pub fn matches(&self, lex: &Lex) -> bool {
        *self == Self::of(self.kind(), lex)
    }

    /// Finds the lexes carrying this key.
    ///
    /// `Deep` and `Shallow` fail with [`ModelError::NotFound`] unless
    /// exactly one lex matches; `Pos` fails only when none does. The
    /// multi-valued schemes never fail and may resolve to nothing.
    pub fn resolve<'a>(&self, model: &'a Model) -> Result<Resolution<'a>> {
        match self {
            LexKey::Deep {
                lemma,
                category,
                pronunciations,
            } => {
                let found: Vec<&Lex> = finder::having_pronunciations(
                    finder::lexes_having_type(model, lemma, *category),
                    pronunciations,
                )
                .collect();
                self.exactly_one(found)
            }
            LexKey::Shallow {
                lemma,
                category,
                discriminant,
            } => {
                let found: Vec<&Lex> = finder::having_discriminant(
                    finder::lexes_having_type(model, lemma, *category),
                    discriminant.as_deref(),
                )
                .collect();
                self.exactly_one(found)
            }
            LexKey::Pos {
                lemma,
                pos,
                pronunciations,
            } => finder::having_pronunciations(
                finder::lexes_having_pos(model, lemma, *pos),
                pronunciations,
            )
            .next()
            .map(Resolution::Mono)
            .ok_or_else(|| self.not_found(0)),
            LexKey::IgnoreCase {
                lc_lemma,
                category,
                pronunciations,
            } => Ok(Resolution::Multi(
                finder::having_pronunciations(
                    finder::lc_lexes_having_type(model, lc_lemma, *category),
                    pronunciations,
                )
                .collect(),
            )),
            LexKey::Pwn { lemma, pos } => Ok(Resolution::Multi(
                finder::lexes_having_pos(model, lemma, *pos).collect(),
            )),
        }
    }

    fn exactly_one<'a>(&self, found: Vec<&'a Lex>) -> Result<Resolution<'a>> {
        match found.as_slice() {
            [lex] => Ok(Resolution::Mono(*lex)),
            other => Err(self.not_found(other.len())),
        }
    }

    fn not_found(&self, matches: usize) -> ModelError {
        ModelError::NotFound {
            key: self.to_string(),
            matches,
        }
    }
}

impl fmt::Display for LexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexKey::Deep {
                lemma,
                category,
                pronunciations,
            } => write!(f, "deep({}, {}, {})", lemma, category, pronunciations),
            LexKey::Shallow {
                lemma,
                category,
                discriminant,
            } => write!(
                f,
                "shallow({}, {}{})",
                lemma,
                category,
                discriminant.as_deref().unwrap_or("")
            ),
            LexKey::Pos {
                lemma,
                pos,
                pronunciations,
            } => write!(f, "pos({}, {}, {})", lemma, pos, pronunciations),
            LexKey::IgnoreCase {
                lc_lemma,
                category,
                pronunciations,
            } => write!(f, "ic({}, {}, {})", lc_lemma, category, pronunciations),
            LexKey::Pwn { lemma, pos } => write!(f, "pwn({}, {})", lemma, pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    fn mobile(order: &[usize]) -> Lex {
        let all = [
            Pronunciation::with_variety("ˈməʊbaɪl", "GB"),
            Pronunciation::with_variety("ˈmoʊbəl", "US"),
            Pronunciation::with_variety("ˈmoʊbil", "US"),
        ];
        Lex::new("mobile", Category::N)
            .with_pronunciations(order.iter().map(|&i| all[i].clone()).collect())
    }

    #[test]
    fn test_deep_ignores_pronunciation_order() {
        let a = LexKey::of(KeyKind::Deep, &mobile(&[0, 1, 2]));
        let b = LexKey::of(KeyKind::Deep, &mobile(&[2, 0, 1]));
        assert_eq!(a, b);

        let set: HashSet<LexKey> = [a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 1);

        let fewer = LexKey::of(KeyKind::Deep, &mobile(&[0, 1]));
        assert_ne!(a, fewer);
    }

    #[test]
    fn test_shallow_ignores_pronunciations() {
        let a = LexKey::of(KeyKind::Shallow, &mobile(&[0]));
        let b = LexKey::of(KeyKind::Shallow, &mobile(&[1, 2]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ignore_case() {
        let upper = LexKey::of(KeyKind::IgnoreCase, &Lex::new("Earth", Category::N));
        let lower = LexKey::of(KeyKind::IgnoreCase, &Lex::new("earth", Category::N));
        assert_eq!(upper, lower);
        assert_eq!(lower, LexKey::ignore_case("EARTH", Category::N, Vec::new()));

        let deep_upper = LexKey::of(KeyKind::Deep, &Lex::new("Earth", Category::N));
        let deep_lower = LexKey::of(KeyKind::Deep, &Lex::new("earth", Category::N));
        assert_ne!(deep_upper, deep_lower);
    }

    #[test]
    fn test_pos_merges_satellite() {
        let a = LexKey::of(KeyKind::Pos, &Lex::new("critical", Category::A));
        let s = LexKey::of(KeyKind::Pos, &Lex::new("critical", Category::S));
        assert_eq!(a, s);

        let deep_a = LexKey::of(KeyKind::Deep, &Lex::new("critical", Category::A));
        let deep_s = LexKey::of(KeyKind::Deep, &Lex::new("critical", Category::S));
        assert_ne!(deep_a, deep_s);
    }

    #[test]
    fn test_pwn_ignores_pronunciations() {
        let a = LexKey::of(KeyKind::Pwn, &mobile(&[0]));
        let b = LexKey::of(KeyKind::Pwn, &mobile(&[]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordering() {
        let keys: BTreeSet<LexKey> = [
            LexKey::shallow("row", Category::N, Some("-2")),
            LexKey::shallow("row", Category::N, Some("-1")),
            LexKey::shallow("row", Category::N, None),
        ]
        .into_iter()
        .collect();
        let discriminants: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            discriminants,
            vec!["shallow(row, n)", "shallow(row, n-1)", "shallow(row, n-2)"]
        );

        let empty = LexKey::deep("row", Category::N, Vec::new());
        let some = LexKey::deep("row", Category::N, [Pronunciation::new("ɹəʊ")]);
        assert!(empty < some);
    }

    #[test]
    fn test_kind_and_cardinality() {
        for kind in KeyKind::ALL {
            let key = LexKey::of(kind, &mobile(&[0]));
            assert_eq!(key.kind(), kind);
            assert!(key.matches(&mobile(&[0])));
        }
        assert_eq!(KeyKind::Deep.cardinality(), Cardinality::Mono);
        assert_eq!(KeyKind::Pos.cardinality(), Cardinality::Mono);
        assert_eq!(KeyKind::IgnoreCase.cardinality(), Cardinality::Multi);
        assert_eq!(KeyKind::Pwn.cardinality(), Cardinality::Multi);
    }

    #[test]
    fn test_display() {
        let key = LexKey::deep("row", Category::N, [Pronunciation::new("ɹəʊ")]);
        assert_eq!(key.to_string(), "deep(row, n, {/ɹəʊ/})");
        assert_eq!(LexKey::pwn("critical", Category::S).to_string(), "pwn(critical, a)");
    }
}
