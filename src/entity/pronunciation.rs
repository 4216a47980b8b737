//! Pronunciations and their set form.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A pronunciation, optionally tagged with a regional variety.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pronunciation {
    /// IPA transcription.
    pub value: String,
    /// Regional variety (e.g. "GB", "US").
    pub variety: Option<String>,
}

impl Pronunciation {
    /// Creates a pronunciation without variety.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            variety: None,
        }
    }

    /// Creates a pronunciation for a regional variety.
    pub fn with_variety(value: impl Into<String>, variety: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            variety: Some(variety.into()),
        }
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variety {
            Some(variety) => write!(f, "[{}] /{}/", variety, self.value),
            None => write!(f, "/{}/", self.value),
        }
    }
}

/// Order-insensitive view of a pronunciation list.
///
/// Two lists holding the same pronunciations in any order are equal and
/// hash alike. Ordering puts the empty set first, then smaller sets, then
/// compares the canonical comma-joined form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PronunciationSet(BTreeSet<Pronunciation>);

impl PronunciationSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns true if the set holds no pronunciation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of distinct pronunciations.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds the pronunciation.
    pub fn contains(&self, pronunciation: &Pronunciation) -> bool {
        self.0.contains(pronunciation)
    }

    /// Iterates in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Pronunciation> {
        self.0.iter()
    }

    /// Returns true if the list holds exactly this set's members.
    pub fn matches(&self, pronunciations: &[Pronunciation]) -> bool {
        pronunciations.iter().all(|p| self.0.contains(p))
            && pronunciations.iter().collect::<BTreeSet<_>>().len() == self.0.len()
    }

    fn canonical(&self) -> String {
        self.0
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<&[Pronunciation]> for PronunciationSet {
    fn from(pronunciations: &[Pronunciation]) -> Self {
        Self(pronunciations.iter().cloned().collect())
    }
}

impl FromIterator<Pronunciation> for PronunciationSet {
    fn from_iter<I: IntoIterator<Item = Pronunciation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl PartialOrd for PronunciationSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PronunciationSet {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0 == other.0 {
            return Ordering::Equal;
        }
        match (self.is_empty(), other.is_empty()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        self.len()
            .cmp(&other.len())
            .then_with(|| self.canonical().cmp(&other.canonical()))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl fmt::Display for PronunciationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.canonical())
    }
}
