//! Id-keyed index with explicit collision handling.

use crate::config::CollisionPolicy;
use crate::error::{ModelError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Sorted map from entity id to arena position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdIndex {
    positions: BTreeMap<String, usize>,
}

impl IdIndex {
    /// Folds `items` into an index under `policy`, then compacts them.
    ///
    /// Returns the surviving items in id order together with the index
    /// pointing into that vector. `is_cased` is only consulted under
    /// [`CollisionPolicy::PreferCased`]; `kind` names the entity in errors
    /// and logs.
    pub fn build<T, I, C>(
        items: Vec<T>,
        id_of: I,
        is_cased: C,
        policy: CollisionPolicy,
        kind: &'static str,
    ) -> Result<(Vec<T>, Self)>
    where
        I: Fn(&T) -> &str,
        C: Fn(&T) -> bool,
    {
        let mut winners: BTreeMap<String, usize> = BTreeMap::new();

        for (position, item) in items.iter().enumerate() {
            match winners.entry(id_of(item).to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(mut slot) => {
                    let existing = &items[*slot.get()];
                    let replace = match policy {
                        CollisionPolicy::KeepFirst => false,
                        CollisionPolicy::KeepLast => true,
                        CollisionPolicy::PreferCased => is_cased(item) && !is_cased(existing),
                        CollisionPolicy::Strict => {
                            return Err(ModelError::DuplicateId {
                                kind,
                                id: slot.key().clone(),
                            });
                        }
                    };
                    debug!(
                        "Duplicate {} id {}: keeping {} entry",
                        kind,
                        slot.key(),
                        if replace { "new" } else { "existing" }
                    );
                    if replace {
                        slot.insert(position);
                    }
                }
            }
        }

        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let mut compacted = Vec::with_capacity(winners.len());
        let mut positions = BTreeMap::new();
        for (id, position) in winners {
            if let Some(item) = slots[position].take() {
                positions.insert(id, compacted.len());
                compacted.push(item);
            }
        }

        Ok((compacted, Self { positions }))
    }

    /// Position of the entity with this id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Returns true if the id is indexed.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Iterates ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    /// Iterates (id, position) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.positions.iter().map(|(id, &pos)| (id.as_str(), pos))
    }

    /// Returns the number of indexed ids.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Checks if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<(&'static str, &'static str)> {
        vec![
            ("earth%1:15:00::", "earth"),
            ("sun%1:17:00::", "sun"),
            ("earth%1:15:00::", "Earth"),
        ]
    }

    fn build(policy: CollisionPolicy) -> Result<(Vec<(&'static str, &'static str)>, IdIndex)> {
        IdIndex::build(
            entries(),
            |e| e.0,
            |e| e.1.chars().any(char::is_uppercase),
            policy,
            "sense",
        )
    }

    #[test]
    fn test_compacted_in_id_order() {
        let (items, index) = build(CollisionPolicy::KeepFirst).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(index.len(), 2);
        assert_eq!(index.ids().collect::<Vec<_>>(), vec!["earth%1:15:00::", "sun%1:17:00::"]);
        assert_eq!(items[index.get("sun%1:17:00::").unwrap()].1, "sun");
    }

    #[test]
    fn test_keep_first_and_last() {
        let (items, index) = build(CollisionPolicy::KeepFirst).unwrap();
        assert_eq!(items[index.get("earth%1:15:00::").unwrap()].1, "earth");

        let (items, index) = build(CollisionPolicy::KeepLast).unwrap();
        assert_eq!(items[index.get("earth%1:15:00::").unwrap()].1, "Earth");
    }

    #[test]
    fn test_prefer_cased() {
        let (items, index) = build(CollisionPolicy::PreferCased).unwrap();
        assert_eq!(items[index.get("earth%1:15:00::").unwrap()].1, "Earth");

        // both uncased: first one stays
        let (items, index) = IdIndex::build(
            vec![("k", "first"), ("k", "second")],
            |e| e.0,
            |_| false,
            CollisionPolicy::PreferCased,
            "synset",
        )
        .unwrap();
        assert_eq!(items[index.get("k").unwrap()].1, "first");
    }

    #[test]
    fn test_strict() {
        let err = build(CollisionPolicy::Strict).unwrap_err();
        match err {
            ModelError::DuplicateId { kind, id } => {
                assert_eq!(kind, "sense");
                assert_eq!(id, "earth%1:15:00::");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_id() {
        let (_, index) = build(CollisionPolicy::KeepFirst).unwrap();
        assert_eq!(index.get("moon%1:17:00::"), None);
        assert!(!index.contains("moon%1:17:00::"));
    }
}
