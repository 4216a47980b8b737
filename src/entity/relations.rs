//! Typed relation maps shared by senses and synsets.

use std::collections::{BTreeMap, BTreeSet};

/// Relation name to the set of target ids.
pub type Relations = BTreeMap<String, BTreeSet<String>>;

/// An entity that owns an id-keyed relation map.
pub trait Related {
    /// Id other entities use to point at this one.
    fn id(&self) -> &str;

    /// Outgoing edges.
    fn relations(&self) -> &Relations;

    /// Mutable outgoing edges.
    fn relations_mut(&mut self) -> &mut Relations;

    /// Targets of one relation, empty when the relation is absent.
    fn targets(&self, relation: &str) -> Box<dyn Iterator<Item = &str> + '_> {
        match self.relations().get(relation) {
            Some(targets) => Box::new(targets.iter().map(String::as_str)),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Returns true if the edge `relation -> target` is present.
    fn has_relation(&self, relation: &str, target: &str) -> bool {
        self.relations()
            .get(relation)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Adds the edge, returning false when it was already present.
    fn add_relation(&mut self, relation: &str, target: &str) -> bool {
        self.relations_mut()
            .entry(relation.to_string())
            .or_default()
            .insert(target.to_string())
    }
}
