//! Transition map: old identity → new identity
//!
//! Immutable once produced. Unmatched old members and naturally placed new
//! members are intentionally absent. Entries keyed by a synthetic identity
//! mark new members that must be loaded under an alias.

use crate::shared::models::Identity;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionMap {
    entries: BTreeMap<Identity, Identity>,
}

impl TransitionMap {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: BTreeMap<Identity, Identity>) -> Self {
        Self { entries }
    }

    /// New identity for `old`, if it survived
    pub fn get(&self, old: &Identity) -> Option<&Identity> {
        self.entries.get(old)
    }

    pub fn contains(&self, old: &Identity) -> bool {
        self.entries.contains_key(old)
    }

    /// All mappings, natural slots first, each group in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&Identity, &Identity)> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose key is a synthetic alias
    pub fn synthetic_entries(&self) -> impl Iterator<Item = (&Identity, &Identity)> + '_ {
        self.entries.iter().filter(|(old, _)| old.is_synthetic())
    }

    /// Natural entries that actually move a member (old ≠ new)
    ///
    /// This is what a bulk-rename consumer has to rewrite.
    pub fn renames(&self) -> impl Iterator<Item = (&Identity, &Identity)> + '_ {
        self.entries
            .iter()
            .filter(|(old, new)| !old.is_synthetic() && old != new)
    }

    /// True when every entry maps an identity onto itself
    pub fn is_identity(&self) -> bool {
        self.entries.iter().all(|(old, new)| old == new)
    }
}

impl FromIterator<(Identity, Identity)> for TransitionMap {
    fn from_iter<I: IntoIterator<Item = (Identity, Identity)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

struct EntryView<'a> {
    old: &'a Identity,
    new: &'a Identity,
}

impl Serialize for EntryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TransitionEntry", 3)?;
        s.serialize_field("old", &self.old.binary_name())?;
        s.serialize_field("new", &self.new.binary_name())?;
        s.serialize_field("synthetic", &self.old.is_synthetic())?;
        s.end()
    }
}

// Serialized as a list of {old, new, synthetic}: identity keys are not strings.
impl Serialize for TransitionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter().map(|(old, new)| EntryView { old, new }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransitionMap {
        vec![
            (Identity::natural("O", 1), Identity::natural("O", 1)),
            (Identity::natural("O", 2), Identity::natural("O", 3)),
            (Identity::synthetic("O", 10_000), Identity::natural("O", 2)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup() {
        let map = sample();
        assert_eq!(map.get(&Identity::natural("O", 2)), Some(&Identity::natural("O", 3)));
        assert_eq!(map.get(&Identity::natural("O", 4)), None);
        assert!(map.contains(&Identity::synthetic("O", 10_000)));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_views() {
        let map = sample();
        assert_eq!(map.renames().count(), 1);
        assert_eq!(map.synthetic_entries().count(), 1);
        assert!(!map.is_identity());

        let keys: Vec<_> = map.iter().map(|(old, _)| old.clone()).collect();
        assert!(keys.last().unwrap().is_synthetic());
    }

    #[test]
    fn test_empty_is_identity() {
        let map = TransitionMap::empty();
        assert!(map.is_empty());
        assert!(map.is_identity());
    }

    #[test]
    fn test_serialize_as_binary_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1]["old"], "O$2");
        assert_eq!(entries[1]["new"], "O$3");
        assert_eq!(entries[2]["synthetic"], true);
    }
}
