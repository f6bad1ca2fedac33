//! Per-package module indexing
//!
//! Runs the classifier over every direct module of a package and stores the
//! results keyed by module name in insertion order. Duplicate module names
//! are not deduplicated: a later module overwrites the earlier entry's value
//! while keeping the first insertion position. Callers that need every
//! module regardless of name collisions walk the tree via `flatten` instead.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::classify::{classify_module, ModuleItems};
use crate::schema::Package;

/// Insertion-ordered string-keyed map
///
/// `insert` with an existing key replaces the value in place, keeping the
/// key's original position. Serializes as a JSON object in entry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value, overwriting in place when the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Consume the map into its ordered entries (for re-sorting)
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Classify every direct module of a package, keyed by module name
pub fn index_package(pkg: &Package) -> OrderedMap<ModuleItems<'_>> {
    let mut map = OrderedMap::new();
    for module in &pkg.modules {
        map.insert(module.name.clone(), classify_module(module));
    }
    map
}
