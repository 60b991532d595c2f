//! Descriptor properties with right-biased overlay.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Property name → literal value, scoped to one descriptor.
///
/// Values are stored verbatim: a value that itself contains `${...}` is never
/// expanded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(BTreeMap<String, String>);

impl PropertyMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a property value.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Return a copy of `self` with every entry of `child` laid over it.
    ///
    /// Child values win on key collision. Neither input is modified.
    #[must_use]
    pub fn overlay(&self, child: &PropertyMap) -> PropertyMap {
        let mut merged = self.clone();
        for (k, v) in &child.0 {
            merged.0.insert(k.clone(), v.clone());
        }
        merged
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
