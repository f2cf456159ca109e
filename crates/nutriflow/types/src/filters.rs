//! Dietary filters.
//!
//! The filter set is an open map from filter name to on/off. Known names are
//! seeded at session start; anything else a caller sends is kept as-is unless
//! the store is configured to be strict about names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter names a fresh session starts with, all switched off
pub const KNOWN_FILTERS: &[&str] = &[
    "glutenFree",
    "keto",
    "detox",
    "vegan",
    "highProtein",
    "lowCarb",
    "sugarFree",
];

/// Key-by-key update for a `DietaryFilterSet`
pub type FilterPatch = BTreeMap<String, bool>;

/// Active dietary filters keyed by name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DietaryFilterSet(BTreeMap<String, bool>);

impl DietaryFilterSet {
    /// An empty set with no keys at all
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_known(key: &str) -> bool {
        KNOWN_FILTERS.contains(&key)
    }

    /// Unknown keys read as off
    pub fn is_active(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    /// Last write wins per key; keys absent from `patch` are untouched
    pub fn merge(&mut self, patch: &FilterPatch) {
        for (key, value) in patch {
            self.0.insert(key.clone(), *value);
        }
    }

    /// Names of the filters currently switched on
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter(|(_, on)| **on).map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DietaryFilterSet {
    fn default() -> Self {
        Self(
            KNOWN_FILTERS
                .iter()
                .map(|name| (name.to_string(), false))
                .collect(),
        )
    }
}
