//! Open key/value side-table read from the detail page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form attributes keyed by normalized snake_case label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraInfo(BTreeMap<String, String>);

impl ExtraInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Number of stored keys.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoIterator for ExtraInfo {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
