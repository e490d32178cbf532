use dashmap::DashMap;
use std::collections::HashMap;

/// Concurrency-safe mapping from metric key to rendered result value.
///
/// Backed by a `DashMap`, so a `set` is visible to readers only once the
/// writing task's shard lock is released; there are no torn writes. Up to five
/// tasks mutate the store at once during the concurrent pass, each under its
/// own key.
pub struct ResultStore {
    entries: DashMap<String, String>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Upserts a value under `key`.
    pub fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    /// Returns a copy of the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Point-in-time copy of all entries, used by the read endpoint.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
