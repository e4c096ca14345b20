//! In-process key-value store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::KeyValueStore;
use crate::error::Result;

/// A `HashMap`-backed [`KeyValueStore`]. Contents vanish on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, (String, DateTime<Utc>)>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), (value.into(), Utc::now()));
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|(value, _)| value.clone()))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .insert(key.to_string(), (value.to_string(), Utc::now()));
        Ok(())
    }

    fn last_modified(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self.entries.get(key).map(|(_, at)| *at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(store.last_modified("k").unwrap().is_some());

        store.put("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn test_with_entry() {
        let store = MemoryStore::with_entry("recipes", "[]");
        assert_eq!(store.get("recipes").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.size_bytes(), 0);
    }
}
