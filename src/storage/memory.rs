//! In-memory storage backend

use crate::storage::store::Backend;
use dashmap::DashMap;
use serde_json::Value;

/// Process-local backend backed by a concurrent map
///
/// Each handle gets its own map; nothing persists beyond the handle.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, Value>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let backend = MemoryBackend::new();

        backend.set("k", json!({"n": 1}));
        assert_eq!(backend.get("k"), Some(json!({"n": 1})));
        assert_eq!(backend.len(), 1);

        backend.remove("k");
        assert_eq!(backend.get("k"), None);
        assert_eq!(backend.len(), 0);
    }

    #[test]
    fn test_clear_and_keys() {
        let backend = MemoryBackend::new();
        backend.set("a", json!(1));
        backend.set("b", json!(2));

        let mut keys = backend.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);

        backend.clear();
        assert_eq!(backend.len(), 0);
    }
}
