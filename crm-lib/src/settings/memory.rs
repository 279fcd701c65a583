//! In-memory settings backend using DashMap

use async_trait::async_trait;
use dashmap::DashMap;

use super::SettingsBackend;

/// Settings held in a concurrent hash map for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: DashMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait]
impl SettingsBackend for MemoryBackend {
    async fn get_bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.store.get(key).map(|entry| entry.value().clone())
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) {
        self.store.insert(key.to_string(), value);
    }

    async fn delete(&self, key: &str) {
        self.store.remove(key);
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .store
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        keys
    }
}
