//! In-memory storage backend using DashMap.

use dashmap::DashMap;

use super::{StorageBackend, StorageError};

/// An in-memory backend, optionally limited to a byte quota.
///
/// Used for the session scope: data lives as long as the backend does. The
/// quota counts key and value bytes of every entry, the same way browser
/// storage accounts for usage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: DashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    /// Creates a new unbounded backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that rejects writes once `bytes` would be exceeded.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            store: DashMap::new(),
            quota: Some(bytes),
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Bytes currently used by keys and values.
    pub fn usage(&self) -> usize {
        self.store
            .iter()
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.store.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            let replaced = self
                .store
                .get(key)
                .map(|entry| key.len() + entry.value().len())
                .unwrap_or(0);
            let needed = self.usage() - replaced + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        self.store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys: Vec<String> = self
            .store
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.store.clear();
        Ok(())
    }
}
