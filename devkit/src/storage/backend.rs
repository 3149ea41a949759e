//! Storage backend trait.

use super::StorageError;

/// Backend trait for string key-value storage.
///
/// Implementations report every failure; the `StorageService` wrapping them
/// decides what a failure means for the caller (it never does more than log).
pub trait StorageBackend: Send + Sync {
    /// Get the stored value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set the value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Get all keys starting with a prefix, sorted.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError>;

    /// Delete every key.
    fn clear(&self) -> Result<(), StorageError>;
}
