//! Scoped key-value persistence.
//!
//! `StorageService` is the only storage entry point widgets see. It owns one
//! backend per [`StorageScope`] and turns every backend failure into a logged
//! warning plus the caller's default, so a broken or full store degrades to
//! "nothing remembered" instead of an error in the UI layer.

mod backend;
mod memory;
mod sqlite;
mod state;

pub use backend::StorageBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
pub use state::{preference_key, tool_state_key};

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::config::KitConfig;

/// Storage error type.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("quota exceeded writing {key}: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which store a value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageScope {
    /// Survives restarts.
    #[default]
    Durable,
    /// Cleared when the session ends.
    Session,
}

impl fmt::Display for StorageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Durable => write!(f, "durable"),
            Self::Session => write!(f, "session"),
        }
    }
}

/// Best-effort string and JSON storage over a durable and a session scope.
///
/// Cheap to clone; clones share the same backends.
#[derive(Clone)]
pub struct StorageService {
    durable: Arc<dyn StorageBackend>,
    session: Arc<dyn StorageBackend>,
}

impl StorageService {
    /// Create a service over the given backends.
    pub fn new(
        durable: impl StorageBackend + 'static,
        session: impl StorageBackend + 'static,
    ) -> Self {
        Self {
            durable: Arc::new(durable),
            session: Arc::new(session),
        }
    }

    /// Both scopes in memory. Nothing outlives the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new(), MemoryBackend::new())
    }

    /// Open the stores described by `config`.
    ///
    /// The durable scope is a SQLite file when `config.storage_path` is set
    /// and an in-memory database otherwise.
    pub fn open(config: &KitConfig) -> Result<Self, StorageError> {
        let durable = match &config.storage_path {
            Some(path) => {
                log::info!("Opening durable storage at {}", path.display());
                SqliteBackend::open(path)?
            }
            None => {
                log::info!("Durable storage is in memory");
                SqliteBackend::open_in_memory()?
            }
        };
        let session = match config.session_quota {
            Some(bytes) => MemoryBackend::with_quota(bytes),
            None => MemoryBackend::new(),
        };

        Ok(Self::new(durable, session))
    }

    fn backend(&self, scope: StorageScope) -> &dyn StorageBackend {
        match scope {
            StorageScope::Durable => self.durable.as_ref(),
            StorageScope::Session => self.session.as_ref(),
        }
    }

    /// Get the value for `key`, or `None` if absent or the store failed.
    pub fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        match self.backend(scope).get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to get {scope} storage item {key}: {e}");
                None
            }
        }
    }

    /// Get the value for `key`, falling back to `default`.
    pub fn get_or(&self, scope: StorageScope, key: &str, default: impl Into<String>) -> String {
        self.get(scope, key).unwrap_or_else(|| default.into())
    }

    /// Store `value` under `key`. Failures are logged and dropped.
    pub fn set(&self, scope: StorageScope, key: &str, value: &str) {
        if let Err(e) = self.backend(scope).set(key, value) {
            log::warn!("Failed to set {scope} storage item {key}: {e}");
        }
    }

    /// Delete `key`. Failures are logged and dropped.
    pub fn remove(&self, scope: StorageScope, key: &str) {
        if let Err(e) = self.backend(scope).remove(key) {
            log::warn!("Failed to remove {scope} storage item {key}: {e}");
        }
    }

    /// Decode the JSON stored under `key`.
    ///
    /// Absent, unreadable and malformed values all come back as `None`.
    pub fn get_json<T: DeserializeOwned>(&self, scope: StorageScope, key: &str) -> Option<T> {
        let raw = self.get(scope, key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Failed to get JSON from {scope} storage {key}: {e}");
                None
            }
        }
    }

    pub fn get_json_or<T: DeserializeOwned>(&self, scope: StorageScope, key: &str, default: T) -> T {
        self.get_json(scope, key).unwrap_or(default)
    }

    /// Encode `value` as JSON and store it under `key`.
    pub fn set_json<T: Serialize + ?Sized>(&self, scope: StorageScope, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(scope, key, &raw),
            Err(e) => log::warn!("Failed to set JSON to {scope} storage {key}: {e}"),
        }
    }

    /// All keys in `scope` starting with `prefix`. Empty on failure.
    pub fn keys_with_prefix(&self, scope: StorageScope, prefix: &str) -> Vec<String> {
        self.backend(scope)
            .keys_with_prefix(prefix)
            .unwrap_or_else(|e| {
                log::warn!("Failed to list {scope} storage keys under {prefix}: {e}");
                Vec::new()
            })
    }

    /// Drop everything in the session scope.
    pub fn end_session(&self) {
        match self.session.clear() {
            Ok(()) => log::debug!("Session storage cleared"),
            Err(e) => log::warn!("Failed to clear session storage: {e}"),
        }
    }
}

impl fmt::Debug for StorageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageService").finish_non_exhaustive()
    }
}
