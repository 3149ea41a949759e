//! Toolkit configuration.

use std::path::PathBuf;

use log::LevelFilter;

use crate::paths;

/// Text shown by a list with no items.
pub const DEFAULT_PLACEHOLDER: &str = "No items found";

/// Default session scope quota, matching common browser session storage limits.
pub const DEFAULT_SESSION_QUOTA: usize = 5 * 1024 * 1024;

/// Process-wide toolkit configuration.
///
/// Defaults come from the platform directories in [`paths`]; each field can
/// be overridden with the builder methods.
#[derive(Debug, Clone)]
pub struct KitConfig {
    /// Display name used in log lines.
    pub name: String,

    /// SQLite file for the durable scope. `None` keeps it in memory.
    pub storage_path: Option<PathBuf>,

    /// Byte quota of the session scope (None = unlimited).
    pub session_quota: Option<usize>,

    /// Log file. `None` logs to stderr.
    pub log_path: Option<PathBuf>,

    /// Maximum log level.
    pub log_level: LevelFilter,

    /// Placeholder text for empty lists.
    pub empty_placeholder: String,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            name: "devtools".into(),
            storage_path: paths::storage_db(),
            session_quota: Some(DEFAULT_SESSION_QUOTA),
            log_path: paths::log_file(),
            log_level: LevelFilter::Info,
            empty_placeholder: DEFAULT_PLACEHOLDER.into(),
        }
    }
}

impl KitConfig {
    /// Create a new config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Store durable data in the given SQLite file.
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Keep durable data in memory only.
    pub fn in_memory(mut self) -> Self {
        self.storage_path = None;
        self
    }

    pub fn session_quota(mut self, bytes: Option<usize>) -> Self {
        self.session_quota = bytes;
        self
    }

    pub fn log_path(mut self, path: Option<PathBuf>) -> Self {
        self.log_path = path;
        self
    }

    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub fn empty_placeholder(mut self, text: impl Into<String>) -> Self {
        self.empty_placeholder = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = KitConfig::new("console")
            .in_memory()
            .session_quota(None)
            .log_level(LevelFilter::Debug)
            .empty_placeholder("Nothing here");

        assert_eq!(config.name, "console");
        assert_eq!(config.storage_path, None);
        assert_eq!(config.session_quota, None);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.empty_placeholder, "Nothing here");
    }

    #[test]
    fn test_default_placeholder() {
        assert_eq!(KitConfig::default().empty_placeholder, DEFAULT_PLACEHOLDER);
    }
}
