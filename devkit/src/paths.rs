//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "devtools";
const APPLICATION: &str = "devtools";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the data directory for persistent application data.
///
/// - Linux: `$XDG_DATA_HOME/devtools` or `~/.local/share/devtools`
/// - macOS: `~/Library/Application Support/dev.devtools.devtools`
/// - Windows: `C:\Users\<User>\AppData\Roaming\devtools\devtools\data`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/devtools` or `~/.cache/devtools`
/// - macOS: `~/Library/Caches/dev.devtools.devtools`
/// - Windows: `C:\Users\<User>\AppData\Local\devtools\devtools\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the durable storage database.
pub fn storage_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("storage.db"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// Rotate logs: rename `latest` to `<stem>-<timestamp>.log` next to it and
/// clean up old archives of the same stem.
///
/// Only archives carrying the stem of `latest` are touched, so a log path
/// inside a shared directory leaves other programs' logs alone.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs(latest: &Path) {
    let Some(dir) = latest.parent() else { return };
    let Some(prefix) = archive_prefix(latest) else { return };

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let mut archived = dir.join(format!("{prefix}{timestamp}.log"));
        let mut n = 1;
        while archived.exists() {
            archived = dir.join(format!("{prefix}{timestamp}-{n}.log"));
            n += 1;
        }
        let _ = fs::rename(latest, &archived);
    }

    cleanup_old_logs(dir, &prefix);
}

/// File name prefix shared by the archives of `latest`.
fn archive_prefix(latest: &Path) -> Option<String> {
    let stem = latest.file_stem()?.to_str()?;
    Some(format!("{stem}-"))
}

/// Remove old archives starting with `prefix`, keeping only the most recent MAX_OLD_LOGS.
fn cleanup_old_logs(dir: &Path, prefix: &str) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.starts_with(prefix) && name.ends_with(".log")
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let _ = fs::remove_file(entry.path());
        }
    }
}
