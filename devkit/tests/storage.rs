use devkit::config::KitConfig;
use devkit::storage::{
    MemoryBackend, StorageBackend, StorageError, StorageScope, StorageService, preference_key,
    tool_state_key,
};
use serde::{Deserialize, Serialize};

/// A store that is switched off, like browser storage in a locked-down profile.
struct DisabledBackend;

impl StorageBackend for DisabledBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn keys_with_prefix(&self, _prefix: &str) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct WeatherState {
    city: String,
    units: String,
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_get_missing_returns_default() {
    let storage = StorageService::in_memory();

    assert_eq!(storage.get(StorageScope::Durable, "missing"), None);
    assert_eq!(storage.get_or(StorageScope::Durable, "missing", "fallback"), "fallback");
}

#[test]
fn test_scopes_are_independent() {
    let storage = StorageService::in_memory();
    storage.set(StorageScope::Durable, "key", "durable");
    storage.set(StorageScope::Session, "key", "session");

    assert_eq!(storage.get(StorageScope::Durable, "key").as_deref(), Some("durable"));
    assert_eq!(storage.get(StorageScope::Session, "key").as_deref(), Some("session"));

    storage.remove(StorageScope::Session, "key");
    assert_eq!(storage.get(StorageScope::Session, "key"), None);
    assert_eq!(storage.get(StorageScope::Durable, "key").as_deref(), Some("durable"));
}

#[test]
fn test_end_session_keeps_durable_values() {
    let storage = StorageService::in_memory();
    storage.set(StorageScope::Durable, "theme", "dark");
    storage.set(StorageScope::Session, "draft", "hello");

    storage.end_session();

    assert_eq!(storage.get(StorageScope::Session, "draft"), None);
    assert_eq!(storage.get(StorageScope::Durable, "theme").as_deref(), Some("dark"));
}

#[test]
fn test_keys_with_prefix() {
    let storage = StorageService::in_memory();
    storage.set(StorageScope::Durable, "members-list-last-selection-1", "[]");
    storage.set(StorageScope::Durable, "members-list-last-selection-2", "[]");
    storage.set(StorageScope::Durable, "manage-list-last-selection", "[]");

    assert_eq!(
        storage.keys_with_prefix(StorageScope::Durable, "members-list-"),
        vec!["members-list-last-selection-1", "members-list-last-selection-2"]
    );
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_round_trip() {
    let storage = StorageService::in_memory();
    storage.set_json(StorageScope::Session, "ids", &vec![3, 1, 2]);

    let ids: Option<Vec<u32>> = storage.get_json(StorageScope::Session, "ids");
    assert_eq!(ids, Some(vec![3, 1, 2]));
}

#[test]
fn test_malformed_json_is_absent() {
    let storage = StorageService::in_memory();
    storage.set(StorageScope::Durable, "ids", "[1, 2,");

    let ids: Option<Vec<u32>> = storage.get_json(StorageScope::Durable, "ids");
    assert_eq!(ids, None);
    assert_eq!(storage.get_json_or(StorageScope::Durable, "ids", vec![9u32]), vec![9]);
}

#[test]
fn test_json_of_wrong_shape_is_absent() {
    let storage = StorageService::in_memory();
    storage.set_json(StorageScope::Durable, "ids", &vec!["a", "b"]);

    let ids: Option<Vec<u32>> = storage.get_json(StorageScope::Durable, "ids");
    assert_eq!(ids, None);
}

// ============================================================================
// Failures are swallowed
// ============================================================================

#[test]
fn test_disabled_storage_falls_back_to_defaults() {
    let storage = StorageService::new(DisabledBackend, DisabledBackend);

    storage.set(StorageScope::Durable, "key", "value");
    storage.set_json(StorageScope::Session, "ids", &vec![1, 2]);
    storage.remove(StorageScope::Durable, "key");
    storage.end_session();

    assert_eq!(storage.get_or(StorageScope::Durable, "key", "default"), "default");
    assert_eq!(storage.get_json::<Vec<u32>>(StorageScope::Session, "ids"), None);
    assert!(storage.keys_with_prefix(StorageScope::Durable, "").is_empty());
}

#[test]
fn test_quota_exceeded_keeps_previous_value() {
    let storage = StorageService::new(MemoryBackend::new(), MemoryBackend::with_quota(16));
    storage.set(StorageScope::Session, "k", "small");

    storage.set(StorageScope::Session, "k", "this value is far too large");

    assert_eq!(storage.get(StorageScope::Session, "k").as_deref(), Some("small"));
}

// ============================================================================
// Tool state and preferences
// ============================================================================

#[test]
fn test_tool_state_round_trip() {
    let storage = StorageService::in_memory();
    assert_eq!(storage.tool_state("dev-tool-weather", WeatherState::default()), WeatherState::default());

    let state = WeatherState {
        city: "London".into(),
        units: "metric".into(),
    };
    storage.set_tool_state("dev-tool-weather", &state);

    assert_eq!(storage.tool_state("dev-tool-weather", WeatherState::default()), state);
    assert!(
        storage
            .get(StorageScope::Durable, "dev-tools-dev-tool-weather-state")
            .is_some()
    );
}

#[test]
fn test_preferences_use_prefixed_keys() {
    let storage = StorageService::in_memory();
    assert_eq!(storage.preference("theme", "light"), "light");

    storage.set_preference("theme", "dark");

    assert_eq!(storage.preference("theme", "light"), "dark");
    assert_eq!(preference_key("theme"), "dev-tools-pref-theme");
    assert_eq!(tool_state_key("rss"), "dev-tools-rss-state");
}

// ============================================================================
// Durable file storage
// ============================================================================

#[test]
fn test_durable_scope_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = KitConfig::new("test").storage_path(dir.path().join("storage.db"));

    {
        let storage = StorageService::open(&config).unwrap();
        storage.set(StorageScope::Durable, "kept", "yes");
        storage.set(StorageScope::Session, "dropped", "yes");
    }

    let storage = StorageService::open(&config).unwrap();
    assert_eq!(storage.get(StorageScope::Durable, "kept").as_deref(), Some("yes"));
    assert_eq!(storage.get(StorageScope::Session, "dropped"), None);
}
