//! Tool state and app preferences on top of the durable scope.

use serde::{Serialize, de::DeserializeOwned};

use super::{StorageScope, StorageService};

/// Key holding the JSON state of a tool.
pub fn tool_state_key(tool: &str) -> String {
    format!("dev-tools-{tool}-state")
}

/// Key holding a single app preference.
pub fn preference_key(key: &str) -> String {
    format!("dev-tools-pref-{key}")
}

impl StorageService {
    /// Load the saved state of `tool`, or `default` if none is usable.
    ///
    /// ```ignore
    /// let state: MembersState = storage.tool_state("members", MembersState::default());
    /// ```
    pub fn tool_state<T: DeserializeOwned>(&self, tool: &str, default: T) -> T {
        self.get_json_or(StorageScope::Durable, &tool_state_key(tool), default)
    }

    pub fn set_tool_state<T: Serialize + ?Sized>(&self, tool: &str, state: &T) {
        self.set_json(StorageScope::Durable, &tool_state_key(tool), state);
    }

    pub fn preference(&self, key: &str, default: impl Into<String>) -> String {
        self.get_or(StorageScope::Durable, &preference_key(key), default)
    }

    pub fn set_preference(&self, key: &str, value: &str) {
        self.set(StorageScope::Durable, &preference_key(key), value);
    }
}
