//! Persisting the selection across reloads by item identity.

use serde::{Serialize, de::DeserializeOwned};

use super::SelectableList;

impl<T: Clone> SelectableList<T> {
    /// Persist the identities of the selected items under `storage_key`.
    ///
    /// An empty selection writes nothing and leaves any earlier value in
    /// place: clearing a selection does not erase what was remembered.
    pub fn store_last_selected<K, F>(&self, storage_key: &str, identity: F)
    where
        K: Serialize,
        F: Fn(&T) -> K,
    {
        if self.selection.is_empty() {
            return;
        }
        let Some(storage) = &self.storage else {
            log::debug!("List {}: no storage attached, not storing selection", self.id);
            return;
        };

        let keys: Vec<K> = self
            .selection
            .indices()
            .iter()
            .map(|&i| identity(&self.items[i]))
            .collect();
        storage.set_json(self.scope, storage_key, &keys);
    }

    /// Re-select the items whose identity was stored under `storage_key`.
    ///
    /// Walks the current items in order and calls `handle_select` for each
    /// match, so the selection-changed callback fires per match. In single
    /// mode that means the last matching item wins. Missing or unreadable
    /// data restores nothing. Returns the number of matches.
    pub fn set_last_selected<K, F>(&mut self, storage_key: &str, identity: F) -> usize
    where
        K: DeserializeOwned + PartialEq,
        F: Fn(&T) -> K,
    {
        let Some(storage) = &self.storage else {
            log::debug!("List {}: no storage attached, nothing to restore", self.id);
            return 0;
        };
        let Some(stored) = storage.get_json::<Vec<K>>(self.scope, storage_key) else {
            return 0;
        };

        let matches: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| stored.contains(&identity(item)))
            .map(|(index, _)| index)
            .collect();

        log::debug!(
            "List {}: restoring {} of {} stored selections from {storage_key}",
            self.id,
            matches.len(),
            stored.len()
        );
        for &index in &matches {
            self.handle_select(index);
        }
        matches.len()
    }

    /// Restore the stored selection, or select the first item if nothing
    /// matched. Returns true if anything ended up selected.
    pub fn restore_or_select_first<K, F>(&mut self, storage_key: &str, identity: F) -> bool
    where
        K: DeserializeOwned + PartialEq,
        F: Fn(&T) -> K,
    {
        if self.set_last_selected(storage_key, identity) == 0
            && self.mode().is_selectable()
            && !self.items.is_empty()
        {
            self.handle_select(0);
        }
        !self.selection.is_empty()
    }
}
