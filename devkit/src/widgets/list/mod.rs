//! SelectableList - a generic list with selection and persisted selection.
//!
//! The list owns its items and a render callback. Rendering builds a fresh
//! `Element` subtree; selection changes patch row classes in that subtree
//! instead of rebuilding it.
//!
//! # Example
//!
//! ```ignore
//! let mut list = SelectableList::new(members, |m: &Member| Element::text(&m.name), SelectionMode::Single)
//!     .id("members")
//!     .with_storage(storage.clone())
//!     .on_selection_changed(|selected| log::info!("{} selected", selected.len()));
//!
//! list.set_last_selected("members-list-last-selection-42", |m| m.id.clone());
//! list.handle_click("members-item-3");
//! list.store_last_selected("members-list-last-selection-42", |m| m.id.clone());
//! ```

mod persist;
mod render;

pub use render::{EMPTY_CLASS, ITEM_CLASS, LIST_CLASS, MARKER_CLASS, SELECTED_CLASS};

use std::hash::Hash;
use std::rc::Rc;

use devdom::{generate_id, Element};

use crate::config::DEFAULT_PLACEHOLDER;
use crate::storage::{StorageScope, StorageService};

use super::selection::{Selection, SelectionMode};

/// Render callback shared between widgets: item to detached element.
pub type RenderFn<T> = Rc<dyn Fn(&T) -> Element>;

/// Selection-changed callback, called with a snapshot of the selected items.
pub type SelectionCallback<T> = Box<dyn FnMut(&[T])>;

pub struct SelectableList<T> {
    id: String,
    items: Vec<T>,
    render_item: RenderFn<T>,
    selection: Selection,
    /// Row holding keyboard focus.
    focused: Option<usize>,
    placeholder: String,
    on_selection_changed: Option<SelectionCallback<T>>,
    storage: Option<StorageService>,
    scope: StorageScope,
    view: Element,
}

impl<T: Clone> SelectableList<T> {
    /// Create a list and render it.
    pub fn new(
        items: Vec<T>,
        render: impl Fn(&T) -> Element + 'static,
        mode: SelectionMode,
    ) -> Self {
        Self::with_render_fn(items, Rc::new(render), mode)
    }

    /// Create a list around an already shared render callback.
    pub fn with_render_fn(items: Vec<T>, render_item: RenderFn<T>, mode: SelectionMode) -> Self {
        let mut list = Self {
            id: generate_id("list"),
            items,
            render_item,
            selection: Selection::new(mode),
            focused: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            on_selection_changed: None,
            storage: None,
            scope: StorageScope::Durable,
            view: Element::default(),
        };
        list.render();
        list
    }

    /// Set the list id. Row ids are derived from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self.render();
        self
    }

    /// Set the text shown when there are no items.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self.render();
        self
    }

    pub fn on_selection_changed(mut self, callback: impl FnMut(&[T]) + 'static) -> Self {
        self.on_selection_changed = Some(Box::new(callback));
        self
    }

    /// Attach the storage used by `store_last_selected`/`set_last_selected`.
    pub fn with_storage(mut self, storage: StorageService) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Choose the scope persisted selections go to (durable by default).
    pub fn persist_in(mut self, scope: StorageScope) -> Self {
        self.scope = scope;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn list_id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// The last rendered view.
    pub fn view(&self) -> &Element {
        &self.view
    }

    /// Selected items in selection order. A copy; changing it changes nothing.
    pub fn selected_items(&self) -> Vec<T> {
        self.selection
            .indices()
            .iter()
            .map(|&i| self.items[i].clone())
            .collect()
    }

    /// Selected indices in selection order. A copy.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.indices().to_vec()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Apply a click on the row at `index`.
    ///
    /// Does nothing in `None` mode or for an index past the end. Otherwise
    /// updates the selection per mode, marks the rows and notifies the
    /// selection-changed callback, even when a single-mode click re-selects
    /// the row that was already selected.
    pub fn handle_select(&mut self, index: usize) {
        if index >= self.items.len() {
            log::warn!(
                "List {}: ignoring selection of index {index}, list has {} items",
                self.id,
                self.items.len()
            );
            return;
        }
        if !self.mode().is_selectable() {
            return;
        }

        let changed = self.selection.toggle(index);
        self.focused = Some(index);
        log::debug!(
            "List {}: select {index} ({} mode, changed: {changed}) -> {:?}",
            self.id,
            self.mode(),
            self.selection.indices()
        );

        self.sync_view();
        self.notify();
    }

    /// Route a click on `element_id`. Returns true if it hit one of our rows.
    pub fn handle_click(&mut self, element_id: &str) -> bool {
        match self.row_index(element_id) {
            Some(index) => {
                self.handle_select(index);
                true
            }
            None => false,
        }
    }

    /// Deselect everything, notifying if anything was selected.
    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.sync_view();
            self.notify();
        }
    }

    // =========================================================================
    // Keyboard focus
    // =========================================================================

    /// Move focus to the next row, starting at the first one.
    pub fn focus_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.focused = Some(self.focused.map_or(0, |i| (i + 1).min(last)));
        self.sync_view();
    }

    /// Move focus to the previous row, starting at the last one.
    pub fn focus_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.focused = Some(self.focused.map_or(last, |i| i.saturating_sub(1)));
        self.sync_view();
    }

    /// Select the focused row, as if it had been clicked.
    pub fn select_focused(&mut self) {
        if let Some(index) = self.focused {
            self.handle_select(index);
        }
    }

    // =========================================================================
    // Item replacement
    // =========================================================================

    /// Replace the items, carrying the selection over by identity.
    ///
    /// Selected items still present (by `identity`) stay selected at their
    /// new positions; the rest drop out. Notifies only if a selected identity
    /// was lost.
    pub fn reset_items<K, F>(&mut self, items: Vec<T>, identity: F)
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let previous: Vec<K> = self
            .selection
            .indices()
            .iter()
            .map(|&i| identity(&self.items[i]))
            .collect();
        let focused_key = self.focused.map(|i| identity(&self.items[i]));

        self.items = items;
        let position = |key: &K| self.items.iter().position(|item| identity(item) == *key);
        let next: Vec<usize> = previous.iter().filter_map(position).collect();
        self.focused = focused_key.as_ref().and_then(position);
        let lost = next.len() != previous.len();

        self.selection.replace(next);
        self.render();
        if lost {
            self.notify();
        }
    }

    /// Replace the items and drop the selection without notifying.
    pub(crate) fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selection.clear();
        self.focused = None;
        self.render();
    }

    /// Items split into (unselected, selected), both in item order.
    pub(crate) fn partition_selected(&self) -> (Vec<T>, Vec<T>) {
        let mut kept = Vec::new();
        let mut picked = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            if self.selection.is_selected(index) {
                picked.push(item.clone());
            } else {
                kept.push(item.clone());
            }
        }
        (kept, picked)
    }

    fn notify(&mut self) {
        let selected = self.selected_items();
        if let Some(callback) = self.on_selection_changed.as_mut() {
            callback(&selected);
        }
    }
}
