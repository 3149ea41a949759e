//! ListChooser - move items between an "available" and a "chosen" list.
//!
//! The chooser partitions one item set into two disjoint lists. Every item of
//! the original set is in exactly one of them after every operation, compared
//! by the caller's identity function. Each move clears the selection on both
//! sides, re-renders and notifies the chosen-changed callback once.

mod events;
mod render;

pub use events::ChooserAction;

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use devdom::{generate_id, Element};

use super::list::{RenderFn, SelectableList, SelectionCallback};
use super::selection::SelectionMode;

/// Identity callback shared by both sides of the chooser.
pub type IdentityFn<T, K> = Rc<dyn Fn(&T) -> K>;

pub struct ListChooser<T, K> {
    id: String,
    available: SelectableList<T>,
    chosen: SelectableList<T>,
    render_item: RenderFn<T>,
    identity: IdentityFn<T, K>,
    /// Identities of the full item set, fixed at construction.
    universe: HashSet<K>,
    total: usize,
    on_chosen_changed: Option<SelectionCallback<T>>,
    view: Element,
}

impl<T, K> ListChooser<T, K>
where
    T: Clone,
    K: Eq + Hash,
{
    /// Create a chooser with every item available and nothing chosen.
    pub fn new(
        items: Vec<T>,
        render: impl Fn(&T) -> Element + 'static,
        identity: impl Fn(&T) -> K + 'static,
    ) -> Self {
        let id = generate_id("chooser");
        let render_item: RenderFn<T> = Rc::new(render);
        let identity: IdentityFn<T, K> = Rc::new(identity);
        let universe = items.iter().map(|item| identity(item)).collect();
        let total = items.len();

        let mut chooser = Self {
            available: Self::side(&id, "available", items, &render_item),
            chosen: Self::side(&id, "chosen", Vec::new(), &render_item),
            id,
            render_item,
            identity,
            universe,
            total,
            on_chosen_changed: None,
            view: Element::default(),
        };
        chooser.render();
        chooser
    }

    fn side(id: &str, name: &str, items: Vec<T>, render_item: &RenderFn<T>) -> SelectableList<T> {
        SelectableList::with_render_fn(items, render_item.clone(), SelectionMode::Multiple)
            .id(format!("{id}-{name}"))
    }

    /// Start with `initial` on the chosen side.
    ///
    /// Items whose identity is not part of the full set are dropped, as are
    /// repeated identities. Everything else of the full set stays available
    /// in its original order.
    pub fn with_initial_chosen(mut self, initial: Vec<T>) -> Self {
        let mut full = self.available.items().to_vec();
        full.extend_from_slice(self.chosen.items());

        let mut seen = HashSet::new();
        let chosen: Vec<T> = initial
            .into_iter()
            .filter(|item| {
                let key = (self.identity)(item);
                if !self.universe.contains(&key) {
                    log::warn!("Chooser {}: initial item is not in the item set, dropping", self.id);
                    return false;
                }
                seen.insert(key)
            })
            .collect();
        let available: Vec<T> = full
            .into_iter()
            .filter(|item| !seen.contains(&(self.identity)(item)))
            .collect();

        self.available.replace_items(available);
        self.chosen.replace_items(chosen);
        self.render();
        self
    }

    /// Set the chooser id. Pane and button ids are derived from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        let available = self.available.items().to_vec();
        let chosen = self.chosen.items().to_vec();
        self.available = Self::side(&self.id, "available", available, &self.render_item);
        self.chosen = Self::side(&self.id, "chosen", chosen, &self.render_item);
        self.render();
        self
    }

    pub fn on_chosen_changed(mut self, callback: impl FnMut(&[T]) + 'static) -> Self {
        self.on_chosen_changed = Some(Box::new(callback));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn chooser_id(&self) -> &str {
        &self.id
    }

    pub fn available(&self) -> &[T] {
        self.available.items()
    }

    pub fn chosen(&self) -> &[T] {
        self.chosen.items()
    }

    pub fn available_list(&self) -> &SelectableList<T> {
        &self.available
    }

    pub fn chosen_list(&self) -> &SelectableList<T> {
        &self.chosen
    }

    pub fn view(&self) -> &Element {
        &self.view
    }

    /// Toggle the available item at `index` for the next move.
    pub fn select_available(&mut self, index: usize) {
        self.available.handle_select(index);
        self.render();
    }

    /// Toggle the chosen item at `index` for the next move back.
    pub fn select_chosen(&mut self, index: usize) {
        self.chosen.handle_select(index);
        self.render();
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Move the selected available items to the end of the chosen list.
    pub fn move_selected_to_chosen(&mut self) {
        let (kept, moved) = self.available.partition_selected();
        let mut chosen = self.chosen.items().to_vec();
        chosen.extend(moved);
        self.finish_move("move selected to chosen", kept, chosen);
    }

    /// Move the selected chosen items to the end of the available list.
    pub fn move_selected_to_available(&mut self) {
        let (kept, moved) = self.chosen.partition_selected();
        let mut available = self.available.items().to_vec();
        available.extend(moved);
        self.finish_move("move selected to available", available, kept);
    }

    /// Move every available item to the end of the chosen list.
    pub fn move_all_to_chosen(&mut self) {
        let mut chosen = self.chosen.items().to_vec();
        chosen.extend_from_slice(self.available.items());
        self.finish_move("move all to chosen", Vec::new(), chosen);
    }

    /// Move every chosen item to the end of the available list.
    pub fn move_all_to_available(&mut self) {
        let mut available = self.available.items().to_vec();
        available.extend_from_slice(self.chosen.items());
        self.finish_move("move all to available", available, Vec::new());
    }

    fn finish_move(&mut self, action: &str, available: Vec<T>, chosen: Vec<T>) {
        self.available.replace_items(available);
        self.chosen.replace_items(chosen);
        debug_assert!(self.is_partition_consistent());
        log::debug!(
            "Chooser {}: {action} -> {} available, {} chosen",
            self.id,
            self.available.len(),
            self.chosen.len()
        );

        self.render();
        if let Some(callback) = self.on_chosen_changed.as_mut() {
            callback(self.chosen.items());
        }
    }

    /// Check that the two sides are disjoint by identity and together hold
    /// exactly the item set the chooser was built with.
    pub fn is_partition_consistent(&self) -> bool {
        if self.available.len() + self.chosen.len() != self.total {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.total);
        for item in self.available.items().iter().chain(self.chosen.items()) {
            if !seen.insert((self.identity)(item)) {
                return false;
            }
        }
        seen == self.universe
    }
}
