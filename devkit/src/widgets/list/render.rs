//! SelectableList view building.

use devdom::{find_element, find_element_mut, Element};

use super::SelectableList;
use crate::widgets::selection::SelectionMode;

pub const LIST_CLASS: &str = "list-component-list";
pub const ITEM_CLASS: &str = "list-component-item";
pub const EMPTY_CLASS: &str = "list-component-empty";
pub const MARKER_CLASS: &str = "list-component-marker";
pub const SELECTED_CLASS: &str = "selected";

/// Row marker text for a selectable row.
fn marker(mode: SelectionMode, selected: bool) -> &'static str {
    match (mode, selected) {
        (SelectionMode::Single, true) => "(*)",
        (SelectionMode::Single, false) => "( )",
        (_, true) => "[x]",
        (_, false) => "[ ]",
    }
}

impl<T: Clone> SelectableList<T> {
    /// Element id of the row at `index`.
    pub fn row_id(&self, index: usize) -> String {
        format!("{}-item-{index}", self.id)
    }

    pub(super) fn row_index(&self, element_id: &str) -> Option<usize> {
        let row = find_element(&self.view, element_id)?;
        if !row.has_class(ITEM_CLASS) {
            return None;
        }
        row.get_data("index")?.parse().ok()
    }

    /// Rebuild the view from the items.
    ///
    /// An empty list renders a single placeholder row. Rendering twice in a
    /// row yields equal views.
    pub fn render(&mut self) -> &Element {
        let mode = self.mode();
        let selectable = mode.is_selectable();

        let rows: Vec<Element> = if self.items.is_empty() {
            vec![
                Element::text(self.placeholder.clone())
                    .id(format!("{}-empty", self.id))
                    .class(EMPTY_CLASS),
            ]
        } else {
            self.items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let selected = self.selection.is_selected(index);
                    let mut row = Element::row()
                        .id(self.row_id(index))
                        .class(ITEM_CLASS)
                        .gap(1)
                        .clickable(selectable)
                        .focusable(selectable)
                        .data("index", index.to_string());
                    if selectable {
                        row = row.child(
                            Element::text(marker(mode, selected))
                                .id(format!("{}-marker-{index}", self.id))
                                .class(MARKER_CLASS),
                        );
                    }
                    let mut row = row.child((self.render_item)(item));
                    row.toggle_class(SELECTED_CLASS, selected);
                    row.focused = self.focused == Some(index);
                    row
                })
                .collect()
        };

        self.view = Element::col()
            .id(self.id.clone())
            .class(LIST_CLASS)
            .children(rows);
        &self.view
    }

    /// Patch selection and focus marks into the current view.
    pub(super) fn sync_view(&mut self) {
        let mode = self.mode();
        for index in 0..self.items.len() {
            let selected = self.selection.is_selected(index);
            let focused = self.focused == Some(index);
            let row_id = self.row_id(index);
            if let Some(row) = find_element_mut(&mut self.view, &row_id) {
                row.toggle_class(SELECTED_CLASS, selected);
                row.focused = focused;
            }
            let marker_id = format!("{}-marker-{index}", self.id);
            if let Some(mark) = find_element_mut(&mut self.view, &marker_id) {
                mark.set_text(marker(mode, selected));
            }
        }
    }
}
