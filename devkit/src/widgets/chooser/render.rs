use std::hash::Hash;

use devdom::Element;

use super::{ChooserAction, ListChooser};

impl<T, K> ListChooser<T, K>
where
    T: Clone,
    K: Eq + Hash,
{
    /// Rebuild the chooser view: available pane, buttons, chosen pane.
    pub fn render(&mut self) -> &Element {
        let buttons = ChooserAction::ALL.into_iter().map(|action| {
            Element::button(action.label())
                .id(self.button_id(action))
                .data("action", action.name())
        });

        self.view = Element::row()
            .id(self.id.clone())
            .class("list-chooser")
            .gap(3)
            .child(
                Element::col()
                    .id(format!("{}-source", self.id))
                    .class("list-chooser-source")
                    .child(self.available.view().clone()),
            )
            .child(
                Element::col()
                    .id(format!("{}-buttons", self.id))
                    .class("list-chooser-buttons")
                    .children(buttons),
            )
            .child(
                Element::col()
                    .id(format!("{}-target", self.id))
                    .class("list-chooser-target")
                    .child(self.chosen.view().clone()),
            );
        &self.view
    }
}
