//! Chooser actions and click routing.

use std::hash::Hash;

use super::ListChooser;

/// The four transfer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserAction {
    MoveSelectedToChosen,
    MoveSelectedToAvailable,
    MoveAllToChosen,
    MoveAllToAvailable,
}

impl ChooserAction {
    /// Button order, top to bottom.
    pub const ALL: [ChooserAction; 4] = [
        Self::MoveSelectedToChosen,
        Self::MoveSelectedToAvailable,
        Self::MoveAllToChosen,
        Self::MoveAllToAvailable,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::MoveSelectedToChosen => ">",
            Self::MoveSelectedToAvailable => "<",
            Self::MoveAllToChosen => ">>",
            Self::MoveAllToAvailable => "<<",
        }
    }

    /// Suffix of the button element id.
    pub fn name(self) -> &'static str {
        match self {
            Self::MoveSelectedToChosen => "move-selected",
            Self::MoveSelectedToAvailable => "move-selected-back",
            Self::MoveAllToChosen => "move-all",
            Self::MoveAllToAvailable => "move-all-back",
        }
    }

    /// Look an action up by its button label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }
}

impl<T, K> ListChooser<T, K>
where
    T: Clone,
    K: Eq + Hash,
{
    /// Element id of the button for `action`.
    pub fn button_id(&self, action: ChooserAction) -> String {
        format!("{}-{}", self.id, action.name())
    }

    /// Run a transfer action.
    pub fn dispatch(&mut self, action: ChooserAction) {
        match action {
            ChooserAction::MoveSelectedToChosen => self.move_selected_to_chosen(),
            ChooserAction::MoveSelectedToAvailable => self.move_selected_to_available(),
            ChooserAction::MoveAllToChosen => self.move_all_to_chosen(),
            ChooserAction::MoveAllToAvailable => self.move_all_to_available(),
        }
    }

    /// Route a click on `element_id` to a button or a row of either pane.
    ///
    /// Returns true if the id belonged to this chooser.
    pub fn handle_click(&mut self, element_id: &str) -> bool {
        if let Some(action) = ChooserAction::ALL
            .into_iter()
            .find(|&action| self.button_id(action) == element_id)
        {
            self.dispatch(action);
            return true;
        }

        let hit = self.available.handle_click(element_id) || self.chosen.handle_click(element_id);
        if hit {
            self.render();
        }
        hit
    }
}
