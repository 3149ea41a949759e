//! Selection types for list-like widgets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Selection mode for list-like widgets.
///
/// Fixed for the lifetime of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// Single item selection (radio-button style).
    Single,
    /// Multiple items can be selected (checkbox style).
    Multiple,
}

impl SelectionMode {
    /// Whether rows respond to clicks at all.
    pub fn is_selectable(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Single => write!(f, "single"),
            Self::Multiple => write!(f, "multiple"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection mode {0:?} (expected none, single or multiple)")]
pub struct ParseSelectionModeError(String);

impl FromStr for SelectionMode {
    type Err = ParseSelectionModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "single" => Ok(Self::Single),
            "multiple" | "multi" => Ok(Self::Multiple),
            _ => Err(ParseSelectionModeError(s.to_string())),
        }
    }
}

/// Tracks selected positions, in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    selected: Vec<usize>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Apply a click on `index`. Returns true if the selection changed.
    ///
    /// Single mode replaces the selection; clicking the selected index again
    /// keeps it selected. Multiple mode toggles membership.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected == [index] {
                    false
                } else {
                    self.selected.clear();
                    self.selected.push(index);
                    true
                }
            }
            SelectionMode::Multiple => {
                if let Some(pos) = self.selected.iter().position(|&i| i == index) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(index);
                }
                true
            }
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected indices in selection order.
    pub fn indices(&self) -> &[usize] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selections. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        had_any
    }

    /// Replace the selection wholesale, trimmed to what the mode allows.
    pub(crate) fn replace(&mut self, indices: Vec<usize>) {
        self.selected = match self.mode {
            SelectionMode::None => Vec::new(),
            SelectionMode::Single => indices.last().copied().into_iter().collect(),
            SelectionMode::Multiple => indices,
        };
    }
}
