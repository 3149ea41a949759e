//! List widgets.

pub mod chooser;
pub mod list;
pub mod selection;

pub use chooser::{ChooserAction, IdentityFn, ListChooser};
pub use list::{RenderFn, SelectableList, SelectionCallback};
pub use selection::{ParseSelectionModeError, Selection, SelectionMode};
