//! Selectable lists, a dual-pane chooser and scoped persistence.
//!
//! Widgets render to detached [`devdom::Element`] trees and receive every
//! collaborator (render callback, identity function, storage) explicitly.

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod storage;
pub mod widgets;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::config::KitConfig;
    pub use crate::storage::{StorageScope, StorageService};
    pub use crate::widgets::{ChooserAction, ListChooser, SelectableList, SelectionMode};

    pub use devdom::Element;
}
