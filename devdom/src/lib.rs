pub mod element;
pub mod text;
pub mod types;

pub use element::{find_by_class, find_element, find_element_mut, generate_id, Content, Element};
pub use text::{display_width, render_lines, render_text};
pub use types::Direction;
