//! Reusable widgets for the TUI

pub mod editable_text;
pub mod input;

pub use editable_text::{EditMode, EditableText};
pub use input::TextInput;
