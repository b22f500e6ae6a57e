//! Inline editable text
//!
//! Shows a model field as plain text and switches to an input when edited.
//! Which field is read and written is decided by a [`FieldBinding`], never
//! by field name.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::models::FieldBinding;

use super::input::TextInput;

/// Whether the field is shown or being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Display,
    Editing,
}

/// A text field bound to one field of `T`
#[derive(Debug, Clone)]
pub struct EditableText<T> {
    binding: FieldBinding<T>,
    mode: EditMode,
    input: TextInput,
}

impl<T> EditableText<T> {
    pub fn new(binding: FieldBinding<T>) -> Self {
        Self {
            binding,
            mode: EditMode::Display,
            input: TextInput::new().label(binding.label()).focused(true),
        }
    }

    pub fn binding(&self) -> FieldBinding<T> {
        self.binding
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Switch to editing, loading the current value into the buffer
    pub fn begin(&mut self, target: &T) {
        self.input.set_value(self.binding.get(target));
        self.mode = EditMode::Editing;
    }

    /// Drop the buffer without writing anything
    pub fn cancel(&mut self) {
        self.input.clear();
        self.mode = EditMode::Display;
    }

    /// Leave editing and hand back the trimmed buffer for writing
    pub fn commit(&mut self) -> String {
        let value = self.input.value().trim().to_string();
        self.input.clear();
        self.mode = EditMode::Display;
        value
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// The line shown while not editing
    pub fn display_line(&self, target: &T, style: Style) -> Line<'static> {
        Line::from(Span::styled(self.binding.get(target), style))
    }
}
