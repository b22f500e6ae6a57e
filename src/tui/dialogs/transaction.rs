//! Add credit/debit dialog
//!
//! Modal form with title, description and amount fields. Validation
//! failures keep the dialog open and show the message inline.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{TransactionDraft, TransactionKind};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Title,
    Description,
    Amount,
}

impl TransactionField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Description => Self::Title,
            Self::Amount => Self::Description,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub kind: TransactionKind,
    pub focused_field: TransactionField,
    pub title_input: TextInput,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl TransactionFormState {
    pub fn new(kind: TransactionKind) -> Self {
        let mut state = Self {
            kind,
            focused_field: TransactionField::Title,
            title_input: TextInput::new().label("Title").placeholder("Short label"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.title_input.focused = self.focused_field == TransactionField::Title;
        self.description_input.focused = self.focused_field == TransactionField::Description;
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            TransactionField::Title => &mut self.title_input,
            TransactionField::Description => &mut self.description_input,
            TransactionField::Amount => &mut self.amount_input,
        }
    }

    /// The raw form contents, not yet validated
    pub fn draft(&self) -> TransactionDraft {
        TransactionDraft::new(
            self.kind,
            self.title_input.value(),
            self.description_input.value(),
            self.amount_input.value(),
        )
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.transaction_form;
    let area = centered_rect_fixed(60, 12, frame.area());
    frame.render_widget(Clear, area);

    let color = match form.kind {
        TransactionKind::Credit => app.theme.they_owe,
        TransactionKind::Debit => app.theme.you_owe,
    };
    let title = match form.kind {
        TransactionKind::Credit => " Add Credit (they owe you) ",
        TransactionKind::Debit => " Add Debit (you owe them) ",
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (input, chunk) in [
        (&form.title_input, chunks[0]),
        (&form.description_input, chunks[1]),
        (&form.amount_input, chunks[2]),
    ] {
        frame.render_widget(input.clone().accent(app.theme.accent), chunk);
    }

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(app.theme.warning),
            )),
            chunks[4],
        );
    }

    let hint = Line::from(vec![
        Span::styled("Tab", Style::default().fg(app.theme.accent)),
        Span::raw(" next field  "),
        Span::styled("Enter", Style::default().fg(app.theme.accent)),
        Span::raw(" save  "),
        Span::styled("Esc", Style::default().fg(app.theme.accent)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(app.theme.muted)),
        chunks[5],
    );
}

/// Handle key input for the transaction dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            if let Err(e) = save_transaction(app) {
                app.transaction_form.set_error(e);
            }
        }
        KeyCode::Backspace => {
            form.clear_error();
            form.focused_input().backspace();
        }
        KeyCode::Delete => {
            form.clear_error();
            form.focused_input().delete();
        }
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),
        KeyCode::Char(c) => {
            form.clear_error();
            form.focused_input().insert(c);
        }
        _ => return false,
    }
    true
}

fn save_transaction(app: &mut App) -> Result<(), String> {
    let person = app
        .current_person()
        .ok_or("Open a person before adding transactions")?;
    let draft = app.transaction_form.draft();

    let txn = app
        .session
        .transactions()
        .create_from_draft(person.id(), &draft)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.selected_transaction_index = app.transactions().len().saturating_sub(1);
    app.set_status(format!(
        "Added {} '{}' {}",
        txn.kind().to_string().to_lowercase(),
        txn.title,
        txn.amount().format_with_symbol(&app.settings.currency_symbol)
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut form = TransactionFormState::new(TransactionKind::Debit);
        assert!(form.title_input.focused);

        form.next_field();
        assert_eq!(form.focused_field, TransactionField::Description);
        assert!(form.description_input.focused && !form.title_input.focused);

        form.prev_field();
        form.prev_field();
        assert_eq!(form.focused_field, TransactionField::Amount);
    }

    #[test]
    fn test_draft_reflects_inputs() {
        let mut form = TransactionFormState::new(TransactionKind::Credit);
        form.title_input.set_value("Rent");
        form.description_input.set_value("May");
        form.amount_input.set_value("20");

        let new = form.draft().validate().unwrap();
        assert_eq!(new.kind, TransactionKind::Credit);
        assert_eq!(new.amount.cents(), 2000);
    }

    #[test]
    fn test_invalid_draft() {
        let mut form = TransactionFormState::new(TransactionKind::Credit);
        form.title_input.set_value("Rent");
        form.description_input.set_value("May");
        form.amount_input.set_value("-5");

        assert!(form.draft().validate().unwrap_err().is_validation());
    }
}
