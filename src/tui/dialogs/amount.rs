//! Edit amount dialog
//!
//! Changes the amount of one transaction. The owner's totals move by the
//! difference between the old and new amounts.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{parse_amount, Transaction, TransactionId};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

#[derive(Debug, Clone)]
pub struct AmountFormState {
    pub transaction_id: Option<TransactionId>,
    pub title: String,
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl AmountFormState {
    pub fn new() -> Self {
        Self {
            transaction_id: None,
            title: String::new(),
            amount_input: TextInput::new().label("Amount").focused(true),
            error_message: None,
        }
    }

    /// Prefill with the transaction's current amount
    pub fn for_transaction(txn: &Transaction) -> Self {
        let amount = txn.amount();
        Self {
            transaction_id: Some(txn.id()),
            title: txn.title.clone(),
            amount_input: TextInput::new()
                .label("Amount")
                .focused(true)
                .content(format!("{}.{:02}", amount.units(), amount.cents_part())),
            error_message: None,
        }
    }
}

impl Default for AmountFormState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.amount_form;
    let area = centered_rect_fixed(48, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Edit Amount: {} ", form.title))
        .title_style(
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(form.amount_input.clone().accent(app.theme.accent), chunks[0]);

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(app.theme.warning),
            )),
            chunks[1],
        );
    }

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(app.theme.accent)),
        Span::raw(" save  "),
        Span::styled("Esc", Style::default().fg(app.theme.accent)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(app.theme.muted)),
        chunks[2],
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.amount_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            if let Err(e) = save_amount(app) {
                app.amount_form.error_message = Some(e);
            }
        }
        KeyCode::Backspace => {
            form.error_message = None;
            form.amount_input.backspace();
        }
        KeyCode::Delete => form.amount_input.delete(),
        KeyCode::Left => form.amount_input.move_left(),
        KeyCode::Right => form.amount_input.move_right(),
        KeyCode::Home => form.amount_input.move_start(),
        KeyCode::End => form.amount_input.move_end(),
        KeyCode::Char(c) => {
            form.error_message = None;
            form.amount_input.insert(c);
        }
        _ => return false,
    }
    true
}

fn save_amount(app: &mut App) -> Result<(), String> {
    let id = app
        .amount_form
        .transaction_id
        .ok_or("No transaction selected")?;
    let amount = parse_amount(app.amount_form.amount_input.value()).map_err(|e| e.to_string())?;

    let txn = app
        .session
        .transactions()
        .set_amount(id, amount)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.set_status(format!(
        "'{}' is now {}",
        txn.title,
        txn.amount().format_with_symbol(&app.settings.currency_symbol)
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, Person, TransactionKind};

    #[test]
    fn test_prefill() {
        let mut person = Person::new("Alice");
        let id = person.add_transaction(NewTransaction {
            kind: TransactionKind::Debit,
            title: "Lunch".into(),
            description: "Tacos".into(),
            amount: Money::from_cents(1205),
        })
        .unwrap();

        let form = AmountFormState::for_transaction(person.transaction(id).unwrap());
        assert_eq!(form.amount_input.value(), "12.05");
        assert_eq!(form.transaction_id, Some(id));
        assert_eq!(form.title, "Lunch");
    }
}
