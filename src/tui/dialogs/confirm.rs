//! Confirmation dialog
//!
//! Yes/no prompt shown before anything is deleted

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::{PersonId, TransactionId};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// What happens when the user confirms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeletePerson { id: PersonId, name: String },
    DeleteTransaction { id: TransactionId, title: String },
}

impl ConfirmAction {
    pub fn message(&self) -> String {
        match self {
            Self::DeletePerson { name, .. } => {
                format!("Delete '{}' and settle all of their transactions?", name)
            }
            Self::DeleteTransaction { title, .. } => format!("Delete transaction '{}'?", title),
        }
    }
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, app: &App, action: &ConfirmAction) {
    let area = centered_rect_fixed(54, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(app.theme.warning)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.warning));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            action.message(),
            Style::default().fg(app.theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(app.theme.warning)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let person = ConfirmAction::DeletePerson {
            id: PersonId::new(),
            name: "Alice".into(),
        };
        assert!(person.message().starts_with("Delete 'Alice'"));

        let txn = ConfirmAction::DeleteTransaction {
            id: TransactionId::new(),
            title: "Rent".into(),
        };
        assert_eq!(txn.message(), "Delete transaction 'Rent'?");
    }
}
