//! Add person dialog
//!
//! One name field. A blank name is allowed and becomes the configured
//! default name when the person is created.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, PendingKind};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the add person dialog
#[derive(Debug, Clone)]
pub struct PersonFormState {
    pub name_input: TextInput,
}

impl PersonFormState {
    pub fn new() -> Self {
        Self {
            name_input: TextInput::new()
                .label("Name")
                .placeholder("Who do you trade money with?")
                .focused(true),
        }
    }
}

impl Default for PersonFormState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Person ")
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

    frame.render_widget(
        app.person_form.name_input.clone().accent(app.theme.accent),
        chunks[0],
    );

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(app.theme.accent)),
        Span::raw(" add  "),
        Span::styled("Esc", Style::default().fg(app.theme.accent)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(app.theme.muted)),
        chunks[2],
    );
}

/// Handle key input for the add person dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let input = &mut app.person_form.name_input;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let name = input.value().trim().to_string();
            app.close_dialog();
            app.schedule(PendingKind::AddPerson(name));
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => input.insert(c),
        _ => return false,
    }
    true
}
