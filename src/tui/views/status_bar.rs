//! Status bar view
//!
//! Shows the current route, a busy marker while deferred work is pending,
//! the last status message and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        format!(" {} ", app.session.router().current_view().route()),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )];

    if app.is_busy() {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            "Working… ",
            Style::default().fg(theme.warning).add_modifier(Modifier::ITALIC),
        ));
    }

    if let Some(message) = &app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(theme.warning),
        ));
    }

    let hints = if app.is_editing() {
        " Enter:Save  Esc:Cancel "
    } else {
        " q:Quit  ?:Help  Esc:Back "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
