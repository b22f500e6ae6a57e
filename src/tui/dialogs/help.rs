//! Help dialog
//!
//! Shows the keys available on the current view

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::Theme;
use crate::navigation::ViewKind;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent));

    let paragraph = Paragraph::new(help_lines(app.current_view_kind(), &app.theme))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(view: ViewKind, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys", theme),
        Line::from(""),
        key_line("q", "Quit application", theme),
        key_line("?", "Show/hide help", theme),
        key_line("j/k", "Move selection down/up", theme),
        key_line("Esc", "Go back one view", theme),
        Line::from(""),
    ];

    match view {
        ViewKind::Home => {
            lines.push(heading("People", theme));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Open person", theme));
            lines.push(key_line("a", "Add person", theme));
            lines.push(key_line("e", "Rename person", theme));
            lines.push(key_line("x", "Delete person", theme));
        }
        ViewKind::PersonDetail(_) => {
            lines.push(heading("Transactions", theme));
            lines.push(Line::from(""));
            lines.push(key_line("c", "Add credit (they owe you)", theme));
            lines.push(key_line("d", "Add debit (you owe them)", theme));
            lines.push(key_line("e/Enter", "Edit amount", theme));
            lines.push(key_line("t", "Edit title", theme));
            lines.push(key_line("m", "Edit description", theme));
            lines.push(key_line("n", "Rename person", theme));
            lines.push(key_line("x", "Delete transaction", theme));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    lines
}

fn heading(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(theme.warning),
    ))
}

fn key_line(key: &str, description: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(theme.text)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonId;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_keys_follow_view() {
        let theme = Theme::default();

        let home = text(&help_lines(ViewKind::Home, &theme));
        assert!(home.contains("Add person"));
        assert!(!home.contains("Add credit"));

        let detail = text(&help_lines(ViewKind::PersonDetail(PersonId::new()), &theme));
        assert!(detail.contains("Add credit"));
        assert!(detail.contains("Edit description"));
    }
}
