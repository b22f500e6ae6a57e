//! Home view
//!
//! Everyone you trade money with, their running totals, and the sum
//! across all of them.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_last_transaction;
use crate::services::DebtTotals;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

use super::render_editor;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area, app.is_editing());
    let totals = app.session.people().totals().unwrap_or_default();

    render_header(frame, app, &totals, layout.header);
    render_people_table(frame, app, layout.content);
    render_editor(frame, app, layout.editor);
}

fn render_header(frame: &mut Frame, app: &App, totals: &DebtTotals, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let theme = &app.theme;

    let block = Block::default()
        .title(" Debt Machine ")
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text));

    let line = Line::from(vec![
        Span::styled(
            format!(" {} people", totals.people),
            Style::default().fg(theme.text),
        ),
        Span::raw("  │  You owe "),
        Span::styled(
            totals.you_owe.format_with_symbol(symbol),
            Style::default().fg(theme.you_owe),
        ),
        Span::raw("  │  They owe "),
        Span::styled(
            totals.they_owe.format_with_symbol(symbol),
            Style::default().fg(theme.they_owe),
        ),
        Span::raw("  │  Net "),
        Span::styled(
            totals.net.format_with_symbol(symbol),
            Style::default()
                .fg(theme.net_color(totals.net.cents()))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_people_table(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let symbol = app.settings.currency_symbol.as_str();
    let people = app.people();

    let block = Block::default()
        .title(" People ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    if people.is_empty() {
        let hint = Paragraph::new(Line::from(vec![
            Span::raw(" No people yet. Press "),
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::raw(" to add someone."),
        ]))
        .style(Style::default().fg(theme.muted))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let widths = [
        Constraint::Min(16),    // Name
        Constraint::Length(12), // You owe
        Constraint::Length(12), // They owe
        Constraint::Length(12), // Net
        Constraint::Length(18), // Last change
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Name").style(bold),
        Cell::from("You owe").style(bold),
        Cell::from("They owe").style(bold),
        Cell::from("Net").style(bold),
        Cell::from("Last change").style(bold),
    ])
    .style(Style::default().fg(theme.warning))
    .height(1);

    let rows: Vec<Row> = people
        .iter()
        .map(|person| {
            let net = person.net_owed();
            Row::new(vec![
                Cell::from(person.name.clone()),
                Cell::from(person.money_you_owe().format_with_symbol(symbol))
                    .style(Style::default().fg(theme.you_owe)),
                Cell::from(person.money_they_owe().format_with_symbol(symbol))
                    .style(Style::default().fg(theme.they_owe)),
                Cell::from(net.format_with_symbol(symbol))
                    .style(Style::default().fg(theme.net_color(net.cents()))),
                Cell::from(format_last_transaction(person, &app.settings.date_format))
                    .style(Style::default().fg(theme.muted)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_person_index));

    frame.render_stateful_widget(table, area, &mut state);
}
