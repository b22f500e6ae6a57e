//! Person detail view
//!
//! One person's totals and their credits and debits.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_last_transaction;
use crate::models::{Person, PersonId, TransactionKind};
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

use super::render_editor;

pub fn render(frame: &mut Frame, app: &mut App, person_id: PersonId, area: Rect) {
    let layout = MainPanelLayout::new(area, app.is_editing());

    let person = match app.session.people().get(person_id) {
        Ok(Some(person)) => person,
        _ => {
            let missing = Paragraph::new(" This person no longer exists. Press Esc to go back.")
                .style(Style::default().fg(app.theme.warning))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(missing, area);
            return;
        }
    };

    render_header(frame, app, &person, layout.header);
    render_transaction_table(frame, app, &person, layout.content);
    render_editor(frame, app, layout.editor);
}

fn render_header(frame: &mut Frame, app: &App, person: &Person, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let theme = &app.theme;
    let net = person.net_owed();

    let block = Block::default()
        .title(format!(" {} ", person.name))
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text));

    let line = Line::from(vec![
        Span::raw(" You owe "),
        Span::styled(
            person.money_you_owe().format_with_symbol(symbol),
            Style::default().fg(theme.you_owe),
        ),
        Span::raw("  │  They owe "),
        Span::styled(
            person.money_they_owe().format_with_symbol(symbol),
            Style::default().fg(theme.they_owe),
        ),
        Span::raw("  │  Net "),
        Span::styled(
            net.format_with_symbol(symbol),
            Style::default()
                .fg(theme.net_color(net.cents()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  │  Last change {}",
                format_last_transaction(person, &app.settings.date_format)
            ),
            Style::default().fg(theme.muted),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_transaction_table(frame: &mut Frame, app: &App, person: &Person, area: Rect) {
    let theme = &app.theme;
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(" Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    if person.transactions().is_empty() {
        let hint = Paragraph::new(Line::from(vec![
            Span::raw(" No transactions. Press "),
            Span::styled("c", Style::default().fg(theme.they_owe)),
            Span::raw(" for a credit or "),
            Span::styled("d", Style::default().fg(theme.you_owe)),
            Span::raw(" for a debit."),
        ]))
        .style(Style::default().fg(theme.muted))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let widths = [
        Constraint::Length(7),  // Kind
        Constraint::Length(20), // Title
        Constraint::Min(20),    // Description
        Constraint::Length(12), // Amount
        Constraint::Length(18), // Created
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Kind").style(bold),
        Cell::from("Title").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Created").style(bold),
    ])
    .style(Style::default().fg(theme.warning))
    .height(1);

    let rows: Vec<Row> = person
        .transactions()
        .iter()
        .map(|txn| {
            let color = match txn.kind() {
                TransactionKind::Credit => theme.they_owe,
                TransactionKind::Debit => theme.you_owe,
            };
            Row::new(vec![
                Cell::from(txn.kind().to_string()).style(Style::default().fg(color)),
                Cell::from(txn.title.clone()),
                Cell::from(txn.description.clone()),
                Cell::from(txn.amount().format_with_symbol(symbol))
                    .style(Style::default().fg(color)),
                Cell::from(
                    txn.created_at
                        .format(&app.settings.date_format)
                        .to_string(),
                )
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
    state.select(Some(app.selected_transaction_index));

    frame.render_stateful_widget(table, area, &mut state);
}
