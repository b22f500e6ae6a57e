//! TUI Views module
//!
//! The home view lists people, the detail view lists one person's
//! transactions. Both share the status bar and the inline editor line.

pub mod home;
pub mod person_detail;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::navigation::ViewKind;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    match app.current_view_kind() {
        ViewKind::Home => home::render(frame, app, layout.main),
        ViewKind::PersonDetail(id) => person_detail::render(frame, app, id, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AddPerson => dialogs::person::render(frame, app),
        ActiveDialog::AddTransaction(_) => dialogs::transaction::render(frame, app),
        ActiveDialog::EditAmount(_) => dialogs::amount::render(frame, app),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, app, action),
        ActiveDialog::None => {}
    }
}

/// Render the inline editor, if one is open, into its reserved line
fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let Some(edit) = &app.inline_edit else {
        return;
    };

    let block = Block::default()
        .title(" Enter save · Esc cancel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(edit.editor_input().clone().accent(app.theme.accent), inner);
}
