//! Event handler for the TUI
//!
//! Routes key events to the open dialog, the inline editor or the current
//! view, in that order. Ticks run deferred ledger work.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::models::TransactionKind;
use crate::navigation::ViewKind;

use super::app::{ActiveDialog, App};
use super::dialogs::{self, confirm::ConfirmAction};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if app.is_editing() {
        return handle_editing_key(app, key);
    }

    handle_normal_key(app, key)
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Esc | KeyCode::Backspace => {
            app.back();
            return Ok(());
        }
        _ => {}
    }

    app.clear_status();
    match app.current_view_kind() {
        ViewKind::Home => handle_home_key(app, key),
        ViewKind::PersonDetail(_) => handle_person_detail_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let count = app.people().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => app.open_selected_person(),
        KeyCode::Char('a') | KeyCode::Char('n') => {
            if app.is_busy() {
                app.set_status("Still working, try again in a moment");
            } else {
                app.open_dialog(ActiveDialog::AddPerson);
            }
        }
        KeyCode::Char('e') => {
            if let Some(person) = app.selected_person() {
                app.begin_rename(&person);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(person) = app.selected_person() {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeletePerson {
                    id: person.id(),
                    name: person.name,
                }));
            }
        }
        _ => {}
    }

    Ok(())
}

fn handle_person_detail_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let count = app.transactions().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('c') => app.open_dialog(ActiveDialog::AddTransaction(TransactionKind::Credit)),
        KeyCode::Char('d') => app.open_dialog(ActiveDialog::AddTransaction(TransactionKind::Debit)),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(txn) = app.selected_transaction() {
                app.open_dialog(ActiveDialog::EditAmount(txn.id()));
            }
        }
        KeyCode::Char('t') => app.begin_transaction_edit(false),
        KeyCode::Char('m') => app.begin_transaction_edit(true),
        KeyCode::Char('n') => {
            if let Some(person) = app.current_person() {
                app.begin_rename(&person);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(txn) = app.selected_transaction() {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeleteTransaction {
                    id: txn.id(),
                    title: txn.title,
                }));
            }
        }
        _ => {}
    }

    Ok(())
}

/// Keys while an inline field editor is open
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_inline_edit(),
        KeyCode::Enter => app.commit_inline_edit(),
        _ => {
            let Some(edit) = app.inline_edit.as_mut() else {
                return Ok(());
            };
            let input = edit.editor_input_mut();
            match key.code {
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                KeyCode::Char(c) => input.insert(c),
                _ => {}
            }
        }
    }
    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            app.close_dialog();
        }
        ActiveDialog::AddPerson => {
            dialogs::person::handle_key(app, key);
        }
        ActiveDialog::AddTransaction(_) => {
            dialogs::transaction::handle_key(app, key);
        }
        ActiveDialog::EditAmount(_) => {
            dialogs::amount::handle_key(app, key);
        }
        ActiveDialog::Confirm(action) => {
            let action = action.clone();
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.close_dialog();
                    app.execute_confirmed(action);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}
