//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Ledger and routing state live in the [`Session`]; everything here is
//! presentation state (selection, dialogs, inline editors, pending work).

use std::time::Instant;

use tracing::{debug, warn};

use crate::config::{Settings, Theme};
use crate::error::DebtError;
use crate::models::{
    Person, PersonId, Transaction, TransactionId, TransactionKind, PERSON_NAME,
    TRANSACTION_DESCRIPTION, TRANSACTION_TITLE,
};
use crate::navigation::ViewKind;
use crate::session::Session;

use super::dialogs::amount::AmountFormState;
use super::dialogs::confirm::ConfirmAction;
use super::dialogs::person::PersonFormState;
use super::dialogs::transaction::TransactionFormState;
use super::widgets::EditableText;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddPerson,
    AddTransaction(TransactionKind),
    EditAmount(TransactionId),
    Confirm(ConfirmAction),
    Help,
}

/// An inline editor open on one field
#[derive(Debug, Clone)]
pub enum InlineEdit {
    Person(PersonId, EditableText<Person>),
    Transaction(TransactionId, EditableText<Transaction>),
}

impl InlineEdit {
    pub fn editor_input_mut(&mut self) -> &mut super::widgets::TextInput {
        match self {
            Self::Person(_, editor) => editor.input_mut(),
            Self::Transaction(_, editor) => editor.input_mut(),
        }
    }

    pub fn editor_input(&self) -> &super::widgets::TextInput {
        match self {
            Self::Person(_, editor) => editor.input(),
            Self::Transaction(_, editor) => editor.input(),
        }
    }
}

/// Ledger work deferred until the loading delay has passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingKind {
    AddPerson(String),
    RemovePerson(PersonId),
}

#[derive(Debug, Clone)]
pub struct PendingAction {
    pub kind: PendingKind,
    pub due: Instant,
}

/// Main application state
pub struct App {
    pub session: Session,

    pub settings: Settings,

    /// Colors resolved once from settings
    pub theme: Theme,

    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Selected row on the home view
    pub selected_person_index: usize,

    /// Selected row on a person's detail view
    pub selected_transaction_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    pub person_form: PersonFormState,
    pub transaction_form: TransactionFormState,
    pub amount_form: AmountFormState,

    pub inline_edit: Option<InlineEdit>,

    pub pending: Option<PendingAction>,
}

impl App {
    pub fn new(session: Session, settings: Settings, theme: Theme) -> Self {
        Self {
            session,
            settings,
            theme,
            should_quit: false,
            active_dialog: ActiveDialog::None,
            selected_person_index: 0,
            selected_transaction_index: 0,
            status_message: None,
            person_form: PersonFormState::new(),
            transaction_form: TransactionFormState::new(TransactionKind::Credit),
            amount_form: AmountFormState::new(),
            inline_edit: None,
            pending: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog, resetting its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddPerson => {
                self.person_form = PersonFormState::new();
            }
            ActiveDialog::AddTransaction(kind) => {
                self.transaction_form = TransactionFormState::new(*kind);
            }
            ActiveDialog::EditAmount(txn_id) => {
                let txn = self.session.transactions().get(*txn_id);
                match txn {
                    Ok(Some(txn)) => self.amount_form = AmountFormState::for_transaction(&txn),
                    _ => {
                        self.set_status("Transaction no longer exists");
                        return;
                    }
                }
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn is_editing(&self) -> bool {
        self.inline_edit.is_some()
    }

    /// What the top of the page is showing
    pub fn current_view_kind(&self) -> ViewKind {
        self.session.router().current_view().kind()
    }

    pub fn people(&self) -> Vec<Person> {
        self.session.people().list().unwrap_or_default()
    }

    pub fn selected_person(&self) -> Option<Person> {
        self.people().into_iter().nth(self.selected_person_index)
    }

    /// The person whose detail view is open
    pub fn current_person(&self) -> Option<Person> {
        self.session.current_person().ok().flatten()
    }

    /// Transactions of the open person
    pub fn transactions(&self) -> Vec<Transaction> {
        self.current_person()
            .map(|p| p.transactions().to_vec())
            .unwrap_or_default()
    }

    pub fn selected_transaction(&self) -> Option<Transaction> {
        self.transactions()
            .into_iter()
            .nth(self.selected_transaction_index)
    }

    pub fn move_up(&mut self) {
        let index = match self.current_view_kind() {
            ViewKind::Home => &mut self.selected_person_index,
            ViewKind::PersonDetail(_) => &mut self.selected_transaction_index,
        };
        *index = index.saturating_sub(1);
    }

    pub fn move_down(&mut self, max: usize) {
        let index = match self.current_view_kind() {
            ViewKind::Home => &mut self.selected_person_index,
            ViewKind::PersonDetail(_) => &mut self.selected_transaction_index,
        };
        if *index < max.saturating_sub(1) {
            *index += 1;
        }
    }

    /// Keep selections inside their lists after the data changed
    pub fn clamp_selection(&mut self) {
        let people = self.people().len();
        self.selected_person_index = self.selected_person_index.min(people.saturating_sub(1));
        let txns = self.transactions().len();
        self.selected_transaction_index =
            self.selected_transaction_index.min(txns.saturating_sub(1));
    }

    /// Open the detail view of the selected person
    pub fn open_selected_person(&mut self) {
        let Some(person) = self.selected_person() else {
            return;
        };
        match self.session.open_person(person.id()) {
            Ok(()) => self.selected_transaction_index = 0,
            Err(e) => self.set_status(format!("Cannot open {}: {}", person.name, e)),
        }
    }

    /// Pop the top view
    pub fn back(&mut self) {
        match self.session.back() {
            Ok(()) => self.clamp_selection(),
            Err(DebtError::EmptyViewStack) => self.set_status("Already at the home view"),
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }

    /// Defer ledger work by the configured loading delay
    pub fn schedule(&mut self, kind: PendingKind) {
        self.schedule_at(kind, Instant::now());
    }

    pub fn schedule_at(&mut self, kind: PendingKind, now: Instant) {
        if self.pending.is_some() {
            self.set_status("Still working, try again in a moment");
            return;
        }
        let due = now
            .checked_add(self.settings.loading_delay())
            .unwrap_or(now);
        debug!(?kind, "scheduled pending action");
        self.pending = Some(PendingAction { kind, due });
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the pending action once it is due
    pub fn tick(&mut self, now: Instant) {
        let due = matches!(&self.pending, Some(p) if p.due <= now);
        if !due {
            return;
        }
        if let Some(action) = self.pending.take() {
            self.run_pending(action.kind);
        }
    }

    fn run_pending(&mut self, kind: PendingKind) {
        match kind {
            PendingKind::AddPerson(name) => match self.session.add_person(&name) {
                Ok(person) => {
                    self.selected_person_index = self.people().len().saturating_sub(1);
                    self.set_status(format!("Added {}", person.name));
                }
                Err(e) => self.set_status(format!("Failed to add person: {}", e)),
            },
            PendingKind::RemovePerson(id) => match self.session.remove_person(id) {
                Ok(person) => {
                    self.clamp_selection();
                    self.set_status(format!("Removed {}", person.name));
                }
                Err(e) => {
                    warn!(person = %id, error = %e, "failed to remove person");
                    self.set_status(format!("Failed to remove person: {}", e));
                }
            },
        }
    }

    /// Run a confirmed deletion
    pub fn execute_confirmed(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeletePerson { id, .. } => {
                self.schedule(PendingKind::RemovePerson(id));
            }
            ConfirmAction::DeleteTransaction { id, .. } => {
                let deleted = self.session.transactions().delete(id);
                match deleted {
                    Ok(txn) => {
                        self.clamp_selection();
                        self.set_status(format!("Deleted '{}'", txn.title));
                    }
                    Err(e) => self.set_status(format!("Failed to delete: {}", e)),
                }
            }
        }
    }

    /// Start renaming a person inline
    pub fn begin_rename(&mut self, person: &Person) {
        let mut editor = EditableText::new(PERSON_NAME);
        editor.begin(person);
        self.inline_edit = Some(InlineEdit::Person(person.id(), editor));
    }

    /// Start editing the selected transaction's title or description
    pub fn begin_transaction_edit(&mut self, description: bool) {
        let Some(txn) = self.selected_transaction() else {
            self.set_status("No transaction selected");
            return;
        };
        let binding = if description {
            TRANSACTION_DESCRIPTION
        } else {
            TRANSACTION_TITLE
        };
        let mut editor = EditableText::new(binding);
        editor.begin(&txn);
        self.inline_edit = Some(InlineEdit::Transaction(txn.id(), editor));
    }

    pub fn cancel_inline_edit(&mut self) {
        if let Some(mut edit) = self.inline_edit.take() {
            match &mut edit {
                InlineEdit::Person(_, editor) => editor.cancel(),
                InlineEdit::Transaction(_, editor) => editor.cancel(),
            }
        }
    }

    /// Write the inline editor's buffer through the owning service
    ///
    /// On a validation error the editor stays open.
    pub fn commit_inline_edit(&mut self) {
        let Some(mut edit) = self.inline_edit.take() else {
            return;
        };

        let result = match &mut edit {
            InlineEdit::Person(id, editor) => {
                let binding = editor.binding();
                let value = editor.input().value().to_string();
                self.session
                    .people()
                    .edit_field(*id, binding, &value)
                    .map(|_| editor.commit())
            }
            InlineEdit::Transaction(id, editor) => {
                let binding = editor.binding();
                let value = editor.input().value().to_string();
                self.session
                    .transactions()
                    .edit_field(*id, binding, &value)
                    .map(|_| editor.commit())
            }
        };

        match result {
            Ok(value) => self.set_status(format!("Saved \"{}\"", value)),
            Err(e) if e.is_validation() => {
                self.set_status(e.to_string());
                self.inline_edit = Some(edit);
            }
            Err(e) => self.set_status(format!("Failed to save: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::settings::MAX_LOADING_DELAY_MS;
    use crate::config::DebtPaths;
    use crate::models::{Money, NewTransaction};
    use tempfile::TempDir;

    fn create_app(delay_ms: u64) -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DebtPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            loading_delay_ms: delay_ms,
            ..Settings::default()
        };
        let session = Session::new(paths, &settings).unwrap();
        let theme = Theme::from_settings(&settings.theme).unwrap();
        (temp_dir, App::new(session, settings, theme))
    }

    #[test]
    fn test_pending_add_waits_for_delay() {
        let (_temp, mut app) = create_app(250);
        let start = Instant::now();

        app.schedule_at(PendingKind::AddPerson("Alice".into()), start);
        assert!(app.is_busy());

        app.tick(start + Duration::from_millis(100));
        assert!(app.people().is_empty());

        app.tick(start + Duration::from_millis(250));
        assert!(!app.is_busy());
        assert_eq!(app.people()[0].name, "Alice");
        assert_eq!(app.status_message.as_deref(), Some("Added Alice"));
    }

    #[test]
    fn test_huge_delay_is_capped() {
        let (_temp, mut app) = create_app(u64::MAX);
        let start = Instant::now();

        app.schedule_at(PendingKind::AddPerson("Alice".into()), start);
        app.tick(start + Duration::from_millis(MAX_LOADING_DELAY_MS - 1));
        assert!(app.is_busy());

        app.tick(start + Duration::from_millis(MAX_LOADING_DELAY_MS));
        assert!(!app.is_busy());
        assert_eq!(app.people()[0].name, "Alice");
    }

    #[test]
    fn test_second_schedule_refused_while_busy() {
        let (_temp, mut app) = create_app(250);
        let start = Instant::now();

        app.schedule_at(PendingKind::AddPerson("Alice".into()), start);
        app.schedule_at(PendingKind::AddPerson("Bob".into()), start);
        app.tick(start + Duration::from_secs(1));

        let names: Vec<_> = app.people().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn test_open_person_and_back() {
        let (_temp, mut app) = create_app(0);
        app.schedule(PendingKind::AddPerson("Alice".into()));
        app.tick(Instant::now() + Duration::from_millis(1));

        app.open_selected_person();
        assert!(matches!(app.current_view_kind(), ViewKind::PersonDetail(_)));

        app.back();
        assert_eq!(app.current_view_kind(), ViewKind::Home);

        app.back();
        assert_eq!(app.status_message.as_deref(), Some("Already at the home view"));
    }

    #[test]
    fn test_remove_person_clamps_selection() {
        let (_temp, mut app) = create_app(0);
        for name in ["Alice", "Bob"] {
            app.schedule(PendingKind::AddPerson(name.into()));
            app.tick(Instant::now() + Duration::from_millis(1));
        }
        assert_eq!(app.selected_person_index, 1);

        let bob = app.selected_person().unwrap();
        app.execute_confirmed(ConfirmAction::DeletePerson {
            id: bob.id(),
            name: bob.name.clone(),
        });
        app.tick(Instant::now() + Duration::from_millis(1));

        assert_eq!(app.people().len(), 1);
        assert_eq!(app.selected_person_index, 0);
        assert!(!app.session.router().is_registered(&bob.route()));
    }

    #[test]
    fn test_inline_rename() {
        let (_temp, mut app) = create_app(0);
        let alice = app.session.add_person("Alice").unwrap();

        app.begin_rename(&alice);
        let input = app.inline_edit.as_mut().unwrap().editor_input_mut();
        input.clear();
        for c in " Alicia ".chars() {
            input.insert(c);
        }
        app.commit_inline_edit();

        assert!(!app.is_editing());
        assert_eq!(app.people()[0].name, "Alicia");
    }

    #[test]
    fn test_inline_edit_rejects_empty_and_stays_open() {
        let (_temp, mut app) = create_app(0);
        let alice = app.session.add_person("Alice").unwrap();
        app.session
            .transactions()
            .create(
                alice.id(),
                NewTransaction {
                    kind: TransactionKind::Debit,
                    title: "Lunch".into(),
                    description: "Tacos".into(),
                    amount: Money::from_cents(1500),
                },
            )
            .unwrap();
        app.session.open_person(alice.id()).unwrap();

        app.begin_transaction_edit(false);
        app.inline_edit.as_mut().unwrap().editor_input_mut().clear();
        app.commit_inline_edit();

        assert!(app.is_editing());
        assert_eq!(app.transactions()[0].title, "Lunch");
        app.cancel_inline_edit();
        assert!(!app.is_editing());
    }

    #[test]
    fn test_delete_transaction_confirmed() {
        let (_temp, mut app) = create_app(0);
        let alice = app.session.add_person("Alice").unwrap();
        let txn = app
            .session
            .transactions()
            .create(
                alice.id(),
                NewTransaction {
                    kind: TransactionKind::Credit,
                    title: "Rent".into(),
                    description: "May".into(),
                    amount: Money::from_cents(2000),
                },
            )
            .unwrap();
        app.session.open_person(alice.id()).unwrap();

        app.execute_confirmed(ConfirmAction::DeleteTransaction {
            id: txn.id(),
            title: txn.title.clone(),
        });

        assert!(app.transactions().is_empty());
        assert!(app.current_person().unwrap().net_owed().is_zero());
    }
}
