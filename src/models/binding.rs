//! Editable field bindings
//!
//! A [`FieldBinding`] names one text field of a model and how to read and
//! write it. The inline editor is built from a binding instead of looking
//! fields up by name.

use super::person::Person;
use super::transaction::Transaction;
use crate::error::DebtError;

/// Getter/setter pair for a single text field of `T`
pub struct FieldBinding<T> {
    label: &'static str,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
}

impl<T> FieldBinding<T> {
    pub const fn new(label: &'static str, get: fn(&T) -> String, set: fn(&mut T, String)) -> Self {
        Self { label, get, set }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn get(&self, target: &T) -> String {
        (self.get)(target)
    }

    /// Trim and write a value; empty values are rejected
    pub fn set(&self, target: &mut T, value: &str) -> Result<(), DebtError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DebtError::Validation(format!(
                "{} cannot be empty",
                self.label
            )));
        }
        (self.set)(target, value.to_string());
        Ok(())
    }
}

// Manual impls: derives would require `T: Clone`/`T: Copy`.
impl<T> Clone for FieldBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldBinding<T> {}

impl<T> std::fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("label", &self.label)
            .finish()
    }
}

fn person_name(person: &Person) -> String {
    person.name.clone()
}

fn set_person_name(person: &mut Person, value: String) {
    person.rename(value);
}

fn transaction_title(txn: &Transaction) -> String {
    txn.title.clone()
}

fn set_transaction_title(txn: &mut Transaction, value: String) {
    txn.set_title(value);
}

fn transaction_description(txn: &Transaction) -> String {
    txn.description.clone()
}

fn set_transaction_description(txn: &mut Transaction, value: String) {
    txn.set_description(value);
}

pub const PERSON_NAME: FieldBinding<Person> = FieldBinding::new("Name", person_name, set_person_name);

pub const TRANSACTION_TITLE: FieldBinding<Transaction> =
    FieldBinding::new("Title", transaction_title, set_transaction_title);

pub const TRANSACTION_DESCRIPTION: FieldBinding<Transaction> = FieldBinding::new(
    "Description",
    transaction_description,
    set_transaction_description,
);
