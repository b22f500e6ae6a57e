//! Core data models for Debt Machine
//!
//! This module contains the data structures of the debt-tracking domain:
//! people, their credit/debit transactions, money and typed identifiers.

pub mod binding;
pub mod ids;
pub mod money;
pub mod person;
pub mod transaction;

pub use binding::{FieldBinding, PERSON_NAME, TRANSACTION_DESCRIPTION, TRANSACTION_TITLE};
pub use ids::{PersonId, TransactionId};
pub use money::Money;
pub use person::Person;
pub use transaction::{
    check_amount, parse_amount, NewTransaction, Transaction, TransactionDraft, TransactionKind,
    MAX_AMOUNT,
};
