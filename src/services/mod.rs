//! Service layer for Debt Machine
//!
//! Services sit on top of the storage layer and own validation, audit
//! logging and the cross-entity rules of the ledger.

pub mod person;
pub mod transaction;

pub use person::{DebtTotals, PersonService};
pub use transaction::TransactionService;
