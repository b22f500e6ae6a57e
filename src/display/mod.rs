//! Display formatting for terminal output
//!
//! Plain-text tables for people and transactions, used by the
//! non-interactive commands.

pub mod person;
pub mod transaction;

pub use person::{format_last_transaction, format_person_details, format_person_list};
pub use transaction::{format_transaction_list, format_transaction_row, truncate};
