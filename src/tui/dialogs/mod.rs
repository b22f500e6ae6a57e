//! Dialog modules for the TUI
//!
//! Modal forms for adding people and transactions, editing amounts,
//! confirming deletions and showing help.

pub mod amount;
pub mod confirm;
pub mod help;
pub mod person;
pub mod transaction;
