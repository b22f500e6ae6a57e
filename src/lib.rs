//! Debt Machine - track money owed between you and the people you know
//!
//! Each person carries a list of credits (money they owe you) and debits
//! (money you owe them). Running totals are kept in step with every
//! transaction change, so balances never need recomputing from history.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and the resolved color theme
//! - `error`: Custom error types
//! - `models`: People, transactions, money and field bindings
//! - `navigation`: Route registry and the page's view stack
//! - `storage`: In-memory person repository plus the audit log
//! - `services`: Ledger operations with validation and auditing
//! - `session`: Storage and routing wired together
//! - `audit`: Append-only log of every change
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Non-interactive command handlers
//! - `tui`: The interactive terminal front-end
//!
//! # Example
//!
//! ```rust,ignore
//! use debt_machine::config::{DebtPaths, Settings};
//! use debt_machine::session::Session;
//!
//! let paths = DebtPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut session = Session::new(paths, &settings)?;
//! let alice = session.add_person("Alice")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod navigation;
pub mod services;
pub mod session;
pub mod storage;
pub mod tui;

pub use error::{DebtError, DebtResult};
