//! CLI command handlers
//!
//! Non-interactive commands bridging clap argument parsing with the
//! library. People and transactions are only edited from the TUI.

pub mod audit;
pub mod config;
pub mod demo;

pub use audit::handle_audit_command;
pub use config::{handle_config_command, handle_init_command};
pub use demo::run_demo;
