//! Terminal User Interface module
//!
//! A ratatui front-end over the session: a home view listing people, a
//! detail view per person, modal dialogs for data entry and inline
//! editors for single fields.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
