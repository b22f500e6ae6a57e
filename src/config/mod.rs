//! Configuration module for Debt Machine
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Theme resolution

pub mod paths;
pub mod settings;
pub mod theme;

pub use paths::DebtPaths;
pub use settings::{Settings, ThemeMode, ThemeSettings};
pub use theme::Theme;
