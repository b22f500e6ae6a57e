//! User settings for Debt Machine
//!
//! Manages user preferences including display currency, the default name
//! given to quickly-added people, the cosmetic loading delay and the theme.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::DebtPaths;
use crate::error::DebtError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Light or dark terminal palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Theme colors as written in the settings file
///
/// Colors accept any name or `#rrggbb` value ratatui understands. They are
/// resolved into a [`super::theme::Theme`] once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub mode: ThemeMode,

    /// Color for "money you owe them"
    #[serde(default = "default_you_owe_color")]
    pub you_owe_color: String,

    /// Color for "money they owe you"
    #[serde(default = "default_they_owe_color")]
    pub they_owe_color: String,

    /// Borders, titles and highlights
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_you_owe_color() -> String {
    "lightred".to_string()
}

fn default_they_owe_color() -> String {
    "lightgreen".to_string()
}

fn default_accent_color() -> String {
    "cyan".to_string()
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            you_owe_color: default_you_owe_color(),
            they_owe_color: default_they_owe_color(),
            accent_color: default_accent_color(),
        }
    }
}

/// User settings for Debt Machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Name given to people added without typing a name
    #[serde(default = "default_person_name")]
    pub default_person_name: String,

    /// Delay before and after list inserts/removals so the busy indicator shows
    ///
    /// Values above [`MAX_LOADING_DELAY_MS`] are treated as the maximum.
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Theme preferences
    #[serde(default)]
    pub theme: ThemeSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_person_name() -> String {
    "Anon".to_string()
}

/// Upper bound applied to `loading_delay_ms`
pub const MAX_LOADING_DELAY_MS: u64 = 5_000;

fn default_loading_delay_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_person_name: default_person_name(),
            loading_delay_ms: default_loading_delay_ms(),
            log_level: default_log_level(),
            theme: ThemeSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &DebtPaths) -> Result<Self, DebtError> {
        read_json(paths.settings_file())
            .map_err(|e| DebtError::Config(format!("Failed to load settings: {}", e)))
    }

    /// The busy-indicator delay, capped at [`MAX_LOADING_DELAY_MS`]
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms.min(MAX_LOADING_DELAY_MS))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DebtPaths) -> Result<(), DebtError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
