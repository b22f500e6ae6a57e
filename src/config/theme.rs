//! Resolved terminal theme
//!
//! Built once from [`ThemeSettings`] at startup and handed to the TUI, so
//! views never consult global color constants.

use std::str::FromStr;

use ratatui::style::Color;

use super::settings::{ThemeMode, ThemeSettings};
use crate::error::DebtError;

/// Colors used by the terminal front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub you_owe: Color,
    pub they_owe: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight_bg: Color,
    pub warning: Color,
}

impl Theme {
    /// Resolve theme settings into concrete colors
    pub fn from_settings(settings: &ThemeSettings) -> Result<Self, DebtError> {
        let (text, muted, highlight_bg) = match settings.mode {
            ThemeMode::Dark => (Color::White, Color::DarkGray, Color::DarkGray),
            ThemeMode::Light => (Color::Black, Color::Gray, Color::Gray),
        };

        Ok(Self {
            you_owe: parse_color("you_owe_color", &settings.you_owe_color)?,
            they_owe: parse_color("they_owe_color", &settings.they_owe_color)?,
            accent: parse_color("accent_color", &settings.accent_color)?,
            text,
            muted,
            highlight_bg,
            warning: Color::Yellow,
        })
    }

    /// Color for a signed net balance (positive means the user owes)
    pub fn net_color(&self, net_cents: i64) -> Color {
        match net_cents {
            n if n > 0 => self.you_owe,
            n if n < 0 => self.they_owe,
            _ => self.text,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            you_owe: Color::LightRed,
            they_owe: Color::LightGreen,
            accent: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            highlight_bg: Color::DarkGray,
            warning: Color::Yellow,
        }
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, DebtError> {
    Color::from_str(value)
        .map_err(|_| DebtError::Config(format!("Invalid color for {}: '{}'", field, value)))
}
