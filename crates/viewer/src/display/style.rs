//! Canonical level styles.
//!
//! Levels are an open set; anything outside the known tokens renders with
//! the neutral style.

use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStyle {
    Error,
    Warning,
    Info,
    Debug,
    /// RAW / UNKNOWN fallback entries
    Unparsed,
    Neutral,
}

impl LevelStyle {
    /// Style for a level token, matched case-insensitively.
    pub fn for_level(level: &str) -> Self {
        match level.trim().to_ascii_uppercase().as_str() {
            "ERROR" | "CRITICAL" => LevelStyle::Error,
            "WARNING" | "WARN" => LevelStyle::Warning,
            "INFO" => LevelStyle::Info,
            "DEBUG" => LevelStyle::Debug,
            "RAW" | "UNKNOWN" => LevelStyle::Unparsed,
            _ => LevelStyle::Neutral,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            LevelStyle::Error => Color::Red,
            LevelStyle::Warning => Color::Yellow,
            LevelStyle::Info => Color::Blue,
            LevelStyle::Debug | LevelStyle::Neutral => Color::BrightBlack,
            LevelStyle::Unparsed => Color::Magenta,
        }
    }
}
