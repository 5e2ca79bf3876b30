use crossterm::style::Color;

use branchtree::domain::value_objects::Severity;

/// Design tokens for the branchtree CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "ℹ";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const FOLDER: &str = "📁";
    pub const CUSTOM_FOLDER: &str = "📦";
    pub const FILE: &str = "📄";
    pub const DOWNLOADS: &str = "↓";
    pub const CURSOR: &str = "›";
    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const INFO: &str = "[INFO]";

    // Tree expansion.
    pub const EXPAND: &str = "[-]";
    pub const COLLAPSE: &str = "[+]";

    pub const FOLDER: &str = "[D]";
    pub const CUSTOM_FOLDER: &str = "[R]";
    pub const FILE: &str = "[F]";
    pub const DOWNLOADS: &str = "dl:";
    pub const CURSOR: &str = ">";
    pub const SEPARATOR: &str = "-";
}

/// Pick the unicode or ascii variant of an icon
pub fn icon(unicode: bool, fancy: &'static str, plain: &'static str) -> &'static str {
    if unicode {
        fancy
    } else {
        plain
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => colors::INFO,
        Severity::Success => colors::SUCCESS,
        Severity::Warning => colors::WARNING,
        Severity::Danger => colors::ERROR,
    }
}

pub fn severity_icon(severity: Severity, unicode: bool) -> &'static str {
    match severity {
        Severity::Info => icon(unicode, icons::INFO, icons_ascii::INFO),
        Severity::Success => icon(unicode, icons::SUCCESS, icons_ascii::SUCCESS),
        Severity::Warning => icon(unicode, icons::WARNING, icons_ascii::WARNING),
        Severity::Danger => icon(unicode, icons::ERROR, icons_ascii::ERROR),
    }
}
