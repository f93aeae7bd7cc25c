//! Theme presets.
//!
//! - terminal (default - uses ANSI colors)
//! - dracula
//! - nord

use super::{Theme, ThemeColor};
use crate::error::CatalogError;

// =============================================================================
// Terminal Theme (Default)
// =============================================================================

/// Terminal theme - uses ANSI colors to respect user's terminal theme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        description: "Uses terminal default colors".to_string(),
        primary: ThemeColor::Ansi(12), // bright blue
        success: ThemeColor::Ansi(2),
        link: ThemeColor::Ansi(4),
        danger: ThemeColor::Ansi(1),
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        background: ThemeColor::Default,
        background_muted: ThemeColor::Default,
        border: ThemeColor::Ansi(7),
        border_focus: ThemeColor::Ansi(12),
    }
}

// =============================================================================
// Dracula Theme
// =============================================================================

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        description: "Dracula dark theme".to_string(),
        primary: ThemeColor::Str("#bd93f9".to_string()),
        success: ThemeColor::Str("#50fa7b".to_string()),
        link: ThemeColor::Str("#8be9fd".to_string()),
        danger: ThemeColor::Str("#ff5555".to_string()),
        text: 0xf8f8f2_u32.into(),
        text_muted: 0x6272a4_u32.into(),
        background: 0x282a36_u32.into(),
        background_muted: 0x343746_u32.into(),
        border: 0x44475a_u32.into(),
        border_focus: 0xbd93f9_u32.into(),
    }
}

// =============================================================================
// Nord Theme
// =============================================================================

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        description: "Nord arctic theme".to_string(),
        primary: 0x88c0d0_u32.into(),
        success: 0xa3be8c_u32.into(),
        link: 0x81a1c1_u32.into(),
        danger: 0xbf616a_u32.into(),
        text: 0xd8dee9_u32.into(),
        text_muted: 0x4c566a_u32.into(),
        background: 0x2e3440_u32.into(),
        background_muted: 0x3b4252_u32.into(),
        border: 0x4c566a_u32.into(),
        border_focus: 0x88c0d0_u32.into(),
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Get a preset by name (case-insensitive).
pub fn get_preset(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        _ => None,
    }
}

/// Like [`get_preset`], but an unknown name is an error listing the presets.
pub fn resolve_preset(name: &str) -> Result<Theme, CatalogError> {
    get_preset(name).ok_or_else(|| CatalogError::UnknownTheme {
        name: name.to_string(),
        available: preset_names().join(", "),
    })
}

/// List all available preset names.
pub fn preset_names() -> &'static [&'static str] {
    &["terminal", "dracula", "nord"]
}

// =============================================================================
// Tests
// =============================================================================
