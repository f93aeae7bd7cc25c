//! Theme System.
//!
//! Semantic color slots resolved to [`Rgba`] at render time. ANSI slots
//! respect the user's terminal palette; RGB/hex slots are exact.
//!
//! # Example
//!
//! ```
//! use product_catalog::theme::get_preset;
//!
//! let nord = get_preset("nord").unwrap();
//! let primary = nord.primary.resolve();
//! assert!(!primary.is_terminal_default());
//! ```

use crate::types::Rgba;

pub mod presets;

pub use presets::*;

// =============================================================================
// ThemeColor
// =============================================================================

/// A theme color slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ThemeColor {
    /// Use terminal's default color.
    #[default]
    Default,
    /// ANSI palette index (0-255).
    Ansi(u8),
    Rgb(Rgba),
    /// Hex string (`#rrggbb`), parsed on resolve.
    Str(String),
}

impl ThemeColor {
    /// Resolve to Rgba. Unparseable strings resolve to magenta so they stand out.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
            Self::Str(s) => Rgba::from_hex(s).unwrap_or(Rgba::MAGENTA),
        }
    }
}

/// `u8` is an ANSI index.
impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

/// `u32` is an RGB integer (0xRRGGBB).
impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Semantic colors used by the screen.
///
/// `link` and `danger` color the user cell by sex (`m` / `f`).
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub description: String,

    /// Title, active tab.
    pub primary: ThemeColor,
    /// Reset button.
    pub success: ThemeColor,
    pub link: ThemeColor,
    pub danger: ThemeColor,

    pub text: ThemeColor,
    /// Placeholders, inert controls, footer.
    pub text_muted: ThemeColor,

    pub background: ThemeColor,
    /// Alternate table rows.
    pub background_muted: ThemeColor,

    pub border: ThemeColor,
    pub border_focus: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        terminal()
    }
}

impl Theme {
    pub fn primary(&self) -> Rgba {
        self.primary.resolve()
    }

    pub fn success(&self) -> Rgba {
        self.success.resolve()
    }

    pub fn link(&self) -> Rgba {
        self.link.resolve()
    }

    pub fn danger(&self) -> Rgba {
        self.danger.resolve()
    }

    pub fn text(&self) -> Rgba {
        self.text.resolve()
    }

    pub fn text_muted(&self) -> Rgba {
        self.text_muted.resolve()
    }

    pub fn bg(&self) -> Rgba {
        self.background.resolve()
    }

    pub fn bg_muted(&self) -> Rgba {
        self.background_muted.resolve()
    }

    pub fn border(&self) -> Rgba {
        self.border.resolve()
    }

    pub fn border_focus(&self) -> Rgba {
        self.border_focus.resolve()
    }
}
