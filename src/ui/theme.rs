//! Theme management and ANSI escape sequence generation.
//!
//! Supports the built-in light and dark palettes plus custom themes loaded
//! from TOML files, and converts hex colors to 24-bit ANSI escapes.
//!
//! # Built-in Themes
//!
//! - `dishboard-light`: saffron accents on a light terminal (default)
//! - `dishboard-dark`: turmeric accents on a dark terminal
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#E65100"
//! text_normal = "#212121"
//! text_dim = "#757575"
//! border = "#E0E0E0"
//! selection_fg = "#FFFFFF"
//! selection_bg = "#FF9933"
//! search_bar_border = "#FF9933"
//! match_highlight_fg = "#212121"
//! match_highlight_bg = "#FFD700"
//! empty_state_fg = "#2196F3"
//! alert_fg = "#E41E31"
//! ```
//!
//! # Example
//!
//! ```
//! use dishboard::ui::theme::Theme;
//!
//! let theme = Theme::from_name("dishboard-dark").unwrap();
//! print!("{}Low Stock{}", Theme::fg(&theme.colors.alert_fg), Theme::reset());
//! ```

use crate::domain::error::{DishboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "dishboard-light";

/// Color scheme for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#RRGGBB"`) for every rendered element.
///
/// Status and category colors are not part of the theme; they come from the
/// display descriptors so a status looks the same under every theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Subtitles, tags and the footer.
    pub text_dim: String,

    pub border: String,

    /// Selected chip or tab.
    pub selection_fg: String,
    pub selection_bg: String,

    pub search_bar_border: String,
    /// Query matches inside row titles.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Alert banner title.
    pub alert_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dishboard-light" => include_str!("../../themes/dishboard-light.toml"),
            "dishboard-dark" => include_str!("../../themes/dishboard-dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DishboardError::Theme`] if the file cannot be read or its
    /// content is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            DishboardError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| DishboardError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `dishboard-light` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the unit tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in dishboard-light theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["dishboard-light", "dishboard-dark"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn fg_and_bg_escapes() {
        assert_eq!(Theme::fg("#FF9933"), "\u{1b}[38;2;255;153;51m");
        assert_eq!(Theme::bg("2196F3"), "\u{1b}[48;2;33;150;243m");
        assert_eq!(Theme::fg("not-a-color"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "house".to_string();
        theme.colors.alert_fg = "#000000".to_string();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn incomplete_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"partial\"\n[colors]\nheader_fg = \"#000000\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(DishboardError::Theme(_))));
    }

    #[test]
    fn missing_theme_file_is_a_theme_error() {
        assert!(matches!(
            Theme::from_file("/nonexistent/dishboard/theme.toml"),
            Err(DishboardError::Theme(_))
        ));
    }
}
