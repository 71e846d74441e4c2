//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are Catppuccin variants compiled into the plugin. Custom
//! themes are TOML files with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#89b4fa"
//! cursor_fg = "#1e1e2e"
//! cursor_bg = "#f5e0dc"
//! button_fg = "#1e1e2e"
//! button_bg = "#89b4fa"
//! alert_fg = "#f38ba8"
//! notice_fg = "#f9e2af"
//! badge_fg = "#1e1e2e"
//! positive = "#a6e3a1"
//! negative = "#f38ba8"
//! neutral = "#89b4fa"
//! irrelevant = "#9399b2"
//! unclassified = "#cba6f7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zentiment::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! print!("{}", Theme::fg(&theme.colors.header_fg));
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{Result, SentimentCategory, ZentimentError};

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title color.
    pub header_fg: String,
    /// Optional title background.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Subtitle, placeholder, footer and disabled controls.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,
    /// Text area frame.
    pub input_border: String,

    pub cursor_fg: String,
    pub cursor_bg: String,

    /// Enabled Analyze/Clear controls.
    pub button_fg: String,
    pub button_bg: String,

    /// Validation and failure messages.
    pub alert_fg: String,
    /// Permission notice.
    pub notice_fg: String,

    /// Text drawn on top of a sentiment badge.
    pub badge_fg: String,
    pub positive: String,
    pub negative: String,
    pub neutral: String,
    pub irrelevant: String,
    /// Labels outside the known vocabulary.
    pub unclassified: String,
}

impl ThemeColors {
    /// Badge background for a result category.
    #[must_use]
    pub fn badge(&self, category: SentimentCategory) -> &str {
        match category {
            SentimentCategory::Positive => &self.positive,
            SentimentCategory::Negative => &self.negative,
            SentimentCategory::Neutral => &self.neutral,
            SentimentCategory::Irrelevant => &self.irrelevant,
            SentimentCategory::Unclassified => &self.unclassified,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ZentimentError::Io`] if the file cannot be read and
    /// [`ZentimentError::Theme`] if it does not describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ZentimentError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Hex color to RGB; malformed input renders white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
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

    /// Palette used if the bundled default ever fails to parse.
    fn fallback() -> Self {
        let hex = |s: &str| s.to_string();
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: hex("#cdd6f4"),
                header_bg: None,
                text_normal: hex("#cdd6f4"),
                text_dim: hex("#6c7086"),
                border: hex("#45475a"),
                input_border: hex("#89b4fa"),
                cursor_fg: hex("#1e1e2e"),
                cursor_bg: hex("#f5e0dc"),
                button_fg: hex("#1e1e2e"),
                button_bg: hex("#89b4fa"),
                alert_fg: hex("#f38ba8"),
                notice_fg: hex("#f9e2af"),
                badge_fg: hex("#1e1e2e"),
                positive: hex("#a6e3a1"),
                negative: hex("#f38ba8"),
                neutral: hex("#89b4fa"),
                irrelevant: hex("#9399b2"),
                unclassified: hex("#cba6f7"),
            },
        }
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_matches_bundled_mocha() {
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn badge_colors_follow_category() {
        let colors = Theme::default().colors;
        assert_eq!(colors.badge(SentimentCategory::Positive), colors.positive);
        assert_eq!(colors.badge(SentimentCategory::Unclassified), colors.unclassified);
    }

    #[test]
    fn custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        theme.colors.positive = "#00ff00".to_string();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn incomplete_theme_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"partial\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ZentimentError::Theme(_)));
    }
}
