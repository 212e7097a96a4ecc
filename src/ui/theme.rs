//! Visual theme and styling.
//!
//! The accent is the product's teal, with a softer variant for dark
//! terminals. `NO_COLOR` and non-tty output disable styling entirely.

use std::fmt;
use std::str::FromStr;

use console::Style;
use serde::{Deserialize, Serialize};

/// Color mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the terminal.
    #[default]
    Auto,
    /// Accent tuned for light backgrounds.
    Light,
    /// Accent tuned for dark backgrounds.
    Dark,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("unknown color mode: {}", s)),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

/// Whether colored output should be used.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// localkit's visual theme.
#[derive(Debug, Clone)]
pub struct LocalkitTheme {
    /// Style for the teal accent (headers, highlights).
    pub accent: Style,
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
}

impl Default for LocalkitTheme {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl LocalkitTheme {
    /// Create the theme for a color mode.
    pub fn new(mode: ColorMode) -> Self {
        let accent = match mode {
            // xterm 37 sits closest to the product teal; 73 is the softer
            // dark-background variant.
            ColorMode::Auto | ColorMode::Light => Style::new().color256(37),
            ColorMode::Dark => Style::new().color256(73),
        };

        Self {
            accent,
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a style-free theme for `NO_COLOR` and non-tty output.
    pub fn plain() -> Self {
        Self {
            accent: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            border: Style::new(),
        }
    }

    /// Pick the theme matching the environment and color mode.
    pub fn for_environment(mode: ColorMode) -> Self {
        if should_use_colors() {
            Self::new(mode)
        } else {
            Self::plain()
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("!"), msg)
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        self.accent.apply_to(self.highlight.apply_to(title)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_parses_known_values() {
        assert_eq!(ColorMode::from_str("auto").unwrap(), ColorMode::Auto);
        assert_eq!(ColorMode::from_str("Dark").unwrap(), ColorMode::Dark);
        assert!(ColorMode::from_str("sepia").is_err());
    }

    #[test]
    fn color_mode_round_trips_through_display() {
        for mode in [ColorMode::Auto, ColorMode::Light, ColorMode::Dark] {
            assert_eq!(ColorMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn plain_theme_formats_without_escape_codes() {
        let theme = LocalkitTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_error("bad"), "✗ bad");
    }

    #[test]
    fn format_header_includes_the_title() {
        let theme = LocalkitTheme::plain();
        assert!(theme.format_header("Local Tools").contains("Local Tools"));
    }
}
