//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal output
//! - [`AlertNotifier`] - the interrupting presentation of the capability
//!   gate's blocking message
//! - [`MockUI`] / [`MockNotifier`] for tests
//!
//! # Example
//!
//! ```
//! use localkit::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Local Tools");
//! ui.success("Done!");
//! ```

pub mod alert;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use alert::AlertNotifier;
pub use mock::{MockNotifier, MockUI};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ColorMode, LocalkitTheme};

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show minimal output.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows secondary detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_parses_known_values() {
        assert_eq!(OutputMode::from_str("verbose").unwrap(), OutputMode::Verbose);
        assert_eq!(OutputMode::from_str("QUIET").unwrap(), OutputMode::Quiet);
        assert!(OutputMode::from_str("loud").is_err());
    }

    #[test]
    fn silent_hides_status() {
        assert!(!OutputMode::Silent.shows_status());
        assert!(OutputMode::Normal.shows_status());
    }

    #[test]
    fn quiet_hides_detail_but_keeps_status() {
        assert!(!OutputMode::Quiet.shows_detail());
        assert!(OutputMode::Quiet.shows_status());
    }
}
