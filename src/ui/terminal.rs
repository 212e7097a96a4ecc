//! Terminal UI implementation.

use std::io::Write;

use console::Term;

use super::{ColorMode, LocalkitTheme, OutputMode, UserInterface};

/// Terminal UI writing styled output to stdout.
pub struct TerminalUI {
    term: Term,
    theme: LocalkitTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: LocalkitTheme::for_environment(ColorMode::Auto),
            mode,
            interactive,
        }
    }

    /// Replace the theme (e.g., after loading the color-mode preference).
    pub fn set_theme(&mut self, theme: LocalkitTheme) {
        self.theme = theme;
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Create the UI for the current invocation.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive, mode))
}
