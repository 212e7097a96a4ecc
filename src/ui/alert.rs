//! Interrupting alert presentation for the capability gate.
//!
//! The gate itself only emits a message through the `SupportNotifier`
//! seam; this is the presentation the CLI hosts plug in. It prints a
//! bordered block to stderr and, when the session is interactive, blocks
//! until the user acknowledges, the terminal counterpart of a modal
//! alert.

use std::io::Write;

use console::Term;

use crate::gate::SupportNotifier;

use super::{ColorMode, LocalkitTheme};

/// Blocking terminal alert.
pub struct AlertNotifier {
    term: Term,
    theme: LocalkitTheme,
    interactive: bool,
}

impl AlertNotifier {
    /// Create an alert notifier.
    pub fn new(interactive: bool) -> Self {
        Self {
            term: Term::stderr(),
            theme: LocalkitTheme::for_environment(ColorMode::Auto),
            interactive,
        }
    }
}

impl SupportNotifier for AlertNotifier {
    fn notify_unsupported(&mut self, message: &str) {
        let width = message.chars().count().min(76) + 4;
        let rule = "─".repeat(width);

        writeln!(self.term, "{}", self.theme.border.apply_to(&rule)).ok();
        writeln!(self.term, "{}", self.theme.format_error(message)).ok();
        writeln!(self.term, "{}", self.theme.border.apply_to(&rule)).ok();

        if self.interactive {
            write!(
                self.term,
                "{}",
                self.theme.dim.apply_to("Press Enter to continue… ")
            )
            .ok();
            self.term.read_line().ok();
        }
    }
}
