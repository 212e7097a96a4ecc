//! Mock UI implementations for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. `MockNotifier` does the same for the
//! capability gate's notification seam.
//!
//! # Example
//!
//! ```
//! use localkit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Starting".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use crate::gate::SupportNotifier;

use super::{OutputMode, UserInterface};

/// Mock UI implementation capturing all interactions.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock notifier capturing the gate's blocking messages.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notifications: Vec<String>,
}

impl MockNotifier {
    /// Create a new MockNotifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages surfaced so far.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl SupportNotifier for MockNotifier {
    fn notify_unsupported(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
