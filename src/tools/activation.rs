//! Tool-view activation.
//!
//! Opening a tool is the single point where the capability gate runs. The
//! hosting command builds the gate (choosing facilities and notification
//! presentation), and [`ToolView::open`] invokes the check before any tool
//! surface is rendered.

use crate::gate::SupportGate;
use crate::i18n::{t, Msg};
use crate::ui::UserInterface;

use super::Tool;

/// The view wrapper around a single tool activation.
pub struct ToolView {
    locale: String,
}

impl ToolView {
    /// Create a view for the given locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// Open the tool view.
    ///
    /// Shows the view header and runs the capability check. The
    /// local-processing notice appears only when the host passes. Returns whether
    /// the tool may operate; on `false` the gate has already surfaced the
    /// blocking message through its notifier.
    pub fn open(&self, tool: &dyn Tool, gate: &mut SupportGate, ui: &mut dyn UserInterface) -> bool {
        ui.show_header(&format!(
            "{} · {}",
            t(&self.locale, Msg::AppName),
            tool.id()
        ));

        if !gate.check_support() {
            tracing::debug!(tool = tool.id(), "tool activation blocked");
            return false;
        }

        ui.message(t(&self.locale, Msg::PrivateNotice));
        true
    }
}
