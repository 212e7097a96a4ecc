//! The per-activation support gate.
//!
//! A [`SupportGate`] is created when a tool view is opened and dropped with
//! it. The hosting view calls [`SupportGate::check_support`] at its own
//! activation point; the gate holds the resulting state (supported flag +
//! localized message) for the view to read when deciding whether to render
//! the tool or a blocking notice.

use crate::host::Facilities;
use crate::i18n::{t, Msg};

use super::capability::evaluate;

/// Receiver for the gate's interrupting notification.
///
/// Emitted at most once per failed check. The host decides the
/// presentation; the gate only supplies the localized message.
pub trait SupportNotifier {
    /// Surface the blocking "environment not supported" message to the user.
    fn notify_unsupported(&mut self, message: &str);
}

/// Capability gate guarding a single tool activation.
///
/// Before the first check the gate optimistically reports supported, so a
/// host that renders before checking is not blocked by default; hosts that
/// want an explicit pending phase can branch on [`SupportGate::has_checked`].
pub struct SupportGate {
    facilities: Box<dyn Facilities>,
    notifier: Box<dyn SupportNotifier>,
    locale: String,
    supported: bool,
    message: String,
    checked: bool,
}

impl SupportGate {
    /// Create a gate over the given facilities and notifier.
    pub fn new(
        facilities: Box<dyn Facilities>,
        notifier: Box<dyn SupportNotifier>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            facilities,
            notifier,
            locale: locale.into(),
            supported: true,
            message: String::new(),
            checked: false,
        }
    }

    /// Verify that the host provides every required capability.
    ///
    /// Evaluates all capabilities, overwrites the gate state with the fresh
    /// verdict, and returns the new supported flag so callers can branch
    /// without re-reading state. On failure this emits one diagnostic
    /// record naming every missing capability and one notification carrying
    /// the localized message; on success it does neither. Never fails:
    /// an unsupported host is a verdict, not an error.
    pub fn check_support(&mut self) -> bool {
        let verdict = evaluate(self.facilities.as_ref());
        self.checked = true;

        if verdict.is_supported() {
            self.supported = true;
            self.message.clear();
        } else {
            self.supported = false;
            self.message = t(&self.locale, Msg::EnvNotSupported).to_string();
            tracing::warn!(
                missing = ?verdict.missing(),
                "host is missing required capabilities"
            );
            self.notifier.notify_unsupported(&self.message);
        }

        self.supported
    }

    /// Current supported flag. Optimistically `true` before the first check.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Localized blocking message. Non-empty iff the last check failed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a check has run on this gate.
    pub fn has_checked(&self) -> bool {
        self.checked
    }

    /// Switch the locale used for subsequent checks.
    ///
    /// Does not rewrite the current message; the next check produces it in
    /// the new locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }
}
