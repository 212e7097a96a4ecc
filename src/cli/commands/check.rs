//! Check command implementation.
//!
//! The `localkit check` command probes the host the same way a tool
//! activation does and reports the verdict per capability. It is the
//! operator-facing view of the capability gate's diagnostics.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::gate::{evaluate, CAPABILITIES};
use crate::host::LocalHost;
use crate::i18n::{t, Msg};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    locale: String,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(locale: impl Into<String>, args: CheckArgs) -> Self {
        Self {
            locale: locale.into(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let verdict = evaluate(&LocalHost::new());

        if self.args.json {
            let payload = serde_json::json!({
                "supported": verdict.is_supported(),
                "missing": verdict.missing(),
            });
            println!("{}", payload);
        } else {
            ui.show_header(t(&self.locale, Msg::AppName));

            for capability in CAPABILITIES {
                if verdict.missing().contains(&capability.name) {
                    ui.message(&format!("  ✗ {}", capability.name));
                } else {
                    ui.message(&format!("  ✓ {}", capability.name));
                }
            }
            ui.message("");

            if verdict.is_supported() {
                ui.success("All required capabilities are available.");
            } else {
                ui.error(t(&self.locale, Msg::EnvNotSupported));
            }
        }

        if verdict.is_supported() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(3))
        }
    }
}
