//! List command implementation.
//!
//! The `localkit list` command shows the available tools.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::i18n::{t, Msg};
use crate::tools::ToolRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    locale: String,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(locale: impl Into<String>, args: ListArgs) -> Self {
        Self {
            locale: locale.into(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = ToolRegistry::with_builtins();

        ui.show_header(t(&self.locale, Msg::AppName));
        ui.message(t(&self.locale, Msg::Tagline));
        ui.message("");

        for tool in registry.iter() {
            ui.message(&format!("  {:<12} {}", tool.id(), tool.summary()));
        }

        if ui.output_mode().shows_detail() {
            ui.message("");
            ui.message(t(&self.locale, Msg::PrivateNotice));
        }

        Ok(CommandResult::success())
    }
}
