//! Run command implementation.
//!
//! The `localkit run` command opens a tool view (which runs the
//! capability gate) and, when the host passes, applies the tool to the
//! input file.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::gate::SupportGate;
use crate::host::LocalHost;
use crate::i18n::{t, Msg};
use crate::pipeline;
use crate::tools::{ToolOptions, ToolRegistry, ToolView};
use crate::ui::{AlertNotifier, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    locale: String,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(locale: impl Into<String>, args: RunArgs) -> Self {
        Self {
            locale: locale.into(),
            args,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = ToolRegistry::with_builtins();

        let Some(tool) = registry.get(&self.args.tool) else {
            ui.error(&format!(
                "{}: {}",
                t(&self.locale, Msg::NotFound),
                self.args.tool
            ));
            let available: Vec<_> = registry.iter().map(|t| t.id()).collect();
            ui.message(&format!("Available tools: {}", available.join(", ")));
            return Ok(CommandResult::failure(2));
        };

        // The gate is built here, at the activation point: production
        // facilities, alert presentation matching the session.
        let mut gate = SupportGate::new(
            Box::new(LocalHost::new()),
            Box::new(AlertNotifier::new(ui.is_interactive())),
            self.locale.as_str(),
        );

        let view = ToolView::new(self.locale.as_str());
        if !view.open(tool, &mut gate, ui) {
            return Ok(CommandResult::failure(3));
        }

        let source = pipeline::load_png(&self.args.input)?;
        tracing::debug!(
            tool = tool.id(),
            width = source.width(),
            height = source.height(),
            "input loaded"
        );

        let options = ToolOptions {
            width: self.args.width,
            height: self.args.height,
            angle: self.args.angle,
        };
        let output = tool.apply(&source, &options)?;

        pipeline::save_png(&output, &self.args.output)?;
        ui.success(&format!(
            "{} → {}",
            self.args.input.display(),
            self.args.output.display()
        ));

        Ok(CommandResult::success())
    }
}
