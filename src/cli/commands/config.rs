//! Config command implementation.
//!
//! The `localkit config` command shows saved preferences, sets them from
//! flags, or, in an interactive session with no flags, offers pickers
//! for language and color mode.

use dialoguer::Select;

use crate::cli::args::ConfigArgs;
use crate::error::Result;
use crate::i18n::locale::is_supported;
use crate::i18n::{t, Msg, LOCALES};
use crate::state::Preferences;
use crate::ui::{ColorMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    locale: String,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(locale: impl Into<String>, args: ConfigArgs) -> Self {
        Self {
            locale: locale.into(),
            args,
        }
    }

    fn show(&self, prefs: &Preferences, ui: &mut dyn UserInterface) {
        ui.show_header(t(&self.locale, Msg::AppName));

        let language = prefs
            .language
            .as_deref()
            .and_then(|code| LOCALES.iter().find(|l| l.code == code))
            .map(|l| format!("{} ({})", l.native_name, l.code))
            .unwrap_or_else(|| "auto".to_string());
        ui.message(&format!("{}: {}", t(&self.locale, Msg::Language), language));
        ui.message(&format!("Color mode: {}", prefs.color_mode));
    }

    fn pick_interactively(&self, prefs: &mut Preferences) -> Result<()> {
        let labels: Vec<String> = LOCALES
            .iter()
            .map(|l| format!("{} ({})", l.native_name, l.code))
            .collect();
        let current = prefs
            .language
            .as_deref()
            .and_then(|code| LOCALES.iter().position(|l| l.code == code))
            .unwrap_or(0);
        let picked = Select::new()
            .with_prompt(t(&self.locale, Msg::Language))
            .items(&labels)
            .default(current)
            .interact()
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        prefs.language = Some(LOCALES[picked].code.to_string());

        let modes = [ColorMode::Auto, ColorMode::Light, ColorMode::Dark];
        let mode_labels: Vec<String> = modes.iter().map(|m| m.to_string()).collect();
        let current_mode = modes
            .iter()
            .position(|m| *m == prefs.color_mode)
            .unwrap_or(0);
        let picked = Select::new()
            .with_prompt("Color mode")
            .items(&mode_labels)
            .default(current_mode)
            .interact()
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        prefs.color_mode = modes[picked];

        Ok(())
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut prefs = Preferences::load()?;
        let mut changed = false;

        if let Some(code) = self.args.language.as_deref() {
            if !is_supported(code) {
                let codes: Vec<_> = LOCALES.iter().map(|l| l.code).collect();
                ui.error(&format!("Unknown language: {}", code));
                ui.message(&format!("Supported: {}", codes.join(", ")));
                return Ok(CommandResult::failure(2));
            }
            prefs.language = Some(code.to_string());
            changed = true;
        }

        if let Some(mode) = self.args.color_mode {
            prefs.color_mode = mode;
            changed = true;
        }

        if !changed && ui.is_interactive() {
            self.pick_interactively(&mut prefs)?;
            changed = true;
        }

        if changed {
            prefs.save()?;
            ui.success("Preferences saved");
        } else {
            self.show(&prefs, ui);
        }

        Ok(CommandResult::success())
    }
}
