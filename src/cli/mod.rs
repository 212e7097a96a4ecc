//! Command-line interface.
//!
//! # Modules
//!
//! - [`args`] - Argument definitions (clap derive)
//! - [`commands`] - Command implementations and dispatching

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::i18n::resolve_locale;
use crate::state::Preferences;

/// Resolve the locale for this invocation.
///
/// Precedence: `--lang` flag, saved preference, `LC_ALL`/`LANG`, default.
pub fn effective_locale(flag: Option<&str>, prefs: &Preferences) -> &'static str {
    if let Some(code) = flag {
        return resolve_locale(Some(code));
    }
    if let Some(code) = prefs.language.as_deref() {
        return resolve_locale(Some(code));
    }

    let env_locale = std::env::var("LC_ALL")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("LANG").ok().filter(|s| !s.is_empty()));
    resolve_locale(env_locale.as_deref())
}
