//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::ui::ColorMode;

/// localkit - Local, private file tools.
#[derive(Debug, Parser)]
#[command(name = "localkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Language for user-facing messages (e.g., en, zh, ja)
    #[arg(short, long, global = true, env = "LOCALKIT_LANG")]
    pub lang: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a tool on a file
    Run(RunArgs),

    /// List available tools (default if no command specified)
    List(ListArgs),

    /// Check whether this host supports the processing pipeline
    Check(CheckArgs),

    /// Show or change saved preferences
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Tool identifier (see `localkit list`)
    pub tool: String,

    /// Input file
    pub input: PathBuf,

    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target width in pixels (resize)
    #[arg(long)]
    pub width: Option<u32>,

    /// Target height in pixels (resize)
    #[arg(long)]
    pub height: Option<u32>,

    /// Rotation angle in degrees, a multiple of 90 (rotate)
    #[arg(long)]
    pub angle: Option<i32>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Emit the verdict as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Save a language preference (e.g., en, zh, ja)
    #[arg(long)]
    pub language: Option<String>,

    /// Save a color mode preference (auto, light, dark)
    #[arg(long)]
    pub color_mode: Option<ColorMode>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_parses_tool_options() {
        let cli = Cli::parse_from([
            "localkit", "run", "resize", "in.png", "-o", "out.png", "--width", "100",
        ]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.tool, "resize");
        assert_eq!(args.width, Some(100));
        assert_eq!(args.height, None);
    }

    #[test]
    fn lang_flag_is_global() {
        let cli = Cli::parse_from(["localkit", "list", "--lang", "zh"]);
        assert_eq!(cli.lang.as_deref(), Some("zh"));
    }

    #[test]
    fn config_parses_color_mode() {
        let cli = Cli::parse_from(["localkit", "config", "--color-mode", "dark"]);
        let Some(Commands::Config(args)) = cli.command else {
            panic!("expected config command");
        };
        assert_eq!(args.color_mode, Some(crate::ui::ColorMode::Dark));
    }
}
