//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Render translatable strings as a catalog source file
//! - `check`: Report template syntax errors and skipped i18n tags
//! - `init`: Initialize tplx configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::render::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.common.verbose,
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Template files to process instead of scanning the source root
    pub files: Vec<PathBuf>,

    /// Source root directory (config lookup, scanning, origin paths)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog convention (overrides config file)
    #[arg(long, value_enum, env = "TPLX_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the catalog to this file instead of stdout (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Omit the `// i18n: file:` comment before each gettext call
    #[arg(long)]
    pub no_origin_comments: bool,

    /// Stop at the first template that fails to extract
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into a gettext or Qt Linguist catalog source
    Extract(ExtractCommand),
    /// Check templates for syntax errors and malformed i18n tags
    Check(CheckCommand),
    /// Initialize a new .tplxrc.json configuration file
    Init,
}
