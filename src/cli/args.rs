//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: extract hardcoded UI strings into the primary resource
//!   file (the default when no subcommand is given)
//! - `add-locale`: create a new locale file from the primary one
//! - `init`: write a default configuration file and seed the resource dir

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.common.verbose,
            Some(Command::AddLocale(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Project root directory (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Also rewrite sources, replacing literals with t() references
    #[arg(long)]
    pub replace: bool,

    /// Report what would be extracted without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Default, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Parser)]
pub struct AddLocaleArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Locale code for the new resource file, e.g. "es"
    pub locale: String,

    /// Project root directory (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AddLocaleCommand {
    #[command(flatten)]
    pub args: AddLocaleArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract hardcoded UI strings into the primary resource file
    Extract(ExtractCommand),
    /// Create a new locale file from the primary resource file
    AddLocale(AddLocaleCommand),
    /// Initialize a new .harvestrc.json configuration file
    Init,
}
