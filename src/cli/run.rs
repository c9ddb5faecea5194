use anyhow::Result;

use super::args::{Arguments, Command, ExtractCommand};
use super::commands::{CommandResult, add_locale::add_locale, extract::extract, init::init};

/// Dispatch to the appropriate command handler.
///
/// Invoking the binary with no subcommand runs extraction over the
/// current directory.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::AddLocale(cmd)) => add_locale(cmd),
        Some(Command::Init) => init(),
        None => extract(ExtractCommand::default()),
    }
}
