pub mod add_locale;
mod command_result;
pub mod extract;
mod helper;
pub mod init;

pub use command_result::{
    AddLocaleSummary, CommandResult, CommandSummary, ExtractSummary, InitSummary,
};
