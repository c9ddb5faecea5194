//! Post-extraction build hook.
//!
//! Runs a user-configured command (e.g. `npm run i18n:compile`) after a
//! successful merge. The command is advisory: failure is reported as a
//! warning and never aborts the run.

use std::path::Path;
use std::process::Command;

/// Result of running the post-extract command.
#[derive(Debug)]
pub struct ToolOutcome {
    pub success: bool,
    /// Spawn error or trimmed stderr on failure; empty on success.
    pub detail: String,
}

pub fn run_post_command(command: &[String], working_dir: &Path) -> ToolOutcome {
    let Some((program, args)) = command.split_first() else {
        return ToolOutcome {
            success: true,
            detail: String::new(),
        };
    };

    match Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .output()
    {
        Ok(output) if output.status.success() => ToolOutcome {
            success: true,
            detail: String::new(),
        },
        Ok(output) => ToolOutcome {
            success: false,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        },
        Err(err) => ToolOutcome {
            success: false,
            detail: err.to_string(),
        },
    }
}
