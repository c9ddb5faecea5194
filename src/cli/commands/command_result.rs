use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    AddLocale(AddLocaleSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub files_scanned: usize,
    pub literals_found: usize,
    pub keys_added: usize,
    pub keys_skipped: usize,
    /// Literals actually spliced into sources (replace mode only).
    pub replaced: usize,
    pub files_modified: usize,
    /// Content keys in the resource file after the merge.
    pub total_keys: usize,
    pub is_dry_run: bool,
    pub is_replace: bool,
}

#[derive(Debug)]
pub struct AddLocaleSummary {
    pub locale: String,
    pub keys: usize,
    pub translated: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created_config: bool,
    pub seeded_resource: bool,
}

/// Result of running a harvest command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues accumulated during the run.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files scanned.
    pub source_files_checked: usize,
}
