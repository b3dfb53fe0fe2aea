use std::path::PathBuf;

use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Rendered catalog for every file that extracted cleanly, in path order.
    pub catalog: String,
    /// Where the catalog was written; `None` means stdout.
    pub output: Option<PathBuf>,
    pub string_count: usize,
    pub extracted_file_count: usize,
    /// True if `--fail-fast` stopped before the last file.
    pub stopped_early: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tplx commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of template files that were processed.
    pub files_checked: usize,
    /// Paths the scanner could not access.
    pub skipped_path_count: usize,
}
