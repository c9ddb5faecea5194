//! Issue types accumulated during a run.
//!
//! Only configuration problems abort a run; everything else lands here as
//! a typed issue, is printed cargo-style at the end, and feeds the exit
//! status. Replacement failures are errors (the source was left with a
//! literal whose key is already minted); parse, tool and translation
//! failures are warnings.

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ParseError,
    Replacement,
    ExternalTool,
    Translation,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::Replacement => write!(f, "replacement"),
            Rule::ExternalTool => write!(f, "external-tool"),
            Rule::Translation => write!(f, "translation"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// File could not be parsed; it was skipped for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// A literal could not be substituted: the bytes at its recorded span no
/// longer spell the expected text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementIssue {
    pub context: SourceContext,
    /// The literal text that was expected at the span.
    pub text: String,
    /// The key that was minted for it.
    pub key: String,
}

impl ReplacementIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Replacement
    }
}

/// The post-extract command failed or exited non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalToolIssue {
    pub command: String,
    pub error: String,
}

impl ExternalToolIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ExternalTool
    }
}

/// A single key failed to translate; its source text was copied instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationIssue {
    /// The resource file being written.
    pub file_path: String,
    pub key: String,
    pub error: String,
}

impl TranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Translation
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue accumulated during a run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ParseError(ParseErrorIssue),
    Replacement(ReplacementIssue),
    ExternalTool(ExternalToolIssue),
    Translation(TranslationIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location with a line for context display.
    Source(&'a SourceContext),
    /// File-level only (no line context).
    File { path: &'a str },
    /// No meaningful location (external commands).
    General,
}

/// Trait for types that can be reported to the CLI.
///
/// Implemented by all issue types; `enum_dispatch` gives zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ReplacementIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "key \"{}\" was added to the resource file but the source could not be rewritten",
            self.key
        ))
    }
}

impl Report for ExternalToolIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::General
    }

    fn message(&self) -> String {
        self.command.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.error.clone())
    }
}

impl Report for TranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} (source text copied)", self.error))
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> Option<&str> {
        match self.location() {
            ReportLocation::Source(ctx) => Some(&ctx.location.file_path),
            ReportLocation::File { path } => Some(path),
            ReportLocation::General => None,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.line,
            _ => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.col,
            _ => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        // Sort by: file_path (None last), line, col, message
        match (self.sort_file_path(), other.sort_file_path()) {
            (Some(a), Some(b)) => a
                .cmp(b)
                .then_with(|| self.sort_line().cmp(&other.sort_line()))
                .then_with(|| self.sort_col().cmp(&other.sort_col()))
                .then_with(|| self.message().cmp(&other.message())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self
                .rule()
                .cmp(&other.rule())
                .then_with(|| self.message().cmp(&other.message())),
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
