//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format: severity and message,
//! a clickable location, the offending source line with a caret, and an
//! optional note. A per-command summary line follows.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    if !result.issues.is_empty() {
        let max_line_width = calculate_max_line_width(&result.issues);
        for issue in &result.issues {
            print_issue(issue, writer, max_line_width);
        }
        print_problem_totals(result, writer);
    }

    print_summary(&result.summary, writer);

    if verbose && result.parse_error_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed and were skipped",
            "note:".bold(),
            result.parse_error_count
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
            print_source_line(ctx.line(), &ctx.source_line, ctx.col(), severity, writer, max_line_width);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        ReportLocation::General => {}
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_source_line<W: Write>(
    line: usize,
    source_line: &str,
    col: usize,
    severity: Severity,
    writer: &mut W,
    max_line_width: usize,
) {
    if source_line.is_empty() {
        return;
    }

    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // Caret pointing to the column (col is 1-based)
    let prefix = if col > 1 {
        source_line.chars().take(col - 1).collect::<String>()
    } else {
        String::new()
    };
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn print_problem_totals<W: Write>(result: &CommandResult, writer: &mut W) {
    let total = result.error_count + result.warning_count;
    if total == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})\n",
        FAILURE_MARK.red(),
        total,
        result.error_count,
        if result.error_count == 1 {
            "error"
        } else {
            "errors"
        }
        .red(),
        result.warning_count,
        if result.warning_count == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn print_summary<W: Write>(summary: &CommandSummary, writer: &mut W) {
    match summary {
        CommandSummary::Extract(summary) => print_extract_summary(summary, writer),
        CommandSummary::AddLocale(summary) => {
            let copied = summary.keys - summary.translated;
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Created locale '{}' with {} {} ({} translated, {} copied)",
                    summary.locale,
                    summary.keys,
                    plural(summary.keys, "key", "keys"),
                    summary.translated,
                    copied
                )
                .green()
            );
        }
        CommandSummary::Init(summary) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                "Created .harvestrc.json".green()
            );
            if summary.seeded_resource {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    "Seeded the primary resource file".green()
                );
            }
        }
    }
}

fn print_extract_summary<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    if summary.is_dry_run {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Dry run: {} {} in {} {}, {} new {} would be added (resource file has {})",
                summary.literals_found,
                plural(summary.literals_found, "literal", "literals"),
                summary.files_scanned,
                plural(summary.files_scanned, "file", "files"),
                summary.keys_added,
                plural(summary.keys_added, "key", "keys"),
                summary.total_keys
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {}: {} added, {} skipped (total {} {})",
            summary.literals_found,
            plural(summary.literals_found, "literal", "literals"),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
            summary.keys_added,
            summary.keys_skipped,
            summary.total_keys,
            plural(summary.total_keys, "key", "keys")
        )
        .green()
    );

    if summary.is_replace {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Replaced {} {} in {} {}",
                summary.replaced,
                plural(summary.replaced, "literal", "literals"),
                summary.files_modified,
                plural(summary.files_modified, "file", "files")
            )
            .green()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            _ => None,
        })
        .max()
        .map(|line| line.to_string().len())
        .unwrap_or(1)
}
