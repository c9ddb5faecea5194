//! The extract command: scan, synthesize, merge, optionally rewrite.

use std::path::{Path, PathBuf};
use std::{collections::HashSet, fs};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, helper::finish};
use crate::config::{Config, load_config};
use crate::core::ExtractedLiteral;
use crate::core::collect::{CollectOptions, collect_literals};
use crate::core::keygen::{UsedKeys, synthesize};
use crate::core::manifest::package_name;
use crate::core::parse::resolve_file;
use crate::core::resource::{MergeEntry, ResourceStore};
use crate::core::rewrite::{ensure_import, splice_literal};
use crate::core::scan::scan_files;
use crate::core::tool::run_post_command;
use crate::issues::{ExternalToolIssue, Issue, ParseErrorIssue, ReplacementIssue};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let project_root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    if !project_root.is_dir() {
        bail!("Project path does not exist: {}", project_root.display());
    }

    let mut config = load_config(&project_root)?.config;
    apply_overrides(&mut config, &args.common);

    let source_root = project_root.join(&config.source_root);
    if !source_root.is_dir() {
        bail!("Source root does not exist: {}", source_root.display());
    }

    let mut issues: Vec<Issue> = Vec::new();

    // Phase 1: scan + collect, in document order
    let source_root_str = source_root.to_string_lossy();
    let scan = scan_files(
        &source_root_str,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        args.common.verbose,
    );

    let elements: HashSet<String> = config.elements.iter().cloned().collect();
    let text_attributes: HashSet<String> = config.text_attributes.iter().cloned().collect();
    let ignore_texts: HashSet<String> = config.ignore_texts.iter().cloned().collect();
    let options = CollectOptions {
        elements: &elements,
        text_attributes: &text_attributes,
        ignore_texts: &ignore_texts,
    };

    let mut literals: Vec<ExtractedLiteral> = Vec::new();
    for file in &scan.files {
        match resolve_file(file) {
            Ok(parsed) => literals.extend(collect_literals(&parsed, file, &options)),
            Err(err) => {
                issues.push(Issue::ParseError(ParseErrorIssue {
                    file_path: file.clone(),
                    error: err.to_string(),
                }));
            }
        }
    }

    // Phase 2: open the store and synthesize keys, seeded with what is
    // already on disk so new keys can never collide with prior runs
    let messages_root = project_root.join(&config.messages_root);
    let resource_path = messages_root.join(format!("{}.arb", config.primary_locale));
    let mut store = ResourceStore::open_or_create(&resource_path, &config.primary_locale)?;

    let mut used = UsedKeys::new();
    used.seed(store.existing_keys());
    for literal in &mut literals {
        literal.key = Some(synthesize(&literal.text, &mut used));
    }

    let entries: Vec<MergeEntry> = literals
        .iter()
        .map(|literal| MergeEntry {
            key: literal.key.clone().unwrap_or_default(),
            text: literal.text.clone(),
            description: format!(
                "{} in {}",
                literal.context_label,
                file_name(literal.file_path())
            ),
        })
        .collect();

    // Phase 3: merge and write, unless this is a dry run
    let mut summary = ExtractSummary {
        files_scanned: scan.files.len(),
        literals_found: literals.len(),
        keys_added: 0,
        keys_skipped: 0,
        replaced: 0,
        files_modified: 0,
        total_keys: 0,
        is_dry_run: args.dry_run,
        is_replace: args.replace && !args.dry_run,
    };

    if args.dry_run {
        summary.keys_added = entries.len();
        summary.total_keys = store.statistics().total;
        return Ok(finish(
            CommandSummary::Extract(summary),
            issues,
            scan.files.len(),
            true,
        ));
    }

    let outcome = store.merge(&entries);
    store.save()?;
    summary.keys_added = outcome.added;
    summary.keys_skipped = outcome.skipped;
    summary.total_keys = store.statistics().total;

    // Phase 4: rewrite sources
    if args.replace {
        let package = match package_name(&project_root) {
            Ok(name) => Some(name),
            Err(err) => {
                eprintln!(
                    "{} {:#} (skipping import insertion)",
                    "warning:".bold().yellow(),
                    err
                );
                None
            }
        };

        for (file, file_literals) in group_by_file(&literals) {
            rewrite_file(
                file,
                &file_literals,
                package.as_deref(),
                &mut issues,
                &mut summary,
            )?;
        }
    }

    // Phase 5: advisory post-extract hook
    if !config.post_extract_command.is_empty() {
        let outcome = run_post_command(&config.post_extract_command, &project_root);
        if !outcome.success {
            issues.push(Issue::ExternalTool(ExternalToolIssue {
                command: config.post_extract_command.join(" "),
                error: outcome.detail,
            }));
        }
    }

    Ok(finish(
        CommandSummary::Extract(summary),
        issues,
        scan.files.len(),
        true,
    ))
}

fn apply_overrides(config: &mut Config, common: &super::super::args::CommonArgs) {
    if let Some(locale) = &common.primary_locale {
        config.primary_locale = locale.clone();
    }
    if let Some(root) = &common.source_root {
        config.source_root = root.to_string_lossy().into_owned();
    }
    if let Some(root) = &common.messages_root {
        config.messages_root = root.to_string_lossy().into_owned();
    }
}

/// Group literals by file, preserving source order within each group.
/// Literals arrive sorted by file already, so consecutive runs suffice.
fn group_by_file(literals: &[ExtractedLiteral]) -> Vec<(&str, Vec<&ExtractedLiteral>)> {
    let mut groups: Vec<(&str, Vec<&ExtractedLiteral>)> = Vec::new();
    for literal in literals {
        match groups.last_mut() {
            Some((file, group)) if *file == literal.file_path() => group.push(literal),
            _ => groups.push((literal.file_path(), vec![literal])),
        }
    }
    groups
}

/// Apply one file's replacements in reverse source order, so earlier
/// spans stay valid, then insert the import once if anything changed.
fn rewrite_file(
    file: &str,
    literals: &[&ExtractedLiteral],
    package: Option<&str>,
    issues: &mut Vec<Issue>,
    summary: &mut ExtractSummary,
) -> Result<()> {
    let mut content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read file for rewrite: {}", file))?;
    let mut modified = false;

    for literal in literals.iter().rev() {
        let key = literal.key.as_deref().unwrap_or_default();
        if splice_literal(&mut content, literal, key) {
            summary.replaced += 1;
            modified = true;
        } else {
            issues.push(Issue::Replacement(ReplacementIssue {
                context: literal.context.clone(),
                text: literal.text.clone(),
                key: key.to_string(),
            }));
        }
    }

    if modified {
        if let Some(package) = package
            && let Some(updated) = ensure_import(&content, package)
        {
            content = updated;
        }
        fs::write(file, content).with_context(|| format!("Failed to write file: {}", file))?;
        summary.files_modified += 1;
    }

    Ok(())
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
