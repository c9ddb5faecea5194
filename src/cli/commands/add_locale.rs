//! The add-locale command: clone the primary resource file into a new
//! locale, copying values verbatim (no translator is wired up by default).

use std::path::PathBuf;

use anyhow::{Result, bail};

use super::super::args::AddLocaleCommand;
use super::{AddLocaleSummary, CommandResult, CommandSummary, helper::finish};
use crate::config::load_config;
use crate::core::propagate::propagate;

pub fn add_locale(cmd: AddLocaleCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let project_root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    if !project_root.is_dir() {
        bail!("Project path does not exist: {}", project_root.display());
    }
    if !is_valid_locale(&args.locale) {
        bail!("Invalid locale code: \"{}\"", args.locale);
    }

    let mut config = load_config(&project_root)?.config;
    if let Some(locale) = &args.common.primary_locale {
        config.primary_locale = locale.clone();
    }
    if let Some(root) = &args.common.messages_root {
        config.messages_root = root.to_string_lossy().into_owned();
    }

    let messages_root = project_root.join(&config.messages_root);
    let outcome = propagate(&messages_root, &config.primary_locale, &args.locale, None)?;

    Ok(finish(
        CommandSummary::AddLocale(AddLocaleSummary {
            locale: outcome.locale,
            keys: outcome.keys,
            translated: outcome.translated,
        }),
        outcome.issues,
        0,
        true,
    ))
}

fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
