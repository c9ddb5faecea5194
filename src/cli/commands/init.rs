//! The init command: pure scaffolding.
//!
//! Writes a default configuration file and seeds the messages directory
//! with an empty primary resource file tagged with the locale.

use std::fs;
use std::path::Path;

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};
use crate::core::resource::ResourceStore;

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;

    let config = Config::default();
    let resource_path =
        Path::new(&config.messages_root).join(format!("{}.arb", config.primary_locale));
    let seeded_resource = if resource_path.exists() {
        false
    } else {
        ResourceStore::open_or_create(&resource_path, &config.primary_locale)?.save()?;
        true
    };

    Ok(finish(
        CommandSummary::Init(InitSummary {
            created_config: true,
            seeded_resource,
        }),
        Vec::new(),
        0,
        true,
    ))
}
