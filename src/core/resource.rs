//! ARB resource store: ordered, additive, idempotent.
//!
//! An ARB file is a JSON object whose `@@locale` key declares the locale
//! and where `@key` siblings hold metadata for `key`. The store preserves
//! on-disk key order on read and appends new keys in merge order; existing
//! keys are never overwritten or reordered. That additive guarantee is
//! what makes re-running extraction safe after translators have edited
//! values by hand.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value, json};

/// Distinguished top-level key declaring the file's locale.
pub const LOCALE_KEY: &str = "@@locale";

/// Leading character marking metadata keys.
const META_PREFIX: char = '@';

/// One entry to merge: key, display text, and a provenance description
/// stored in the `@key` metadata sibling.
#[derive(Debug, Clone)]
pub struct MergeEntry {
    pub key: String,
    pub text: String,
    pub description: String,
}

/// Counts from a merge call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: usize,
    pub skipped: usize,
}

/// Content-key statistics for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub with_metadata: usize,
}

pub struct ResourceStore {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl ResourceStore {
    /// Open an existing resource file. Fails if it does not exist or is
    /// not a well-formed JSON object.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Resource file not found: {}", path.display());
        }
        Ok(Self {
            file_path: path.to_path_buf(),
            data: read_map(path)?,
        })
    }

    /// Open an existing resource file or start a fresh one tagged with
    /// the given locale. A malformed existing file is a fatal error, not
    /// something to silently recreate.
    pub fn open_or_create(path: &Path, locale: &str) -> Result<Self> {
        let data = if path.exists() {
            read_map(path)?
        } else {
            let mut map = Map::new();
            map.insert(LOCALE_KEY.to_string(), Value::String(locale.to_string()));
            map
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// The locale declared in the file, if any.
    pub fn locale(&self) -> Option<&str> {
        self.data.get(LOCALE_KEY).and_then(Value::as_str)
    }

    /// All content keys, for seeding the identifier collision set.
    pub fn existing_keys(&self) -> HashSet<String> {
        self.data
            .keys()
            .filter(|k| !is_metadata_key(k))
            .cloned()
            .collect()
    }

    /// Content keys in file order, for locale propagation.
    pub fn content_keys(&self) -> Vec<String> {
        self.data
            .keys()
            .filter(|k| !is_metadata_key(k))
            .cloned()
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Insert a bare key/value pair, used by the locale propagator.
    /// Existing keys keep their value.
    pub fn insert_value(&mut self, key: &str, value: Value) {
        if !self.data.contains_key(key) {
            self.data.insert(key.to_string(), value);
        }
    }

    /// Additively merge a batch of entries.
    ///
    /// Keys already present are left untouched and counted as skipped;
    /// new keys append in batch order, each followed by its `@key`
    /// metadata sibling. Merging the same batch twice is a no-op the
    /// second time.
    pub fn merge(&mut self, entries: &[MergeEntry]) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();

        for entry in entries {
            if self.data.contains_key(&entry.key) {
                outcome.skipped += 1;
                continue;
            }
            self.data
                .insert(entry.key.clone(), Value::String(entry.text.clone()));
            self.data.insert(
                metadata_key(&entry.key),
                json!({ "description": entry.description }),
            );
            outcome.added += 1;
        }

        outcome
    }

    /// Count content keys and those carrying metadata. Hand-authored
    /// entries may lack metadata; only tool-added ones are guaranteed it.
    pub fn statistics(&self) -> Statistics {
        let content: Vec<&String> = self.data.keys().filter(|k| !is_metadata_key(k)).collect();
        let with_metadata = content
            .iter()
            .filter(|k| self.data.contains_key(&metadata_key(k)))
            .count();
        Statistics {
            total: content.len(),
            with_metadata,
        }
    }

    /// Save with 2-space indentation and a trailing newline, creating
    /// parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(self.data.clone()))
            .context("Failed to serialize resource file")?;

        fs::write(&self.file_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}

fn read_map(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Malformed resource file: {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!(
            "Root of resource file must be an object: {}",
            path.display()
        ),
    }
}

fn is_metadata_key(key: &str) -> bool {
    key.starts_with(META_PREFIX)
}

fn metadata_key(key: &str) -> String {
    format!("{}{}", META_PREFIX, key)
}
