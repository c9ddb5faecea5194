//! Project manifest reading.
//!
//! The package name from `package.json` builds the translation import
//! specifier. When it cannot be determined, the caller skips import
//! insertion with a warning instead of failing the run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Read the declared package name from `package.json` in the project root.
pub fn package_name(project_root: &Path) -> Result<String> {
    let manifest_path = project_root.join(MANIFEST_FILE_NAME);
    let content = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read manifest: {}", manifest_path.display()))?;
    let manifest: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse manifest: {}", manifest_path.display()))?;

    match manifest.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => bail!(
            "Manifest has no \"name\" field: {}",
            manifest_path.display()
        ),
    }
}
