use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".harvestrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// UI element names whose literals are extracted.
    #[serde(default = "default_elements")]
    pub elements: Vec<String>,
    /// Attribute names treated as text-bearing on those elements.
    #[serde(default = "default_text_attributes")]
    pub text_attributes: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    /// Command to run after a successful merge, e.g.
    /// ["npm", "run", "i18n:compile"]. Empty disables the hook.
    #[serde(default)]
    pub post_extract_command: Vec<String>,
}

fn default_includes() -> Vec<String> {
    ["src", "app", "components"].map(String::from).to_vec()
}

fn default_elements() -> Vec<String> {
    [
        "Text",
        "Heading",
        "Label",
        "Button",
        "Dialog",
        "DialogTitle",
        "Snackbar",
        "Tooltip",
        "MenuItem",
        "ListItem",
        "Badge",
        "Chip",
        "TextInput",
        "TextField",
    ]
    .map(String::from)
    .to_vec()
}

fn default_text_attributes() -> Vec<String> {
    [
        "title",
        "label",
        "placeholder",
        "message",
        "description",
        "helperText",
        "alt",
        "aria-label",
    ]
    .map(String::from)
    .to_vec()
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: default_includes(),
            elements: default_elements(),
            text_attributes: default_text_attributes(),
            ignore_texts: Vec::new(),
            messages_root: default_messages_root(),
            primary_locale: default_primary_locale(),
            source_root: default_source_root(),
            ignore_test_files: default_ignore_test_files(),
            post_extract_command: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Include patterns without wildcards are literal directory paths
        // and need no validation.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
