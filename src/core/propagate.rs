//! Locale propagation: clone the primary resource file's key set into a
//! new locale file, translating values when a collaborator is available.
//!
//! Translation failures degrade to copying the source text, so the new
//! file is always structurally complete — every key present, even under
//! total translation failure. Calls are issued one at a time with a fixed
//! delay in between; there is no retry.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use serde_json::Value;

use crate::core::resource::ResourceStore;
use crate::core::translate::Translator;
use crate::issues::{Issue, TranslationIssue};

/// Pause between consecutive translation calls.
const TRANSLATION_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct PropagateOutcome {
    pub locale: String,
    /// Content keys written to the new file.
    pub keys: usize,
    /// Keys whose value came from the translator (the rest were copied).
    pub translated: usize,
    /// Per-key translation failures, as warnings.
    pub issues: Vec<Issue>,
}

/// Create `<locale>.arb` next to the primary file, copying its key set.
pub fn propagate(
    messages_root: &Path,
    primary_locale: &str,
    locale: &str,
    translator: Option<&dyn Translator>,
) -> Result<PropagateOutcome> {
    let template_path = messages_root.join(format!("{}.arb", primary_locale));
    if !template_path.exists() {
        bail!(
            "Primary resource file not found: {} (run extraction first)",
            template_path.display()
        );
    }

    let target_path = messages_root.join(format!("{}.arb", locale));
    if target_path.exists() {
        bail!("Resource file already exists: {}", target_path.display());
    }

    let template = ResourceStore::open(&template_path)?;
    let from_locale = template.locale().unwrap_or(primary_locale).to_string();

    let mut target = ResourceStore::open_or_create(&target_path, locale)?;
    let mut outcome = PropagateOutcome {
        locale: locale.to_string(),
        keys: 0,
        translated: 0,
        issues: Vec::new(),
    };

    for (index, key) in template.content_keys().iter().enumerate() {
        let source = template.get(key).cloned().unwrap_or(Value::Null);

        let value = match (&source, translator) {
            (Value::String(text), Some(translator)) => {
                if index > 0 {
                    thread::sleep(TRANSLATION_DELAY);
                }
                match translator.translate(text, &from_locale, locale) {
                    Ok(translated) => {
                        outcome.translated += 1;
                        Value::String(translated)
                    }
                    Err(err) => {
                        outcome.issues.push(Issue::Translation(TranslationIssue {
                            file_path: target_path.display().to_string(),
                            key: key.clone(),
                            error: err.to_string(),
                        }));
                        source.clone()
                    }
                }
            }
            // Non-string values and translator-less runs copy verbatim
            _ => source.clone(),
        };

        target.insert_value(key, value);
        outcome.keys += 1;
    }

    target.save()?;
    Ok(outcome)
}
