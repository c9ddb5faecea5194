//! Translation collaborator interface.
//!
//! The propagator only needs `translate`; where translations come from
//! (an HTTP API, a CLI tool, a glossary file) is up to the implementor.
//! No implementation ships with the tool itself — without one, locale
//! propagation copies source text verbatim.

use anyhow::Result;

pub trait Translator {
    /// Translate `text` from one locale to another. Errors are per-key
    /// and non-fatal: the caller falls back to copying the source text.
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use anyhow::{Result, bail};

    use super::Translator;

    /// Scripted translator for tests: uppercases text and records calls,
    /// failing on texts listed in `fail_on`.
    pub struct FakeTranslator {
        pub fail_on: Vec<String>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeTranslator {
        pub fn new() -> Self {
            Self {
                fail_on: Vec::new(),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn failing_on(texts: &[&str]) -> Self {
            Self {
                fail_on: texts.iter().map(|s| s.to_string()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Translator for FakeTranslator {
        fn translate(&self, text: &str, _from: &str, to: &str) -> Result<String> {
            self.calls.borrow_mut().push(text.to_string());
            if self.fail_on.iter().any(|t| t == text) {
                bail!("no translation available");
            }
            Ok(format!("[{}] {}", to, text.to_uppercase()))
        }
    }
}
