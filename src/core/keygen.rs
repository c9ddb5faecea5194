//! Identifier synthesis: turns literal text into a stable camelCase key.
//!
//! Collision state is an explicit value threaded through a batch, never a
//! global. Callers seed it with every key already present in the target
//! resource file so freshly minted keys can never collide with disk state.

use std::collections::{HashMap, HashSet};

/// Prefix used when the cleaned text starts with a digit or yields no
/// usable words at all.
const FALLBACK_PREFIX: &str = "text";

/// Maximum number of words contributing to an identifier.
const MAX_WORDS: usize = 5;

/// Identifiers already taken, plus a per-base counter so repeated
/// collisions keep incrementing instead of rescanning from 2.
#[derive(Debug, Default)]
pub struct UsedKeys {
    keys: HashSet<String>,
    counters: HashMap<String, usize>,
}

impl UsedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with keys already present in the resource file.
    pub fn seed<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Synthesize a collision-free identifier for the given literal text.
///
/// The result always matches `[a-z][A-Za-z0-9]*` and is inserted into
/// `used` before returning. Deterministic for a given `used` state.
pub fn synthesize(text: &str, used: &mut UsedKeys) -> String {
    let base = base_identifier(text);

    if !used.contains(&base) {
        used.keys.insert(base.clone());
        return base;
    }

    let mut counter = *used.counters.entry(base.clone()).or_insert(2);
    loop {
        let candidate = format!("{}{}", base, counter);
        counter += 1;
        if !used.contains(&candidate) {
            used.counters.insert(base.clone(), counter);
            used.keys.insert(candidate.clone());
            return candidate;
        }
    }
}

/// Build the camelCase base: first word as-is, up to four more words
/// capitalized. Non-ASCII and punctuation are stripped first; text that
/// strips to nothing falls back to a content-hash identifier so the same
/// literal always yields the same fallback.
fn base_identifier(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let words: Vec<&str> = cleaned.split_whitespace().take(MAX_WORDS).collect();

    if words.is_empty() {
        return format!("{}{:x}", FALLBACK_PREFIX, fnv1a(text));
    }

    let mut base = String::from(words[0]);
    for word in &words[1..] {
        base.push_str(&capitalize(word));
    }

    if base.starts_with(|c: char| c.is_ascii_digit()) {
        base = format!("{}{}", FALLBACK_PREFIX, capitalize(&base));
    }

    base
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// FNV-1a over the original text; stable across runs and platforms.
fn fnv1a(text: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in text.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
