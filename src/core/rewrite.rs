//! Source rewriting: splices reference expressions over extracted literal
//! spans and inserts the translation import once per file.
//!
//! Substitution is span-based, keyed by the byte range recorded at
//! collection time. The bytes at the span are verified against the
//! expected literal before splicing, so a file edited between collection
//! and replacement degrades to a recorded failure instead of corrupting
//! unrelated text. Callers apply replacements in reverse source order
//! within a file, which keeps earlier spans valid across edits.

use crate::core::data::{ExtractedLiteral, LiteralShape};

/// The expression substituted for a literal, valid both as a JSX child
/// and as an attribute value.
pub fn reference_expression(key: &str) -> String {
    format!("{{t('{}')}}", key)
}

/// Module specifier of the translation import for a given package.
pub fn import_specifier(package_name: &str) -> String {
    format!("{}/i18n", package_name)
}

/// Replace one literal with its reference expression.
///
/// Returns false without touching `content` when the span is out of
/// bounds or the bytes there no longer spell the expected literal.
pub fn splice_literal(content: &mut String, literal: &ExtractedLiteral, key: &str) -> bool {
    let span = literal.span.clone();
    if span.end > content.len()
        || !content.is_char_boundary(span.start)
        || !content.is_char_boundary(span.end)
    {
        return false;
    }

    let slice = &content[span.clone()];
    let matches = match literal.shape {
        LiteralShape::Child => slice == literal.text,
        LiteralShape::Attribute => attribute_matches(slice, &literal.text),
    };
    if !matches {
        return false;
    }

    content.replace_range(span, &reference_expression(key));
    true
}

/// Check that an attribute span still holds the literal: a quoted string,
/// optionally wrapped in an expression container.
fn attribute_matches(slice: &str, text: &str) -> bool {
    let inner = match slice.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(unbraced) => unbraced.trim(),
        None => slice,
    };

    for quote in ['"', '\''] {
        if let Some(body) = inner
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return body == text;
        }
    }
    false
}

/// Insert the translation import if its module specifier is not already
/// present. Returns the new content when an insert happened.
///
/// The import goes after the last top-level import line, or at the very
/// top when the file has none. The specifier doubles as the idempotence
/// marker: a prior run's import keeps it in the file.
pub fn ensure_import(content: &str, package_name: &str) -> Option<String> {
    let specifier = import_specifier(package_name);
    if content.contains(&format!("\"{}\"", specifier))
        || content.contains(&format!("'{}'", specifier))
    {
        return None;
    }

    let import_line = format!("import {{ t }} from \"{}\";", specifier);

    let mut insert_at = None;
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_start().starts_with("import ") {
            insert_at = Some(offset + line.len());
        }
        offset += line.len();
    }

    let mut out = String::with_capacity(content.len() + import_line.len() + 1);
    match insert_at {
        Some(at) => {
            out.push_str(&content[..at]);
            if !content[..at].ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&import_line);
            out.push('\n');
            out.push_str(&content[at..]);
        }
        None => {
            out.push_str(&import_line);
            out.push('\n');
            out.push_str(content);
        }
    }
    Some(out)
}
