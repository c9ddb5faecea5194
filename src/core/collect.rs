//! Literal collection: walks a parsed module and extracts user-facing
//! string literals from known UI elements.
//!
//! Two shapes are collected per qualifying element:
//! - bare text children (`<Text>Hello</Text>`), context label = element name
//! - string values of text-bearing attributes (`placeholder="Hello"`),
//!   context label = `Element.attr`
//!
//! Everything else is left alone. Candidates run through a fixed filter
//! chain; a literal failing any predicate is dropped silently.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use swc_common::{BytePos, Loc, SourceMap, Span};
use swc_ecma_ast::{
    Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementChild,
    JSXElementName, JSXExpr, JSXText, Lit, Module,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::data::{ExtractedLiteral, LiteralShape, SourceContext, SourceLocation};
use crate::core::parse::ParsedSource;
use crate::utils::contains_alphabetic;

static URL_OR_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://|www\.|\.{0,2}/)").unwrap());

static FORMAT_PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:\d+\$)?[a-zA-Z]").unwrap());

/// Decide whether a string literal qualifies as extractable UI text.
///
/// Rejected: short strings, URLs and paths, pure numbers, SCREAMING_CASE
/// constants, format placeholders, interpolations, and strings without a
/// single alphabetic character.
pub fn is_candidate(text: &str) -> bool {
    if text.chars().count() < 2 {
        return false;
    }
    if URL_OR_PATH_REGEX.is_match(text) {
        return false;
    }
    if text.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if is_constant_shape(text) {
        return false;
    }
    if FORMAT_PLACEHOLDER_REGEX.is_match(text) {
        return false;
    }
    if text.contains("${") {
        return false;
    }
    contains_alphabetic(text)
}

/// `OK`, `MAX_RETRY_COUNT` and friends are constants, not UI text.
fn is_constant_shape(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_uppercase())
        && text
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Configuration slice the collector needs: which elements and attributes
/// to look at, plus user-listed texts to leave alone.
pub struct CollectOptions<'a> {
    pub elements: &'a HashSet<String>,
    pub text_attributes: &'a HashSet<String>,
    pub ignore_texts: &'a HashSet<String>,
}

/// Collect qualifying literals from a parsed file, in source order.
pub fn collect_literals(
    parsed: &ParsedSource,
    file_path: &str,
    options: &CollectOptions,
) -> Vec<ExtractedLiteral> {
    let collector = LiteralCollector {
        file_path,
        source_map: &parsed.source_map,
        file_start: parsed.source_file.start_pos,
        options,
        literals: Vec::new(),
    };
    collector.collect(&parsed.module)
}

struct LiteralCollector<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    /// Start position of this file within its SourceMap, for converting
    /// global byte positions into file-local offsets.
    file_start: BytePos,
    options: &'a CollectOptions<'a>,
    literals: Vec<ExtractedLiteral>,
}

impl<'a> LiteralCollector<'a> {
    fn collect(mut self, module: &Module) -> Vec<ExtractedLiteral> {
        self.visit_module(module);
        self.literals
    }

    fn should_collect(&self, text: &str) -> bool {
        if self.options.ignore_texts.contains(text) {
            return false;
        }
        is_candidate(text)
    }

    fn make_context(&self, loc: &Loc) -> SourceContext {
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();
        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }

    fn push_literal(
        &mut self,
        text: &str,
        lo: BytePos,
        hi: BytePos,
        context_label: String,
        shape: LiteralShape,
    ) {
        let loc = self.source_map.lookup_char_pos(lo);
        let start = (lo - self.file_start).0 as usize;
        let end = (hi - self.file_start).0 as usize;
        self.literals.push(ExtractedLiteral {
            text: text.to_owned(),
            context: self.make_context(&loc),
            span: start..end,
            context_label,
            shape,
            key: None,
        });
    }

    /// Collect a bare text child of a qualifying element.
    ///
    /// The recorded span covers only the trimmed text, so surrounding
    /// indentation survives replacement.
    fn collect_text_child(&mut self, element_name: &str, node: &JSXText) {
        let raw_value = &node.value;
        let trimmed = raw_value.trim();

        if trimmed.is_empty() || !self.should_collect(trimmed) {
            return;
        }

        let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
        let lo = node.span.lo + BytePos(trim_start_offset as u32);
        let hi = lo + BytePos(trimmed.len() as u32);
        self.push_literal(trimmed, lo, hi, element_name.to_owned(), LiteralShape::Child);
    }

    /// Collect a text-bearing attribute value. Returns true if the
    /// attribute was consumed (so the caller skips recursing into it).
    fn collect_attr(&mut self, element_name: &str, attr: &JSXAttr) -> bool {
        let attr_name = match &attr.name {
            JSXAttrName::Ident(ident) => ident.sym.to_string(),
            JSXAttrName::JSXNamespacedName(ns) => {
                format!("{}-{}", ns.ns.sym, ns.name.sym)
            }
        };

        if !self.options.text_attributes.contains(&attr_name) {
            return false;
        }

        let (value, span): (&str, Span) = match &attr.value {
            // placeholder="Hello" - span covers the quoted literal
            Some(JSXAttrValue::Str(s)) => match s.value.as_str() {
                Some(value) => (value, s.span),
                None => return false,
            },
            // placeholder={'Hello'} - span covers the whole container
            Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
                JSXExpr::Expr(expr) => match &**expr {
                    Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
                        Some(value) => (value, container.span),
                        None => return false,
                    },
                    _ => return false,
                },
                _ => return false,
            },
            _ => return false,
        };

        if !self.should_collect(value) {
            return false;
        }

        let label = format!("{}.{}", element_name, attr_name);
        self.push_literal(value, span.lo, span.hi, label, LiteralShape::Attribute);
        true
    }
}

impl<'a> Visit for LiteralCollector<'a> {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let element_name = match &node.opening.name {
            JSXElementName::Ident(ident) => Some(ident.sym.to_string()),
            _ => None,
        };
        let qualifying = element_name
            .as_deref()
            .is_some_and(|name| self.options.elements.contains(name));

        let Some(name) = element_name.filter(|_| qualifying) else {
            node.visit_children_with(self);
            return;
        };

        // Attributes first (source order within the opening tag)
        for attr in &node.opening.attrs {
            match attr {
                JSXAttrOrSpread::JSXAttr(jsx_attr) => {
                    if !self.collect_attr(&name, jsx_attr)
                        && let Some(value) = &jsx_attr.value
                    {
                        value.visit_with(self);
                    }
                }
                JSXAttrOrSpread::SpreadElement(spread) => spread.visit_with(self),
            }
        }

        // Then children: text children are collected, nested markup recursed
        for child in &node.children {
            match child {
                JSXElementChild::JSXText(text) => self.collect_text_child(&name, text),
                other => other.visit_with(self),
            }
        }
    }
}
