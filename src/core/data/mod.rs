//! Core data types shared across the extraction pipeline.
//!
//! - `SourceLocation`/`SourceContext`: positions in scanned source files
//! - `ExtractedLiteral`: one candidate string literal found at a call site

use std::ops::Range;

/// Pure position information in source code files (TSX/JSX/TS/JS).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position with the surrounding source line, for report display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    /// The source code line content for display.
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// Where a literal sat inside its UI element.
///
/// The shape decides how the rewriter verifies the bytes at the recorded
/// span before splicing in the reference expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralShape {
    /// Bare text child: `<Text>Hello</Text>`.
    Child,
    /// String-valued attribute: `placeholder="Hello"` or `placeholder={'Hello'}`.
    Attribute,
}

/// One candidate literal found at a UI-construction call site.
///
/// Produced by the collector with `key` unset; the synthesizer assigns a
/// key later. `span` is the byte range in the file that the rewriter
/// replaces: the trimmed text for a child, the quoted value or expression
/// container (braces included) for an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLiteral {
    pub text: String,
    pub context: SourceContext,
    pub span: Range<usize>,
    /// Element name for children, `Element.attr` for attributes.
    pub context_label: String,
    pub shape: LiteralShape,
    pub key: Option<String>,
}

impl ExtractedLiteral {
    pub fn file_path(&self) -> &str {
        self.context.file_path()
    }
}
