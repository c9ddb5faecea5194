//! TSX/JSX parsing behind a narrow resolve-a-file interface.
//!
//! The rest of the pipeline only sees `ParsedSource`; swapping the parser
//! out would not touch the collector or the rewriter. Parse failures are
//! reported back to the caller, which skips the file and records a warning
//! rather than aborting the run.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use swc_common::{FileName, Globals, SourceFile, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed source file with position lookup intact.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// Needed to translate global byte positions into file-local offsets.
    pub source_file: Arc<SourceFile>,
}

impl ParsedSource {
    /// File-local byte offset of a global position.
    pub fn local_offset(&self, pos: swc_common::BytePos) -> usize {
        (pos - self.source_file.start_pos).0 as usize
    }
}

/// Read and parse a source file from disk.
pub fn resolve_file(path: &str) -> Result<ParsedSource> {
    let code =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    parse_source(code, path)
}

/// Parse JSX/TSX source code string into an AST.
///
/// Uses a fresh SourceMap per file; processing is strictly sequential so
/// nothing is shared across files.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Arc::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedSource {
            module,
            source_map,
            source_file,
        })
    })
}
