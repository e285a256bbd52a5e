//! jsfront_compiler: Compiler orchestration.
//!
//! Runs each source file through scan and parse, and turns failures into
//! diagnostics. Files are independent, so a [`Compilation`] processes them
//! in parallel, each with its own arena.

use bumpalo::Bump;
use jsfront_ast::node::Program;
use jsfront_core::text::LineMap;
use jsfront_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use jsfront_options::CompilerOptions;
use jsfront_parser::ParseError;
use jsfront_scanner::{LexError, ScanOptions};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Worker stack size. Parsing recurses once per nesting level, up to the
/// parser's depth limit.
pub const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// A source file queued for compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }

    pub fn read(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(path.to_string_lossy(), text))
    }
}

/// Why a single file failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CompileError {
    pub fn to_diagnostic(&self, file_name: &str, text: &str) -> Diagnostic {
        let line_map = LineMap::new(text);
        match self {
            CompileError::Lex(err) => Diagnostic::from_lex_error(file_name, &line_map, err),
            CompileError::Parse(err) => Diagnostic::from_parse_error(file_name, &line_map, err),
        }
    }
}

/// Lexer configuration derived from the compiler options.
pub fn scan_options(options: &CompilerOptions) -> ScanOptions {
    ScanOptions {
        strict: options.is_strict(),
    }
}

/// Scan and parse one file into `arena`.
#[instrument(level = "debug", skip(arena, text, options), fields(len = text.len()))]
pub fn compile_source<'a>(
    arena: &'a Bump,
    file_name: &str,
    text: &'a str,
    options: &CompilerOptions,
) -> Result<Program<'a>, CompileError> {
    let tokens = jsfront_scanner::scan_with_options(text, scan_options(options))?;
    let program = jsfront_parser::parse(arena, &tokens)?;
    Ok(program)
}

/// A set of source files compiled under one set of options.
#[derive(Debug, Clone, Default)]
pub struct Compilation {
    pub options: CompilerOptions,
    source_files: Vec<SourceFile>,
}

impl Compilation {
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            options,
            source_files: Vec::new(),
        }
    }

    pub fn add_source(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        self.source_files.push(SourceFile::new(file_name, text));
    }

    /// Read every path from disk, stopping at the first I/O failure.
    pub fn load_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> std::io::Result<()> {
        for path in paths {
            self.source_files.push(SourceFile::read(path.as_ref())?);
        }
        Ok(())
    }

    pub fn source_files(&self) -> &[SourceFile] {
        &self.source_files
    }

    /// Compile every file and return the diagnostics, sorted by file and
    /// position.
    pub fn compile(&self) -> DiagnosticCollection {
        debug!(
            files = self.source_files.len(),
            strict = self.options.is_strict(),
            "compiling"
        );

        let per_file: Vec<Vec<Diagnostic>> = match rayon::ThreadPoolBuilder::new()
            .stack_size(WORKER_STACK_SIZE)
            .build()
        {
            Ok(pool) => pool.install(|| {
                self.source_files
                    .par_iter()
                    .map(|file| self.compile_file(file))
                    .collect()
            }),
            Err(err) => {
                warn!(%err, "cannot start worker pool, compiling on the current thread");
                self.source_files.iter().map(|file| self.compile_file(file)).collect()
            }
        };

        let mut diagnostics = DiagnosticCollection::new();
        diagnostics.extend(per_file.into_iter().flatten());
        diagnostics.sort();
        diagnostics
    }

    fn compile_file(&self, file: &SourceFile) -> Vec<Diagnostic> {
        let arena = Bump::new();
        match compile_source(&arena, &file.file_name, &file.text, &self.options) {
            Ok(program) if program.statements.is_empty() => {
                vec![Diagnostic {
                    file: Some(file.file_name.clone()),
                    ..Diagnostic::new(&messages::FILE_0_CONTAINS_NO_STATEMENTS, &[file.file_name.as_str()])
                }]
            }
            Ok(_) => Vec::new(),
            Err(err) => {
                debug!(file = %file.file_name, %err, "compile failed");
                vec![err.to_diagnostic(&file.file_name, &file.text)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_source_ok() {
        let arena = Bump::new();
        let program = compile_source(&arena, "a.js", "let a = 1; a;", &CompilerOptions::default()).unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_compile_error_sources() {
        let arena = Bump::new();
        let options = CompilerOptions::default();
        assert!(matches!(
            compile_source(&arena, "a.js", "let s = 'open", &options),
            Err(CompileError::Lex(LexError::UnterminatedString { .. }))
        ));
        assert!(matches!(
            compile_source(&arena, "a.js", "let x 5;", &options),
            Err(CompileError::Parse(ParseError::MalformedDeclaration { .. }))
        ));
    }

    #[test]
    fn test_strict_option_reaches_scanner() {
        let arena = Bump::new();
        let loose = CompilerOptions::default();
        let strict = CompilerOptions { strict: Some(true) };
        assert!(compile_source(&arena, "a.js", "let static = 1;", &loose).is_ok());
        assert!(compile_source(&arena, "a.js", "let static = 1;", &strict).is_err());
    }

    #[test]
    fn test_error_diagnostic_position() {
        let err = CompileError::from(ParseError::ExpressionExpected {
            found: jsfront_ast::SyntaxKind::SemicolonToken,
            span: jsfront_core::text::TextSpan::new(12, 1),
        });
        let diag = err.to_diagnostic("m.js", "let a = 1;\nb = ;");
        assert_eq!(diag.to_string(), "m.js(2,2): error JS1109: Expression expected.");
    }
}
