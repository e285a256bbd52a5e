//! jsfront_diagnostics: Diagnostic messages and error reporting.
//!
//! Turns the typed lexer and parser errors into coded, positioned
//! [`Diagnostic`] values drawn from a fixed message catalogue.

use jsfront_ast::SyntaxKind;
use jsfront_core::text::{LineAndColumn, LineMap, TextSpan};
use jsfront_parser::{ParseError, MAX_RECURSION_DEPTH};
use jsfront_scanner::LexError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A message template with its code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    /// May contain `{0}`, `{1}`, ... placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file the diagnostic belongs to, if any.
    pub file: Option<String>,
    pub span: Option<TextSpan>,
    /// 1-based position of `span.start`.
    pub line_and_column: Option<LineAndColumn>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            line_and_column: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic pointing at `span` in `file`.
    pub fn with_location(
        file: String,
        line_map: &LineMap,
        span: TextSpan,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: Some(file),
            span: Some(span),
            line_and_column: Some(line_map.line_and_column_of(span.start)),
            ..Self::new(message, args)
        }
    }

    pub fn from_lex_error(file: &str, line_map: &LineMap, err: &LexError) -> Self {
        let at = |message: &DiagnosticMessage, args: &[&str]| {
            Self::with_location(file.to_string(), line_map, TextSpan::new(err.offset(), 1), message, args)
        };
        match err {
            LexError::UnterminatedString { .. } => at(&messages::UNTERMINATED_STRING_LITERAL, &[]),
            LexError::UnexpectedCharacter { ch, .. } => {
                at(&messages::INVALID_CHARACTER_0, &[&ch.escape_debug().to_string()])
            }
            LexError::BufferExhaustedMidToken { .. } => at(&messages::UNEXPECTED_END_OF_TEXT, &[]),
            LexError::SourceTooLarge { length } => Self {
                file: Some(file.to_string()),
                ..Self::new(&messages::SOURCE_FILE_TOO_LARGE_0, &[&length.to_string()])
            },
        }
    }

    pub fn from_parse_error(file: &str, line_map: &LineMap, err: &ParseError) -> Self {
        let at = |message: &DiagnosticMessage, args: &[&str]| {
            Self::with_location(file.to_string(), line_map, err.span(), message, args)
        };
        match *err {
            ParseError::MalformedDeclaration { expected, .. }
            | ParseError::UnexpectedToken { expected, .. } => expected_token(expected, at),
            ParseError::UnexpectedEndOfInput { expected: Some(expected), .. } => {
                expected_token(expected, at)
            }
            ParseError::UnexpectedEndOfInput { expected: None, .. }
            | ParseError::ExpressionExpected { .. } => at(&messages::EXPRESSION_EXPECTED, &[]),
            ParseError::UnsupportedConstruct { kind, .. } => {
                at(&messages::_0_IS_NOT_SUPPORTED_YET, &[&kind_text(kind)])
            }
            ParseError::InvalidAssignmentTarget { .. } => {
                at(&messages::THE_LEFT_HAND_SIDE_OF_AN_ASSIGNMENT_MUST_BE_A_VARIABLE_OR_PROPERTY_ACCESS, &[])
            }
            ParseError::InvalidNumericLiteral { .. } => at(&messages::INVALID_NUMERIC_LITERAL, &[]),
            ParseError::MixedNullishCoalescing { .. } => {
                at(&messages::_0_AND_1_OPERATIONS_CANNOT_BE_MIXED_WITHOUT_PARENTHESES, &["??", "&& or ||"])
            }
            ParseError::NestingTooDeep { .. } => {
                at(&messages::NESTING_EXCEEDS_0_LEVELS, &[&MAX_RECURSION_DEPTH.to_string()])
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

fn expected_token(
    expected: SyntaxKind,
    at: impl FnOnce(&DiagnosticMessage, &[&str]) -> Diagnostic,
) -> Diagnostic {
    match expected {
        SyntaxKind::Identifier => at(&messages::IDENTIFIER_EXPECTED, &[]),
        kind => at(&messages::_0_EXPECTED, &[&kind_text(kind)]),
    }
}

/// Source spelling of a fixed token, or its description for content tokens.
fn kind_text(kind: SyntaxKind) -> String {
    kind.text().map_or_else(|| kind.to_string(), str::to_string)
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(position) = self.line_and_column {
                write!(f, "({})", position)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} JS{}: {}", self.category, self.code, self.message_text)
    }
}

/// Replace `{0}`, `{1}`, ... in `template` with `args`.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Diagnostics accumulated across files.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Sort by file, then position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then_with(|| a.span.map(|s| s.start).cmp(&b.span.map(|s| s.start)))
        });
    }
}

impl Extend<Diagnostic> for DiagnosticCollection {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const UNEXPECTED_END_OF_TEXT: DiagnosticMessage = diag!(1126, Error, "Unexpected end of text.");
    pub const INVALID_CHARACTER_0: DiagnosticMessage = diag!(1127, Error, "Invalid character '{0}'.");
    pub const SOURCE_FILE_TOO_LARGE_0: DiagnosticMessage = diag!(1199, Error, "Source file is too large ({0} bytes).");

    // ========================================================================
    // Parser errors
    // ========================================================================
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1003, Error, "Identifier expected.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, Error, "'{0}' expected.");
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1109, Error, "Expression expected.");
    pub const INVALID_NUMERIC_LITERAL: DiagnosticMessage = diag!(1124, Error, "Invalid numeric literal.");
    pub const _0_IS_NOT_SUPPORTED_YET: DiagnosticMessage = diag!(1200, Error, "'{0}' is not supported yet.");
    pub const NESTING_EXCEEDS_0_LEVELS: DiagnosticMessage = diag!(1201, Error, "Expression nesting exceeds {0} levels.");
    pub const THE_LEFT_HAND_SIDE_OF_AN_ASSIGNMENT_MUST_BE_A_VARIABLE_OR_PROPERTY_ACCESS: DiagnosticMessage = diag!(2364, Error, "The left-hand side of an assignment expression must be a variable or a property access.");
    pub const _0_AND_1_OPERATIONS_CANNOT_BE_MIXED_WITHOUT_PARENTHESES: DiagnosticMessage = diag!(5076, Error, "'{0}' and '{1}' operations cannot be mixed without parentheses.");

    // ========================================================================
    // Driver messages
    // ========================================================================
    pub const FILE_0_CONTAINS_NO_STATEMENTS: DiagnosticMessage = diag!(6001, Warning, "File '{0}' contains no statements.");
}
