use jsfront_ast::SyntaxKind;
use jsfront_core::text::{TextPos, TextSpan};

/// Upper bound on expression and block nesting. The deepest input allowed
/// fits on a default 2 MiB thread stack in an unoptimized build.
pub const MAX_RECURSION_DEPTH: u32 = 64;

/// A fatal parse failure. Parsing stops at the first one and no partial tree
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A `var`/`let`/`const` declaration left its `kw name = expr ;` shape.
    #[error("malformed declaration: expected {expected}, found {found}")]
    MalformedDeclaration {
        expected: SyntaxKind,
        found: SyntaxKind,
        span: TextSpan,
    },

    /// Valid syntax the parser recognizes but does not build.
    #[error("{kind} is not supported yet")]
    UnsupportedConstruct { kind: SyntaxKind, span: TextSpan },

    /// The token stream ran out. `expected` is `None` when an expression was
    /// expected rather than a specific token.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput {
        expected: Option<SyntaxKind>,
        offset: TextPos,
    },

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: SyntaxKind,
        found: SyntaxKind,
        span: TextSpan,
    },

    #[error("expression expected, found {found}")]
    ExpressionExpected { found: SyntaxKind, span: TextSpan },

    #[error("invalid assignment target")]
    InvalidAssignmentTarget { span: TextSpan },

    #[error("invalid numeric literal")]
    InvalidNumericLiteral { span: TextSpan },

    #[error("'??' cannot be mixed with '&&' or '||' without parentheses")]
    MixedNullishCoalescing { span: TextSpan },

    #[error("nesting exceeds {} levels", MAX_RECURSION_DEPTH)]
    NestingTooDeep { span: TextSpan },
}

impl ParseError {
    /// Where the error points. End-of-input errors get an empty span at the
    /// end of the buffer.
    pub fn span(&self) -> TextSpan {
        match *self {
            ParseError::MalformedDeclaration { span, .. }
            | ParseError::UnsupportedConstruct { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpressionExpected { span, .. }
            | ParseError::InvalidAssignmentTarget { span }
            | ParseError::InvalidNumericLiteral { span }
            | ParseError::MixedNullishCoalescing { span }
            | ParseError::NestingTooDeep { span } => span,
            ParseError::UnexpectedEndOfInput { offset, .. } => TextSpan::empty(offset),
        }
    }

    #[inline]
    pub fn offset(&self) -> TextPos {
        self.span().start
    }

    /// The token kind the parser wanted, when there was a specific one.
    pub fn expected(&self) -> Option<SyntaxKind> {
        match *self {
            ParseError::MalformedDeclaration { expected, .. }
            | ParseError::UnexpectedToken { expected, .. } => Some(expected),
            ParseError::UnexpectedEndOfInput { expected, .. } => expected,
            _ => None,
        }
    }

    /// The token kind the parser found instead.
    pub fn found(&self) -> Option<SyntaxKind> {
        match *self {
            ParseError::MalformedDeclaration { found, .. }
            | ParseError::UnexpectedToken { found, .. }
            | ParseError::ExpressionExpected { found, .. } => Some(found),
            ParseError::UnsupportedConstruct { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::MalformedDeclaration {
            expected: SyntaxKind::EqualsToken,
            found: SyntaxKind::NumericLiteral,
            span: TextSpan::new(6, 1),
        };
        assert_eq!(err.to_string(), "malformed declaration: expected '=', found numeric literal");
        assert_eq!(err.offset(), 6);
        assert_eq!(err.expected(), Some(SyntaxKind::EqualsToken));

        let err = ParseError::UnsupportedConstruct {
            kind: SyntaxKind::IfKeyword,
            span: TextSpan::new(0, 2),
        };
        assert_eq!(err.to_string(), "'if' is not supported yet");
    }

    #[test]
    fn test_end_of_input_span() {
        let err = ParseError::UnexpectedEndOfInput { expected: None, offset: 9 };
        assert_eq!(err.span(), TextSpan::empty(9));
        assert_eq!(err.found(), None);
    }
}
