//! Token classification helpers used by the parser's dispatch.

use jsfront_ast::SyntaxKind;

/// Statement keywords the AST models but the parser does not build yet.
pub fn is_unsupported_statement_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::IfKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::WithKeyword
            | SyntaxKind::SwitchKeyword
            | SyntaxKind::ThrowKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::ExportKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::EnumKeyword
            | SyntaxKind::InterfaceKeyword
    )
}

/// Expression forms that are valid input but not built by the parser:
/// function and class expressions, regular expressions.
pub fn is_unsupported_expression_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FunctionKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::SlashToken
            | SyntaxKind::SlashEqualsToken
    )
}

/// Whether `kind` can follow `yield` as the start of its operand.
pub fn can_start_yield_operand(kind: SyntaxKind) -> bool {
    !matches!(
        kind,
        SyntaxKind::CloseParenToken
            | SyntaxKind::CloseBracketToken
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::CommaToken
            | SyntaxKind::SemicolonToken
            | SyntaxKind::ColonToken
            | SyntaxKind::QuestionToken
            | SyntaxKind::EqualsGreaterThanToken
    ) && !kind.is_assignment_operator()
}

/// Tokens allowed after `.` or `?.` as a property name.
#[inline]
pub fn is_property_name(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Identifier || kind.is_keyword()
}
