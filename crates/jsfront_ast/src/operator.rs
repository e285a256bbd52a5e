//! Operator enums carried by expression nodes.
//!
//! Each operator maps back to the token it was parsed from, so a printer or a
//! diagnostic can recover the source spelling without the token stream.

use crate::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Equality,
    Inequality,
    StrictEquality,
    StrictInequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    InstanceOf,
    In,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    Exponential,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
}

impl BinaryOperator {
    pub fn from_token(kind: SyntaxKind) -> Option<Self> {
        let op = match kind {
            SyntaxKind::EqualsEqualsToken => Self::Equality,
            SyntaxKind::ExclamationEqualsToken => Self::Inequality,
            SyntaxKind::EqualsEqualsEqualsToken => Self::StrictEquality,
            SyntaxKind::ExclamationEqualsEqualsToken => Self::StrictInequality,
            SyntaxKind::LessThanToken => Self::LessThan,
            SyntaxKind::LessThanEqualsToken => Self::LessThanOrEqual,
            SyntaxKind::GreaterThanToken => Self::GreaterThan,
            SyntaxKind::GreaterThanEqualsToken => Self::GreaterThanOrEqual,
            SyntaxKind::InstanceOfKeyword => Self::InstanceOf,
            SyntaxKind::InKeyword => Self::In,
            SyntaxKind::LessThanLessThanToken => Self::ShiftLeft,
            SyntaxKind::GreaterThanGreaterThanToken => Self::ShiftRight,
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Self::ShiftRightUnsigned,
            SyntaxKind::PlusToken => Self::Addition,
            SyntaxKind::MinusToken => Self::Subtraction,
            SyntaxKind::AsteriskToken => Self::Multiplication,
            SyntaxKind::SlashToken => Self::Division,
            SyntaxKind::PercentToken => Self::Remainder,
            SyntaxKind::AsteriskAsteriskToken => Self::Exponential,
            SyntaxKind::BarToken => Self::BitwiseOr,
            SyntaxKind::CaretToken => Self::BitwiseXor,
            SyntaxKind::AmpersandToken => Self::BitwiseAnd,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::StrictEquality => "===",
            Self::StrictInequality => "!==",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::InstanceOf => "instanceof",
            Self::In => "in",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::ShiftRightUnsigned => ">>>",
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Remainder => "%",
            Self::Exponential => "**",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::BitwiseAnd => "&",
        }
    }
}

/// Short-circuiting operators. Kept apart from [`BinaryOperator`] because
/// their right operand is conditionally evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    Coalesce,
}

impl LogicalOperator {
    pub fn from_token(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::AmpersandAmpersandToken => Some(Self::And),
            SyntaxKind::BarBarToken => Some(Self::Or),
            SyntaxKind::QuestionQuestionToken => Some(Self::Coalesce),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Coalesce => "??",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    Addition,
    Subtraction,
    Multiplication,
    Exponential,
    Division,
    Remainder,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LogicalAnd,
    LogicalOr,
    LogicalNullish,
}

impl AssignmentOperator {
    pub fn from_token(kind: SyntaxKind) -> Option<Self> {
        let op = match kind {
            SyntaxKind::EqualsToken => Self::Assign,
            SyntaxKind::PlusEqualsToken => Self::Addition,
            SyntaxKind::MinusEqualsToken => Self::Subtraction,
            SyntaxKind::AsteriskEqualsToken => Self::Multiplication,
            SyntaxKind::AsteriskAsteriskEqualsToken => Self::Exponential,
            SyntaxKind::SlashEqualsToken => Self::Division,
            SyntaxKind::PercentEqualsToken => Self::Remainder,
            SyntaxKind::LessThanLessThanEqualsToken => Self::ShiftLeft,
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Self::ShiftRight,
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => Self::ShiftRightUnsigned,
            SyntaxKind::AmpersandEqualsToken => Self::BitwiseAnd,
            SyntaxKind::BarEqualsToken => Self::BitwiseOr,
            SyntaxKind::CaretEqualsToken => Self::BitwiseXor,
            SyntaxKind::AmpersandAmpersandEqualsToken => Self::LogicalAnd,
            SyntaxKind::BarBarEqualsToken => Self::LogicalOr,
            SyntaxKind::QuestionQuestionEqualsToken => Self::LogicalNullish,
            _ => return None,
        };
        Some(op)
    }

    /// Whether the assignment only happens when the target's current value
    /// passes a logical test (`&&=`, `||=`, `??=`).
    pub fn is_logical(self) -> bool {
        matches!(self, Self::LogicalAnd | Self::LogicalOr | Self::LogicalNullish)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Plus,
    LogicalNot,
    BitwiseNot,
    TypeOf,
    Void,
    Delete,
}

impl UnaryOperator {
    pub fn from_token(kind: SyntaxKind) -> Option<Self> {
        let op = match kind {
            SyntaxKind::MinusToken => Self::Negate,
            SyntaxKind::PlusToken => Self::Plus,
            SyntaxKind::ExclamationToken => Self::LogicalNot,
            SyntaxKind::TildeToken => Self::BitwiseNot,
            SyntaxKind::TypeOfKeyword => Self::TypeOf,
            SyntaxKind::VoidKeyword => Self::Void,
            SyntaxKind::DeleteKeyword => Self::Delete,
            _ => return None,
        };
        Some(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl UpdateOperator {
    pub fn from_token(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::PlusPlusToken => Some(Self::Increment),
            SyntaxKind::MinusMinusToken => Some(Self::Decrement),
            _ => None,
        }
    }
}

/// The declaring keyword of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn from_token(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::VarKeyword => Some(Self::Var),
            SyntaxKind::LetKeyword => Some(Self::Let),
            SyntaxKind::ConstKeyword => Some(Self::Const),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_tokens_map() {
        for kind in [
            SyntaxKind::EqualsToken,
            SyntaxKind::PlusEqualsToken,
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken,
            SyntaxKind::QuestionQuestionEqualsToken,
        ] {
            assert!(AssignmentOperator::from_token(kind).is_some(), "{:?}", kind);
        }
        assert!(AssignmentOperator::from_token(SyntaxKind::EqualsEqualsToken).is_none());
    }

    #[test]
    fn test_logical_is_not_binary() {
        assert!(BinaryOperator::from_token(SyntaxKind::AmpersandAmpersandToken).is_none());
        assert_eq!(
            LogicalOperator::from_token(SyntaxKind::QuestionQuestionToken),
            Some(LogicalOperator::Coalesce)
        );
    }

    #[test]
    fn test_keyword_operators() {
        assert_eq!(BinaryOperator::from_token(SyntaxKind::InKeyword), Some(BinaryOperator::In));
        assert_eq!(UnaryOperator::from_token(SyntaxKind::TypeOfKeyword), Some(UnaryOperator::TypeOf));
        assert_eq!(BinaryOperator::Exponential.as_str(), "**");
    }
}
