//! AST node definitions.
//!
//! Nodes live in a `bumpalo` arena owned by the caller. A parent refers to
//! each child through a unique `&'a` reference or `&'a [T]` slice, so the
//! tree stays strictly tree-shaped: the parser never hands one child to two
//! parents. Leaf text borrows from the source buffer, which must outlive the
//! arena's contents.

use crate::operator::*;
use jsfront_core::text::TextSpan;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Program
// ============================================================================

/// The root of a parsed compilation unit.
#[derive(Debug, PartialEq)]
pub struct Program<'a> {
    pub statements: NodeList<'a, Statement<'a>>,
    pub span: TextSpan,
}

// ============================================================================
// Leaves
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub name: &'a str,
    pub span: TextSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericLiteral {
    pub value: u64,
    pub span: TextSpan,
}

/// A string literal as written, quotes and escape sequences included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLiteral<'a> {
    pub raw: &'a str,
    pub span: TextSpan,
}

impl<'a> StringLiteral<'a> {
    /// The text between the quotes, escapes left undecoded.
    pub fn body(&self) -> &'a str {
        self.raw.get(1..self.raw.len().saturating_sub(1)).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: TextSpan,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum Expression<'a> {
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral<'a>),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(TextSpan),
    Identifier(Identifier<'a>),
    This(TextSpan),
    Super(TextSpan),
    NewTarget(TextSpan),
    ImportMeta(TextSpan),
    Parenthesized(ParenthesizedExpression<'a>),
    ArrayLiteral(ArrayLiteralExpression<'a>),
    ObjectLiteral(ObjectLiteralExpression<'a>),
    PropertyAccess(PropertyAccessExpression<'a>),
    ElementAccess(ElementAccessExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    Update(UpdateExpression<'a>),
    Unary(UnaryExpression<'a>),
    Await(AwaitExpression<'a>),
    Binary(BinaryExpression<'a>),
    Logical(LogicalExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Assignment(AssignmentExpression<'a>),
    Sequence(SequenceExpression<'a>),
    Spread(SpreadElement<'a>),
    Yield(YieldExpression<'a>),
    Function(FunctionExpression<'a>),
    Class(ClassExpression<'a>),
}

impl<'a> Expression<'a> {
    pub fn span(&self) -> TextSpan {
        match self {
            Expression::NumericLiteral(n) => n.span,
            Expression::StringLiteral(n) => n.span,
            Expression::BooleanLiteral(n) => n.span,
            Expression::Identifier(n) => n.span,
            Expression::NullLiteral(span)
            | Expression::This(span)
            | Expression::Super(span)
            | Expression::NewTarget(span)
            | Expression::ImportMeta(span) => *span,
            Expression::Parenthesized(n) => n.span,
            Expression::ArrayLiteral(n) => n.span,
            Expression::ObjectLiteral(n) => n.span,
            Expression::PropertyAccess(n) => n.span,
            Expression::ElementAccess(n) => n.span,
            Expression::Call(n) => n.span,
            Expression::New(n) => n.span,
            Expression::Update(n) => n.span,
            Expression::Unary(n) => n.span,
            Expression::Await(n) => n.span,
            Expression::Binary(n) => n.span,
            Expression::Logical(n) => n.span,
            Expression::Conditional(n) => n.span,
            Expression::Assignment(n) => n.span,
            Expression::Sequence(n) => n.span,
            Expression::Spread(n) => n.span,
            Expression::Yield(n) => n.span,
            Expression::Function(n) => n.span,
            Expression::Class(n) => n.span,
        }
    }

    /// Whether this expression may appear on the left of `=` or as the
    /// operand of `++`/`--`. Parentheses are looked through.
    pub fn is_simple_assignment_target(&self) -> bool {
        match self {
            Expression::Identifier(_)
            | Expression::PropertyAccess(PropertyAccessExpression { optional: false, .. })
            | Expression::ElementAccess(ElementAccessExpression { optional: false, .. }) => true,
            Expression::Parenthesized(inner) => inner.expression.is_simple_assignment_target(),
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParenthesizedExpression<'a> {
    pub expression: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub enum ArrayElement<'a> {
    Expression(Expression<'a>),
    Spread(SpreadElement<'a>),
    /// An elided slot, as in `[a, , b]`.
    Hole(TextSpan),
}

#[derive(Debug, PartialEq)]
pub struct ArrayLiteralExpression<'a> {
    pub elements: NodeList<'a, ArrayElement<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub enum PropertyKey<'a> {
    Identifier(Identifier<'a>),
    StringLiteral(StringLiteral<'a>),
    NumericLiteral(NumericLiteral),
    Computed(&'a Expression<'a>),
}

#[derive(Debug, PartialEq)]
pub enum ObjectMember<'a> {
    /// `key: value`
    Property {
        key: PropertyKey<'a>,
        value: &'a Expression<'a>,
        span: TextSpan,
    },
    /// `{ name }`
    Shorthand(Identifier<'a>),
    /// `{ ...source }`
    Spread(SpreadElement<'a>),
}

#[derive(Debug, PartialEq)]
pub struct ObjectLiteralExpression<'a> {
    pub members: NodeList<'a, ObjectMember<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct PropertyAccessExpression<'a> {
    pub object: &'a Expression<'a>,
    pub property: Identifier<'a>,
    /// Accessed with `?.`.
    pub optional: bool,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ElementAccessExpression<'a> {
    pub object: &'a Expression<'a>,
    pub index: &'a Expression<'a>,
    pub optional: bool,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct CallExpression<'a> {
    pub callee: &'a Expression<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
    pub optional: bool,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct NewExpression<'a> {
    pub callee: &'a Expression<'a>,
    /// `None` for `new Foo` without an argument list.
    pub arguments: Option<NodeList<'a, Expression<'a>>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct UpdateExpression<'a> {
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub operand: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct UnaryExpression<'a> {
    pub operator: UnaryOperator,
    pub operand: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct AwaitExpression<'a> {
    pub argument: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct BinaryExpression<'a> {
    pub left: &'a Expression<'a>,
    pub operator: BinaryOperator,
    pub right: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct LogicalExpression<'a> {
    pub left: &'a Expression<'a>,
    pub operator: LogicalOperator,
    pub right: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ConditionalExpression<'a> {
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct AssignmentExpression<'a> {
    pub operator: AssignmentOperator,
    pub target: &'a Expression<'a>,
    pub value: &'a Expression<'a>,
    pub span: TextSpan,
}

/// Comma-separated expressions, `a, b, c`.
#[derive(Debug, PartialEq)]
pub struct SequenceExpression<'a> {
    pub expressions: NodeList<'a, Expression<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct SpreadElement<'a> {
    pub argument: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct YieldExpression<'a> {
    pub argument: Option<&'a Expression<'a>>,
    /// `yield*`
    pub delegate: bool,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct FunctionExpression<'a> {
    pub name: Option<Identifier<'a>>,
    pub parameters: NodeList<'a, Identifier<'a>>,
    pub body: NodeList<'a, Statement<'a>>,
    pub is_async: bool,
    pub is_generator: bool,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ClassExpression<'a> {
    pub name: Option<Identifier<'a>>,
    pub super_class: Option<&'a Expression<'a>>,
    pub span: TextSpan,
}

// ============================================================================
// Statements and declarations
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum Statement<'a> {
    VariableDeclaration(VariableDeclaration<'a>),
    Block(BlockStatement<'a>),
    Empty(TextSpan),
    Expression(ExpressionStatement<'a>),
    Debugger(TextSpan),
    If(IfStatement<'a>),
    While(WhileStatement<'a>),
    DoWhile(DoWhileStatement<'a>),
    For(ForStatement<'a>),
    ForIn(ForInStatement<'a>),
    ForOf(ForOfStatement<'a>),
    Return(ReturnStatement<'a>),
    Break(JumpStatement<'a>),
    Continue(JumpStatement<'a>),
    Throw(ThrowStatement<'a>),
    Try(TryStatement<'a>),
    Switch(SwitchStatement<'a>),
    Labeled(LabeledStatement<'a>),
    Function(FunctionExpression<'a>),
    Class(ClassExpression<'a>),
    Import(ImportDeclaration<'a>),
    Export(ExportDeclaration<'a>),
}

impl<'a> Statement<'a> {
    pub fn span(&self) -> TextSpan {
        match self {
            Statement::VariableDeclaration(n) => n.span,
            Statement::Block(n) => n.span,
            Statement::Empty(span) | Statement::Debugger(span) => *span,
            Statement::Expression(n) => n.span,
            Statement::If(n) => n.span,
            Statement::While(n) => n.span,
            Statement::DoWhile(n) => n.span,
            Statement::For(n) => n.span,
            Statement::ForIn(n) => n.span,
            Statement::ForOf(n) => n.span,
            Statement::Return(n) => n.span,
            Statement::Break(n) | Statement::Continue(n) => n.span,
            Statement::Throw(n) => n.span,
            Statement::Try(n) => n.span,
            Statement::Switch(n) => n.span,
            Statement::Labeled(n) => n.span,
            Statement::Function(n) => n.span,
            Statement::Class(n) => n.span,
            Statement::Import(n) => n.span,
            Statement::Export(n) => n.span,
        }
    }
}

/// `var`/`let`/`const` with a single declarator.
#[derive(Debug, PartialEq)]
pub struct VariableDeclaration<'a> {
    pub kind: VariableKind,
    pub name: Identifier<'a>,
    pub initializer: Option<&'a Expression<'a>>,
    pub span: TextSpan,
}

impl<'a> VariableDeclaration<'a> {
    pub fn is_initialized(&self) -> bool {
        self.initializer.is_some()
    }
}

#[derive(Debug, PartialEq)]
pub struct BlockStatement<'a> {
    pub statements: NodeList<'a, Statement<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ExpressionStatement<'a> {
    pub expression: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct IfStatement<'a> {
    pub condition: &'a Expression<'a>,
    pub consequent: &'a Statement<'a>,
    pub alternate: Option<&'a Statement<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct WhileStatement<'a> {
    pub condition: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct DoWhileStatement<'a> {
    pub body: &'a Statement<'a>,
    pub condition: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub enum ForInit<'a> {
    Declaration(VariableDeclaration<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug, PartialEq)]
pub struct ForStatement<'a> {
    pub init: Option<ForInit<'a>>,
    pub test: Option<&'a Expression<'a>>,
    pub update: Option<&'a Expression<'a>>,
    pub body: &'a Statement<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ForInStatement<'a> {
    pub left: ForInit<'a>,
    pub right: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ForOfStatement<'a> {
    pub left: ForInit<'a>,
    pub right: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
    pub is_await: bool,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ReturnStatement<'a> {
    pub argument: Option<&'a Expression<'a>>,
    pub span: TextSpan,
}

/// `break` or `continue`, with an optional label.
#[derive(Debug, PartialEq)]
pub struct JumpStatement<'a> {
    pub label: Option<Identifier<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ThrowStatement<'a> {
    pub argument: &'a Expression<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct CatchClause<'a> {
    pub parameter: Option<Identifier<'a>>,
    pub body: BlockStatement<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct TryStatement<'a> {
    pub block: BlockStatement<'a>,
    pub handler: Option<CatchClause<'a>>,
    pub finalizer: Option<BlockStatement<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct SwitchCase<'a> {
    /// `None` for the `default:` clause.
    pub test: Option<&'a Expression<'a>>,
    pub consequent: NodeList<'a, Statement<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct SwitchStatement<'a> {
    pub discriminant: &'a Expression<'a>,
    pub cases: NodeList<'a, SwitchCase<'a>>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct LabeledStatement<'a> {
    pub label: Identifier<'a>,
    pub body: &'a Statement<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ImportDeclaration<'a> {
    pub specifiers: NodeList<'a, Identifier<'a>>,
    pub source: StringLiteral<'a>,
    pub span: TextSpan,
}

#[derive(Debug, PartialEq)]
pub struct ExportDeclaration<'a> {
    pub declaration: &'a Statement<'a>,
    pub is_default: bool,
    pub span: TextSpan,
}
