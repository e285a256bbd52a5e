//! The parser: recursive descent over statements, precedence climbing over
//! binary operators.
//!
//! It reads a finished token sequence with one token of lookahead and builds
//! the tree into a caller-owned arena. Every production either commits and
//! succeeds or returns the first error; nothing is recovered.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use jsfront_ast::node::*;
use jsfront_ast::operator::*;
use jsfront_ast::SyntaxKind;
use jsfront_core::text::{TextPos, TextSpan};
use jsfront_scanner::{Token, TokenSequence};
use tracing::trace;

use crate::error::{ParseError, MAX_RECURSION_DEPTH};
use crate::precedence::{binary_operator_precedence, OperatorPrecedence};
use crate::utilities::*;

/// Parser state over one token sequence.
pub struct Parser<'a, 't> {
    arena: &'a Bump,
    source: &'a str,
    tokens: &'t [Token],
    /// Index of the current token.
    pos: usize,
    /// End offset of the last consumed token.
    prev_end: TextPos,
    recursion_depth: u32,
}

impl<'a, 't> Parser<'a, 't> {
    pub fn new(arena: &'a Bump, tokens: &'t TokenSequence<'a>) -> Self {
        Self {
            arena,
            source: tokens.source(),
            tokens: tokens.as_slice(),
            pos: 0,
            prev_end: 0,
            recursion_depth: 0,
        }
    }

    /// Parse every remaining statement.
    pub fn parse_program(&mut self) -> Result<Program<'a>, ParseError> {
        let mut statements = BumpVec::new_in(self.arena);
        while let Some(statement) = self.parse_statement_or_declaration()? {
            statements.push(statement);
        }
        Ok(Program {
            statements: statements.into_bump_slice(),
            span: TextSpan::from_bounds(0, self.end_of_input()),
        })
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    #[inline]
    fn current_kind(&self) -> Option<SyntaxKind> {
        self.current().map(|t| t.kind)
    }

    #[inline]
    fn peek_kind(&self, ahead: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + ahead).map(|t| t.kind)
    }

    #[inline]
    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == Some(kind)
    }

    #[inline]
    fn end_of_input(&self) -> TextPos {
        self.source.len() as TextPos
    }

    /// Consume the current token. Callers check it exists first.
    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        self.prev_end = token.span.end();
        token
    }

    fn optional(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> Result<Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => Ok(self.bump()),
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: kind,
                found: token.kind,
                span: token.span,
            }),
            None => Err(self.end_of_input_error(Some(kind))),
        }
    }

    /// Like [`Parser::expect`], but reports a broken declaration shape.
    fn expect_in_declaration(&mut self, kind: SyntaxKind) -> Result<Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => Ok(self.bump()),
            Some(token) => Err(ParseError::MalformedDeclaration {
                expected: kind,
                found: token.kind,
                span: token.span,
            }),
            None => Err(self.end_of_input_error(Some(kind))),
        }
    }

    fn end_of_input_error(&self, expected: Option<SyntaxKind>) -> ParseError {
        ParseError::UnexpectedEndOfInput {
            expected,
            offset: self.end_of_input(),
        }
    }

    #[inline]
    fn text(&self, token: Token) -> &'a str {
        token.span.slice(self.source).unwrap_or("")
    }

    /// Span from `start` through the last consumed token.
    #[inline]
    fn span_from(&self, start: TextPos) -> TextSpan {
        TextSpan::from_bounds(start, self.prev_end.max(start))
    }

    #[inline]
    fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    /// Run `f` one nesting level deeper, failing once the limit is passed.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            let span = self
                .current()
                .map_or(TextSpan::empty(self.end_of_input()), |t| t.span);
            return Err(ParseError::NestingTooDeep { span });
        }
        self.recursion_depth += 1;
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse one statement, or return `None` at the end of the token stream.
    pub fn parse_statement_or_declaration(&mut self) -> Result<Option<Statement<'a>>, ParseError> {
        let Some(token) = self.current() else {
            return Ok(None);
        };
        trace!(kind = ?token.kind, offset = token.span.start, "statement");

        let statement = match token.kind {
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                Statement::VariableDeclaration(self.parse_variable_declaration()?)
            }
            SyntaxKind::SemicolonToken => {
                self.bump();
                Statement::Empty(token.span)
            }
            SyntaxKind::OpenBraceToken => Statement::Block(self.parse_block()?),
            SyntaxKind::DebuggerKeyword => {
                self.bump();
                self.expect(SyntaxKind::SemicolonToken)?;
                Statement::Debugger(self.span_from(token.span.start))
            }
            // `import.meta` starts an expression, not a declaration.
            SyntaxKind::ImportKeyword if self.peek_kind(1) == Some(SyntaxKind::DotToken) => {
                self.parse_expression_statement()?
            }
            kind if is_unsupported_statement_start(kind) => {
                return Err(ParseError::UnsupportedConstruct { kind, span: token.span });
            }
            _ => self.parse_expression_statement()?,
        };
        Ok(Some(statement))
    }

    /// `var|let|const <identifier> = <expression> ;`
    fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration<'a>, ParseError> {
        let keyword = self.bump();
        let kind = match VariableKind::from_token(keyword.kind) {
            Some(kind) => kind,
            None => {
                return Err(ParseError::UnexpectedToken {
                    expected: SyntaxKind::LetKeyword,
                    found: keyword.kind,
                    span: keyword.span,
                })
            }
        };
        let name_token = self.expect_in_declaration(SyntaxKind::Identifier)?;
        let name = Identifier {
            name: self.text(name_token),
            span: name_token.span,
        };
        self.expect_in_declaration(SyntaxKind::EqualsToken)?;
        let initializer = self.parse_assignment_expression()?;
        self.expect_in_declaration(SyntaxKind::SemicolonToken)?;

        Ok(VariableDeclaration {
            kind,
            name,
            initializer: Some(self.alloc(initializer)),
            span: self.span_from(keyword.span.start),
        })
    }

    fn parse_block(&mut self) -> Result<BlockStatement<'a>, ParseError> {
        self.nested(|p| {
            let open = p.expect(SyntaxKind::OpenBraceToken)?;
            let mut statements = BumpVec::new_in(p.arena);
            loop {
                match p.current_kind() {
                    Some(SyntaxKind::CloseBraceToken) => {
                        p.bump();
                        break;
                    }
                    None => return Err(p.end_of_input_error(Some(SyntaxKind::CloseBraceToken))),
                    Some(_) => {
                        if let Some(statement) = p.parse_statement_or_declaration()? {
                            statements.push(statement);
                        }
                    }
                }
            }
            Ok(BlockStatement {
                statements: statements.into_bump_slice(),
                span: p.span_from(open.span.start),
            })
        })
    }

    fn parse_expression_statement(&mut self) -> Result<Statement<'a>, ParseError> {
        let expression = self.parse_expression()?;
        let start = expression.span().start;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Statement::Expression(ExpressionStatement {
            expression: self.alloc(expression),
            span: self.span_from(start),
        }))
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// A comma-separated sequence of assignment expressions.
    pub fn parse_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        let first = self.parse_assignment_expression()?;
        if !self.at(SyntaxKind::CommaToken) {
            return Ok(first);
        }

        let start = first.span().start;
        let mut expressions = BumpVec::new_in(self.arena);
        expressions.push(first);
        while self.optional(SyntaxKind::CommaToken).is_some() {
            expressions.push(self.parse_assignment_expression()?);
        }
        Ok(Expression::Sequence(SequenceExpression {
            expressions: expressions.into_bump_slice(),
            span: self.span_from(start),
        }))
    }

    /// Assignment is right-associative: `a = b = c` is `a = (b = c)`.
    fn parse_assignment_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        self.nested(|p| {
            if p.at(SyntaxKind::YieldKeyword) {
                return p.parse_yield_expression();
            }
            if p.at(SyntaxKind::OpenParenToken)
                && p.peek_kind(1) == Some(SyntaxKind::CloseParenToken)
                && p.peek_kind(2) == Some(SyntaxKind::EqualsGreaterThanToken)
            {
                let open = p.bump();
                return Err(ParseError::UnsupportedConstruct {
                    kind: SyntaxKind::EqualsGreaterThanToken,
                    span: open.span,
                });
            }

            let target = p.parse_conditional_expression()?;

            let Some(token) = p.current() else {
                return Ok(target);
            };
            if token.kind == SyntaxKind::EqualsGreaterThanToken {
                return Err(ParseError::UnsupportedConstruct {
                    kind: token.kind,
                    span: token.span,
                });
            }
            let Some(operator) = AssignmentOperator::from_token(token.kind) else {
                return Ok(target);
            };
            if !target.is_simple_assignment_target() {
                return Err(ParseError::InvalidAssignmentTarget { span: target.span() });
            }
            p.bump();
            let value = p.parse_assignment_expression()?;
            let start = target.span().start;
            Ok(Expression::Assignment(AssignmentExpression {
                operator,
                target: p.alloc(target),
                value: p.alloc(value),
                span: p.span_from(start),
            }))
        })
    }

    fn parse_yield_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        let keyword = self.bump();
        let delegate = self.optional(SyntaxKind::AsteriskToken).is_some();
        let argument = match self.current_kind() {
            Some(kind) if delegate || can_start_yield_operand(kind) => {
                let argument = self.parse_assignment_expression()?;
                Some(self.alloc(argument))
            }
            None if delegate => return Err(self.end_of_input_error(None)),
            _ => None,
        };
        Ok(Expression::Yield(YieldExpression {
            argument,
            delegate,
            span: self.span_from(keyword.span.start),
        }))
    }

    fn parse_conditional_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        let condition = self.parse_binary_expression(OperatorPrecedence::Conditional)?;
        if self.optional(SyntaxKind::QuestionToken).is_none() {
            return Ok(condition);
        }

        let when_true = self.parse_assignment_expression()?;
        self.expect(SyntaxKind::ColonToken)?;
        let when_false = self.parse_assignment_expression()?;
        let start = condition.span().start;
        Ok(Expression::Conditional(ConditionalExpression {
            condition: self.alloc(condition),
            when_true: self.alloc(when_true),
            when_false: self.alloc(when_false),
            span: self.span_from(start),
        }))
    }

    /// Precedence climbing: fold operators that bind tighter than
    /// `min_precedence` into `left`.
    fn parse_binary_expression(
        &mut self,
        min_precedence: OperatorPrecedence,
    ) -> Result<Expression<'a>, ParseError> {
        let mut left = self.parse_unary_expression()?;

        while let Some(kind) = self.current_kind() {
            let precedence = binary_operator_precedence(kind);
            if precedence == OperatorPrecedence::Invalid || precedence <= min_precedence {
                break;
            }

            self.bump();
            let floor = precedence.right_operand_floor();
            let right = if floor < precedence {
                // A right-associative chain recurses once per operator.
                self.nested(|p| p.parse_binary_expression(floor))?
            } else {
                self.parse_binary_expression(floor)?
            };
            let span = left.span().cover(right.span());

            left = match LogicalOperator::from_token(kind) {
                Some(operator) => {
                    check_nullish_mixing(operator, &left, &right, span)?;
                    Expression::Logical(LogicalExpression {
                        left: self.alloc(left),
                        operator,
                        right: self.alloc(right),
                        span,
                    })
                }
                None => {
                    let Some(operator) = BinaryOperator::from_token(kind) else {
                        break;
                    };
                    Expression::Binary(BinaryExpression {
                        left: self.alloc(left),
                        operator,
                        right: self.alloc(right),
                        span,
                    })
                }
            };
        }

        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        let Some(token) = self.current() else {
            return Err(self.end_of_input_error(None));
        };

        if let Some(operator) = UpdateOperator::from_token(token.kind) {
            self.bump();
            let operand = self.nested(Self::parse_unary_expression)?;
            if !operand.is_simple_assignment_target() {
                return Err(ParseError::InvalidAssignmentTarget { span: operand.span() });
            }
            return Ok(Expression::Update(UpdateExpression {
                operator,
                prefix: true,
                operand: self.alloc(operand),
                span: self.span_from(token.span.start),
            }));
        }

        if let Some(operator) = UnaryOperator::from_token(token.kind) {
            self.bump();
            let operand = self.nested(Self::parse_unary_expression)?;
            return Ok(Expression::Unary(UnaryExpression {
                operator,
                operand: self.alloc(operand),
                span: self.span_from(token.span.start),
            }));
        }

        if token.kind == SyntaxKind::AwaitKeyword {
            self.bump();
            let argument = self.nested(Self::parse_unary_expression)?;
            return Ok(Expression::Await(AwaitExpression {
                argument: self.alloc(argument),
                span: self.span_from(token.span.start),
            }));
        }

        self.parse_postfix_expression()
    }

    fn parse_postfix_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        let operand = self.parse_left_hand_side_expression()?;
        let Some(operator) = self.current_kind().and_then(UpdateOperator::from_token) else {
            return Ok(operand);
        };
        if !operand.is_simple_assignment_target() {
            return Err(ParseError::InvalidAssignmentTarget { span: operand.span() });
        }
        self.bump();
        let start = operand.span().start;
        Ok(Expression::Update(UpdateExpression {
            operator,
            prefix: false,
            operand: self.alloc(operand),
            span: self.span_from(start),
        }))
    }

    /// Member accesses and calls chained onto a primary or `new` expression.
    fn parse_left_hand_side_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        let mut expression = if self.at(SyntaxKind::NewKeyword) {
            self.nested(Self::parse_new_expression)?
        } else {
            self.parse_primary_expression()?
        };

        loop {
            expression = match self.current_kind() {
                Some(SyntaxKind::DotToken) => {
                    self.bump();
                    self.finish_property_access(expression, false)?
                }
                Some(SyntaxKind::OpenBracketToken) => self.finish_element_access(expression, false)?,
                Some(SyntaxKind::OpenParenToken) => self.finish_call(expression, false)?,
                Some(SyntaxKind::QuestionDotToken) => {
                    self.bump();
                    match self.current_kind() {
                        Some(SyntaxKind::OpenParenToken) => self.finish_call(expression, true)?,
                        Some(SyntaxKind::OpenBracketToken) => {
                            self.finish_element_access(expression, true)?
                        }
                        _ => self.finish_property_access(expression, true)?,
                    }
                }
                _ => return Ok(expression),
            };
        }
    }

    /// `new X`, `new X(args)`, `new new X()()`, or `new.target`.
    fn parse_new_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        let keyword = self.bump();
        if self.optional(SyntaxKind::DotToken).is_some() {
            self.expect_meta_property("target")?;
            return Ok(Expression::NewTarget(self.span_from(keyword.span.start)));
        }

        let mut callee = if self.at(SyntaxKind::NewKeyword) {
            self.nested(Self::parse_new_expression)?
        } else {
            self.parse_primary_expression()?
        };
        loop {
            callee = match self.current_kind() {
                Some(SyntaxKind::DotToken) => {
                    self.bump();
                    self.finish_property_access(callee, false)?
                }
                Some(SyntaxKind::OpenBracketToken) => self.finish_element_access(callee, false)?,
                _ => break,
            };
        }

        let arguments = if self.at(SyntaxKind::OpenParenToken) {
            Some(self.parse_arguments()?)
        } else {
            None
        };
        Ok(Expression::New(NewExpression {
            callee: self.alloc(callee),
            arguments,
            span: self.span_from(keyword.span.start),
        }))
    }

    fn finish_property_access(
        &mut self,
        object: Expression<'a>,
        optional: bool,
    ) -> Result<Expression<'a>, ParseError> {
        let property = self.parse_property_name()?;
        let start = object.span().start;
        Ok(Expression::PropertyAccess(PropertyAccessExpression {
            object: self.alloc(object),
            property,
            optional,
            span: self.span_from(start),
        }))
    }

    fn finish_element_access(
        &mut self,
        object: Expression<'a>,
        optional: bool,
    ) -> Result<Expression<'a>, ParseError> {
        self.expect(SyntaxKind::OpenBracketToken)?;
        let index = self.parse_expression()?;
        self.expect(SyntaxKind::CloseBracketToken)?;
        let start = object.span().start;
        Ok(Expression::ElementAccess(ElementAccessExpression {
            object: self.alloc(object),
            index: self.alloc(index),
            optional,
            span: self.span_from(start),
        }))
    }

    fn finish_call(&mut self, callee: Expression<'a>, optional: bool) -> Result<Expression<'a>, ParseError> {
        let arguments = self.parse_arguments()?;
        let start = callee.span().start;
        Ok(Expression::Call(CallExpression {
            callee: self.alloc(callee),
            arguments,
            optional,
            span: self.span_from(start),
        }))
    }

    /// `( a, ...b, c, )`
    fn parse_arguments(&mut self) -> Result<NodeList<'a, Expression<'a>>, ParseError> {
        self.expect(SyntaxKind::OpenParenToken)?;
        let mut arguments = BumpVec::new_in(self.arena);
        while !self.at(SyntaxKind::CloseParenToken) {
            arguments.push(self.parse_spread_or_assignment()?);
            if self.optional(SyntaxKind::CommaToken).is_none() {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParenToken)?;
        Ok(arguments.into_bump_slice())
    }

    fn parse_spread_or_assignment(&mut self) -> Result<Expression<'a>, ParseError> {
        match self.parse_spread_element()? {
            Some(spread) => Ok(Expression::Spread(spread)),
            None => self.parse_assignment_expression(),
        }
    }

    fn parse_spread_element(&mut self) -> Result<Option<SpreadElement<'a>>, ParseError> {
        let Some(dots) = self.optional(SyntaxKind::DotDotDotToken) else {
            return Ok(None);
        };
        let argument = self.parse_assignment_expression()?;
        Ok(Some(SpreadElement {
            argument: self.alloc(argument),
            span: self.span_from(dots.span.start),
        }))
    }

    /// A name after `.` or `?.`. Reserved words are allowed here.
    fn parse_property_name(&mut self) -> Result<Identifier<'a>, ParseError> {
        match self.current() {
            Some(token) if is_property_name(token.kind) => {
                self.bump();
                Ok(Identifier {
                    name: self.text(token),
                    span: token.span,
                })
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: SyntaxKind::Identifier,
                found: token.kind,
                span: token.span,
            }),
            None => Err(self.end_of_input_error(Some(SyntaxKind::Identifier))),
        }
    }

    /// A fraction, exponent, radix prefix or suffix written directly against
    /// the decimal `literal` just consumed, as in `1.5`, `1e3` or `0x1F`.
    /// Returns the span of the whole numeral.
    fn attached_numeric_suffix(&self, literal: Token) -> Option<TextSpan> {
        let next = self.current().filter(|t| t.span.start == literal.span.end())?;
        let end = match next.kind {
            SyntaxKind::Identifier => next.span.end(),
            kind if kind.is_keyword() => next.span.end(),
            SyntaxKind::DotToken => {
                let digits = self.tokens.get(self.pos + 1).filter(|t| {
                    t.kind == SyntaxKind::NumericLiteral && t.span.start == next.span.end()
                })?;
                digits.span.end()
            }
            _ => return None,
        };
        Some(TextSpan::from_bounds(literal.span.start, end))
    }

    /// The `target` of `new.target` or the `meta` of `import.meta`.
    fn expect_meta_property(&mut self, name: &str) -> Result<(), ParseError> {
        let token = self.expect(SyntaxKind::Identifier)?;
        if self.text(token) != name {
            return Err(ParseError::UnexpectedToken {
                expected: SyntaxKind::Identifier,
                found: token.kind,
                span: token.span,
            });
        }
        Ok(())
    }

    fn parse_primary_expression(&mut self) -> Result<Expression<'a>, ParseError> {
        let Some(token) = self.current() else {
            return Err(self.end_of_input_error(None));
        };

        let expression = match token.kind {
            SyntaxKind::NumericLiteral => {
                self.bump();
                if let Some(span) = self.attached_numeric_suffix(token) {
                    return Err(ParseError::UnsupportedConstruct {
                        kind: SyntaxKind::NumericLiteral,
                        span,
                    });
                }
                Expression::NumericLiteral(NumericLiteral {
                    value: decode_numeric_literal(self.text(token), token.span)?,
                    span: token.span,
                })
            }
            SyntaxKind::StringLiteral => {
                self.bump();
                Expression::StringLiteral(StringLiteral {
                    raw: self.text(token),
                    span: token.span,
                })
            }
            SyntaxKind::Identifier => {
                self.bump();
                Expression::Identifier(Identifier {
                    name: self.text(token),
                    span: token.span,
                })
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                self.bump();
                Expression::BooleanLiteral(BooleanLiteral {
                    value: token.kind == SyntaxKind::TrueKeyword,
                    span: token.span,
                })
            }
            SyntaxKind::NullKeyword => {
                self.bump();
                Expression::NullLiteral(token.span)
            }
            SyntaxKind::ThisKeyword => {
                self.bump();
                Expression::This(token.span)
            }
            SyntaxKind::SuperKeyword => {
                self.bump();
                Expression::Super(token.span)
            }
            SyntaxKind::ImportKeyword if self.peek_kind(1) == Some(SyntaxKind::DotToken) => {
                self.bump();
                self.bump();
                self.expect_meta_property("meta")?;
                Expression::ImportMeta(self.span_from(token.span.start))
            }
            SyntaxKind::OpenParenToken => {
                self.bump();
                let inner = self.parse_expression()?;
                self.expect(SyntaxKind::CloseParenToken)?;
                Expression::Parenthesized(ParenthesizedExpression {
                    expression: self.alloc(inner),
                    span: self.span_from(token.span.start),
                })
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal()?,
            SyntaxKind::OpenBraceToken => self.parse_object_literal()?,
            kind if is_unsupported_expression_start(kind) || kind == SyntaxKind::ImportKeyword => {
                return Err(ParseError::UnsupportedConstruct { kind, span: token.span });
            }
            found => {
                return Err(ParseError::ExpressionExpected {
                    found,
                    span: token.span,
                })
            }
        };
        Ok(expression)
    }

    /// `[a, , ...b, c,]`. An elided slot becomes a hole; one trailing comma
    /// does not.
    fn parse_array_literal(&mut self) -> Result<Expression<'a>, ParseError> {
        let open = self.bump();
        let mut elements = BumpVec::new_in(self.arena);
        loop {
            match self.current() {
                None => return Err(self.end_of_input_error(Some(SyntaxKind::CloseBracketToken))),
                Some(token) if token.kind == SyntaxKind::CloseBracketToken => {
                    self.bump();
                    break;
                }
                Some(token) if token.kind == SyntaxKind::CommaToken => {
                    self.bump();
                    elements.push(ArrayElement::Hole(TextSpan::empty(token.span.start)));
                }
                Some(_) => {
                    let element = match self.parse_spread_element()? {
                        Some(spread) => ArrayElement::Spread(spread),
                        None => ArrayElement::Expression(self.parse_assignment_expression()?),
                    };
                    elements.push(element);
                    if self.optional(SyntaxKind::CommaToken).is_none() {
                        self.expect(SyntaxKind::CloseBracketToken)?;
                        break;
                    }
                }
            }
        }
        Ok(Expression::ArrayLiteral(ArrayLiteralExpression {
            elements: elements.into_bump_slice(),
            span: self.span_from(open.span.start),
        }))
    }

    fn parse_object_literal(&mut self) -> Result<Expression<'a>, ParseError> {
        let open = self.bump();
        let mut members = BumpVec::new_in(self.arena);
        while !self.at(SyntaxKind::CloseBraceToken) {
            members.push(self.parse_object_member()?);
            if self.optional(SyntaxKind::CommaToken).is_none() {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken)?;
        Ok(Expression::ObjectLiteral(ObjectLiteralExpression {
            members: members.into_bump_slice(),
            span: self.span_from(open.span.start),
        }))
    }

    fn parse_object_member(&mut self) -> Result<ObjectMember<'a>, ParseError> {
        if let Some(spread) = self.parse_spread_element()? {
            return Ok(ObjectMember::Spread(spread));
        }
        let Some(token) = self.current() else {
            return Err(self.end_of_input_error(Some(SyntaxKind::CloseBraceToken)));
        };

        let key = match token.kind {
            kind if is_property_name(kind) => {
                self.bump();
                let name = Identifier {
                    name: self.text(token),
                    span: token.span,
                };
                let shorthand_follows = matches!(
                    self.current_kind(),
                    Some(SyntaxKind::CommaToken | SyntaxKind::CloseBraceToken)
                );
                if kind == SyntaxKind::Identifier && shorthand_follows {
                    return Ok(ObjectMember::Shorthand(name));
                }
                PropertyKey::Identifier(name)
            }
            SyntaxKind::StringLiteral => {
                self.bump();
                PropertyKey::StringLiteral(StringLiteral {
                    raw: self.text(token),
                    span: token.span,
                })
            }
            SyntaxKind::NumericLiteral => {
                self.bump();
                PropertyKey::NumericLiteral(NumericLiteral {
                    value: decode_numeric_literal(self.text(token), token.span)?,
                    span: token.span,
                })
            }
            SyntaxKind::OpenBracketToken => {
                self.bump();
                let computed = self.parse_assignment_expression()?;
                self.expect(SyntaxKind::CloseBracketToken)?;
                PropertyKey::Computed(self.alloc(computed))
            }
            found => {
                return Err(ParseError::UnexpectedToken {
                    expected: SyntaxKind::Identifier,
                    found,
                    span: token.span,
                })
            }
        };

        // Methods are function forms.
        if let Some(paren) = self.current().filter(|t| t.kind == SyntaxKind::OpenParenToken) {
            return Err(ParseError::UnsupportedConstruct {
                kind: SyntaxKind::FunctionKeyword,
                span: paren.span,
            });
        }
        self.expect(SyntaxKind::ColonToken)?;
        let value = self.parse_assignment_expression()?;
        Ok(ObjectMember::Property {
            key,
            value: self.alloc(value),
            span: self.span_from(token.span.start),
        })
    }
}

/// `??` may not share an unparenthesized operand with `&&` or `||`.
fn check_nullish_mixing(
    operator: LogicalOperator,
    left: &Expression<'_>,
    right: &Expression<'_>,
    span: TextSpan,
) -> Result<(), ParseError> {
    let conflicts = |operand: &Expression<'_>| match operand {
        Expression::Logical(inner) => {
            (operator == LogicalOperator::Coalesce) != (inner.operator == LogicalOperator::Coalesce)
        }
        _ => false,
    };
    if conflicts(left) || conflicts(right) {
        return Err(ParseError::MixedNullishCoalescing { span });
    }
    Ok(())
}

/// Decode an unsigned decimal integer literal.
///
/// Digits are read most significant first with checked arithmetic, so a
/// non-digit byte or a value past `u64::MAX` is an error rather than a
/// wrapped result.
pub fn decode_numeric_literal(text: &str, span: TextSpan) -> Result<u64, ParseError> {
    if text.is_empty() {
        return Err(ParseError::InvalidNumericLiteral { span });
    }
    text.bytes()
        .try_fold(0u64, |value, byte| {
            if !byte.is_ascii_digit() {
                return None;
            }
            value.checked_mul(10)?.checked_add(u64::from(byte - b'0'))
        })
        .ok_or(ParseError::InvalidNumericLiteral { span })
}
