//! Parser integration tests.
//!
//! Scans and parses whole inputs and checks the shape of the resulting tree.

use bumpalo::Bump;
use jsfront_ast::node::*;
use jsfront_ast::operator::*;
use jsfront_ast::SyntaxKind;
use jsfront_core::text::TextSpan;
use jsfront_parser::{parse, ParseError, MAX_RECURSION_DEPTH};
use jsfront_scanner::{scan, scan_with_options, ScanOptions};

/// Helper: parse source text and hand the program to `f`.
fn with_program<R>(source: &str, f: impl FnOnce(&Program<'_>) -> R) -> R {
    let arena = Bump::new();
    let tokens = scan(source).unwrap();
    let program = parse(&arena, &tokens).unwrap_or_else(|e| panic!("{source}: {e}"));
    f(&program)
}

/// Helper: parse source text that must fail.
fn parse_error(source: &str) -> ParseError {
    let arena = Bump::new();
    let tokens = scan(source).unwrap();
    match parse(&arena, &tokens) {
        Ok(program) => panic!("{source}: expected an error, got {program:?}"),
        Err(err) => err,
    }
}

/// Helper: render the single expression statement in `source` as an
/// s-expression.
fn sexp(source: &str) -> String {
    with_program(source, |program| match program.statements {
        [Statement::Expression(stmt)] => render(stmt.expression),
        other => panic!("{source}: expected one expression statement, got {other:?}"),
    })
}

fn render(expr: &Expression<'_>) -> String {
    let list = |items: &[Expression<'_>]| {
        items.iter().map(render).collect::<Vec<_>>().join(" ")
    };
    match expr {
        Expression::NumericLiteral(n) => n.value.to_string(),
        Expression::StringLiteral(s) => s.raw.to_string(),
        Expression::BooleanLiteral(b) => b.value.to_string(),
        Expression::NullLiteral(_) => "null".into(),
        Expression::Identifier(id) => id.name.to_string(),
        Expression::This(_) => "this".into(),
        Expression::Super(_) => "super".into(),
        Expression::NewTarget(_) => "new.target".into(),
        Expression::ImportMeta(_) => "import.meta".into(),
        Expression::Parenthesized(p) => render(p.expression),
        Expression::Binary(b) => {
            format!("({} {} {})", b.operator.as_str(), render(b.left), render(b.right))
        }
        Expression::Logical(l) => {
            format!("({} {} {})", l.operator.as_str(), render(l.left), render(l.right))
        }
        Expression::Assignment(a) => format!("({:?} {} {})", a.operator, render(a.target), render(a.value)),
        Expression::Conditional(c) => format!(
            "(? {} {} {})",
            render(c.condition),
            render(c.when_true),
            render(c.when_false)
        ),
        Expression::Unary(u) => format!("({:?} {})", u.operator, render(u.operand)),
        Expression::Update(u) => {
            let fix = if u.prefix { "pre" } else { "post" };
            format!("({fix}{:?} {})", u.operator, render(u.operand))
        }
        Expression::Await(a) => format!("(await {})", render(a.argument)),
        Expression::Yield(y) => match y.argument {
            Some(arg) if y.delegate => format!("(yield* {})", render(arg)),
            Some(arg) => format!("(yield {})", render(arg)),
            None => "(yield)".into(),
        },
        Expression::PropertyAccess(p) => {
            let dot = if p.optional { "?." } else { "." };
            format!("({dot} {} {})", render(p.object), p.property.name)
        }
        Expression::ElementAccess(e) => {
            let op = if e.optional { "?.[]" } else { "[]" };
            format!("({op} {} {})", render(e.object), render(e.index))
        }
        Expression::Call(c) => {
            let op = if c.optional { "?.call" } else { "call" };
            format!("({op} {} [{}])", render(c.callee), list(c.arguments))
        }
        Expression::New(n) => match n.arguments {
            Some(args) => format!("(new {} [{}])", render(n.callee), list(args)),
            None => format!("(new {})", render(n.callee)),
        },
        Expression::Sequence(s) => format!("(, {})", list(s.expressions)),
        Expression::Spread(s) => format!("...{}", render(s.argument)),
        Expression::ArrayLiteral(a) => format!("[array; {}]", a.elements.len()),
        Expression::ObjectLiteral(o) => format!("{{object; {}}}", o.members.len()),
        Expression::Function(_) | Expression::Class(_) => unreachable!(),
    }
}

// ============================================================================
// Variable Declarations
// ============================================================================

#[test]
fn test_parse_let_declaration() {
    with_program("let x = 5 ;", |program| {
        assert_eq!(program.statements.len(), 1);
        let Statement::VariableDeclaration(decl) = &program.statements[0] else {
            panic!("expected a declaration");
        };
        assert_eq!(decl.kind, VariableKind::Let);
        assert_eq!(decl.name.name, "x");
        assert_eq!(decl.name.span, TextSpan::new(4, 1));
        assert!(decl.is_initialized());
        assert!(matches!(
            decl.initializer,
            Some(Expression::NumericLiteral(NumericLiteral { value: 5, .. }))
        ));
        assert_eq!(decl.span, TextSpan::new(0, 11));
    });
}

#[test]
fn test_parse_declaration_kinds() {
    with_program("var a = 1; const b = 'two'; let c = true;", |program| {
        let kinds: Vec<_> = program
            .statements
            .iter()
            .map(|s| match s {
                Statement::VariableDeclaration(d) => d.kind,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(kinds, vec![VariableKind::Var, VariableKind::Const, VariableKind::Let]);
    });
}

#[test]
fn test_declaration_missing_equals() {
    assert_eq!(
        parse_error("let x 5 ;"),
        ParseError::MalformedDeclaration {
            expected: SyntaxKind::EqualsToken,
            found: SyntaxKind::NumericLiteral,
            span: TextSpan::new(6, 1),
        }
    );
}

#[test]
fn test_declaration_missing_name() {
    let err = parse_error("const 1 = 2;");
    assert_eq!(err.expected(), Some(SyntaxKind::Identifier));
    assert_eq!(err.found(), Some(SyntaxKind::NumericLiteral));
}

#[test]
fn test_declaration_requires_initializer_and_semicolon() {
    assert!(matches!(
        parse_error("let x;"),
        ParseError::MalformedDeclaration { expected: SyntaxKind::EqualsToken, .. }
    ));
    assert!(matches!(
        parse_error("let x = 1, y = 2;"),
        ParseError::MalformedDeclaration {
            expected: SyntaxKind::SemicolonToken,
            found: SyntaxKind::CommaToken,
            ..
        }
    ));
    assert!(matches!(
        parse_error("let x = ;"),
        ParseError::ExpressionExpected { found: SyntaxKind::SemicolonToken, .. }
    ));
}

// ============================================================================
// End of Input
// ============================================================================

#[test]
fn test_empty_program() {
    with_program("", |program| assert!(program.statements.is_empty()));
    with_program("  // nothing\n", |program| assert!(program.statements.is_empty()));
}

#[test]
fn test_end_of_input_in_declaration() {
    assert_eq!(
        parse_error("let"),
        ParseError::UnexpectedEndOfInput {
            expected: Some(SyntaxKind::Identifier),
            offset: 3,
        }
    );
    assert_eq!(
        parse_error("let x = 1"),
        ParseError::UnexpectedEndOfInput {
            expected: Some(SyntaxKind::SemicolonToken),
            offset: 9,
        }
    );
    assert_eq!(
        parse_error("let x ="),
        ParseError::UnexpectedEndOfInput { expected: None, offset: 7 }
    );
}

#[test]
fn test_end_of_input_in_expression() {
    assert!(matches!(parse_error("a +"), ParseError::UnexpectedEndOfInput { expected: None, .. }));
    assert!(matches!(
        parse_error("f(1, 2"),
        ParseError::UnexpectedEndOfInput { expected: Some(SyntaxKind::CloseParenToken), .. }
    ));
    assert!(matches!(
        parse_error("{ a;"),
        ParseError::UnexpectedEndOfInput { expected: Some(SyntaxKind::CloseBraceToken), .. }
    ));
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_empty_and_debugger_statements() {
    with_program(";; debugger;", |program| {
        assert!(matches!(
            program.statements,
            [Statement::Empty(_), Statement::Empty(_), Statement::Debugger(_)]
        ));
        assert_eq!(program.statements[2].span(), TextSpan::new(3, 9));
    });
}

#[test]
fn test_block_statement() {
    with_program("{ let a = 1; { } a; }", |program| {
        let [Statement::Block(block)] = program.statements else {
            panic!("expected one block");
        };
        assert_eq!(block.statements.len(), 3);
        assert!(matches!(block.statements[1], Statement::Block(BlockStatement { statements: [], .. })));
        assert_eq!(block.span, TextSpan::new(0, 21));
    });
}

#[test]
fn test_expression_statement_requires_semicolon() {
    assert!(matches!(
        parse_error("a b;"),
        ParseError::UnexpectedToken {
            expected: SyntaxKind::SemicolonToken,
            found: SyntaxKind::Identifier,
            ..
        }
    ));
}

#[test]
fn test_unsupported_statements() {
    for (source, kind) in [
        ("if (x) {}", SyntaxKind::IfKeyword),
        ("while (x) {}", SyntaxKind::WhileKeyword),
        ("for (;;) {}", SyntaxKind::ForKeyword),
        ("return 1;", SyntaxKind::ReturnKeyword),
        ("function f() {}", SyntaxKind::FunctionKeyword),
        ("class A {}", SyntaxKind::ClassKeyword),
        ("import x from 'y';", SyntaxKind::ImportKeyword),
        ("export let a = 1;", SyntaxKind::ExportKeyword),
    ] {
        let err = parse_error(source);
        assert_eq!(
            err,
            ParseError::UnsupportedConstruct {
                kind,
                span: TextSpan::new(0, kind.text().unwrap().len() as u32),
            },
            "{source}"
        );
    }
}

#[test]
fn test_error_after_valid_statements() {
    let err = parse_error("let a = 1;\nlet b = 2;\nif (a) {}");
    assert_eq!(err.offset(), 22);
}

// ============================================================================
// Precedence and Associativity
// ============================================================================

#[test]
fn test_multiplicative_binds_tighter() {
    assert_eq!(sexp("1 + 2 * 3;"), "(+ 1 (* 2 3))");
    assert_eq!(sexp("1 * 2 + 3;"), "(+ (* 1 2) 3)");
}

#[test]
fn test_left_associative() {
    assert_eq!(sexp("a - b - c;"), "(- (- a b) c)");
    assert_eq!(sexp("a / b % c;"), "(% (/ a b) c)");
}

#[test]
fn test_exponent_right_associative() {
    assert_eq!(sexp("a ** b ** c;"), "(** a (** b c))");
    assert_eq!(sexp("a * b ** c;"), "(* a (** b c))");
}

#[test]
fn test_assignment_right_associative() {
    assert_eq!(sexp("a = b = c;"), "(Assign a (Assign b c))");
    assert_eq!(sexp("a += b -= 1;"), "(Addition a (Subtraction b 1))");
    assert_eq!(sexp("x >>>= 1;"), "(ShiftRightUnsigned x 1)");
    assert_eq!(sexp("x ??= y || z;"), "(LogicalNullish x (|| y z))");
}

#[test]
fn test_operator_ladder() {
    assert_eq!(sexp("a || b && c;"), "(|| a (&& b c))");
    assert_eq!(sexp("a | b ^ c & d;"), "(| a (^ b (& c d)))");
    assert_eq!(sexp("a == b < c;"), "(== a (< b c))");
    assert_eq!(sexp("a < b << c;"), "(< a (<< b c))");
    assert_eq!(sexp("a in b instanceof C;"), "(instanceof (in a b) C)");
    assert_eq!(sexp("a !== b === c;"), "(=== (!== a b) c)");
}

#[test]
fn test_parentheses_override() {
    assert_eq!(sexp("(1 + 2) * 3;"), "(* (+ 1 2) 3)");
}

#[test]
fn test_conditional() {
    assert_eq!(sexp("a ? b : c;"), "(? a b c)");
    assert_eq!(sexp("a ? b : c ? d : e;"), "(? a b (? c d e))");
    assert_eq!(sexp("a || b ? x = 1 : y;"), "(? (|| a b) (Assign x 1) y)");
}

#[test]
fn test_sequence() {
    assert_eq!(sexp("a = 1, b;"), "(, (Assign a 1) b)");
}

#[test]
fn test_unary_and_update() {
    assert_eq!(sexp("-a * b;"), "(* (Negate a) b)");
    assert_eq!(sexp("!!a;"), "(LogicalNot (LogicalNot a))");
    assert_eq!(sexp("typeof a + void 0;"), "(+ (TypeOf a) (Void 0))");
    assert_eq!(sexp("delete a.b;"), "(Delete (. a b))");
    assert_eq!(sexp("++x;"), "(preIncrement x)");
    assert_eq!(sexp("x--;"), "(postDecrement x)");
    assert_eq!(sexp("-x++;"), "(Negate (postIncrement x))");
    assert_eq!(sexp("await p;"), "(await p)");
}

// ============================================================================
// Nullish Coalescing
// ============================================================================

#[test]
fn test_nullish_alone() {
    assert_eq!(sexp("a ?? b ?? c;"), "(?? (?? a b) c)");
    assert_eq!(sexp("(a ?? b) || c;"), "(|| (?? a b) c)");
    assert_eq!(sexp("a ?? (b && c);"), "(?? a (&& b c))");
}

#[test]
fn test_nullish_mixed_without_parentheses() {
    assert!(matches!(parse_error("a ?? b || c;"), ParseError::MixedNullishCoalescing { .. }));
    assert!(matches!(parse_error("a && b ?? c;"), ParseError::MixedNullishCoalescing { .. }));
}

// ============================================================================
// Member Access and Calls
// ============================================================================

#[test]
fn test_member_chain() {
    assert_eq!(sexp("a.b[c](1, 2);"), "(call ([] (. a b) c) [1 2])");
    assert_eq!(sexp("a.if.class;"), "(. (. a if) class)");
}

#[test]
fn test_optional_chain() {
    assert_eq!(sexp("a?.b;"), "(?. a b)");
    assert_eq!(sexp("a?.[0];"), "(?.[] a 0)");
    assert_eq!(sexp("f?.(x);"), "(?.call f [x])");
    assert_eq!(sexp("a?.b?.c;"), "(?. (?. a b) c)");
}

#[test]
fn test_call_arguments() {
    assert_eq!(sexp("f();"), "(call f [])");
    assert_eq!(sexp("f(a, ...rest,);"), "(call f [a ...rest])");
}

#[test]
fn test_new_expression() {
    assert_eq!(sexp("new Foo;"), "(new Foo)");
    assert_eq!(sexp("new Foo(1).bar;"), "(. (new Foo [1]) bar)");
    assert_eq!(sexp("new a.B(x);"), "(new (. a B) [x])");
    assert_eq!(sexp("new new X()();"), "(new (new X []) [])");
}

#[test]
fn test_meta_properties() {
    assert_eq!(sexp("new.target;"), "new.target");
    assert_eq!(sexp("import.meta.url;"), "(. import.meta url)");
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_primary_literals() {
    assert_eq!(sexp("'single';"), "'single'");
    assert_eq!(sexp("\"double\";"), "\"double\"");
    assert_eq!(sexp("true;"), "true");
    assert_eq!(sexp("null;"), "null");
    assert_eq!(sexp("this.x;"), "(. this x)");
    assert_eq!(sexp("super.m();"), "(call (. super m) [])");
}

#[test]
fn test_array_literal() {
    with_program("[1, , ...xs,];", |program| {
        let [Statement::Expression(stmt)] = program.statements else {
            panic!("expected one statement");
        };
        let Expression::ArrayLiteral(array) = stmt.expression else {
            panic!("expected an array");
        };
        assert!(matches!(
            array.elements,
            [ArrayElement::Expression(_), ArrayElement::Hole(_), ArrayElement::Spread(_)]
        ));
    });
    assert_eq!(sexp("[];"), "[array; 0]");
    assert_eq!(sexp("[,];"), "[array; 1]");
}

#[test]
fn test_object_literal() {
    with_program("x = { a, b: 1, [k]: 2, 'c': 3, 4: 5, if: 6, ...rest };", |program| {
        let [Statement::Expression(stmt)] = program.statements else {
            panic!("expected one statement");
        };
        let Expression::Assignment(assign) = stmt.expression else {
            panic!("expected an assignment");
        };
        let Expression::ObjectLiteral(object) = assign.value else {
            panic!("expected an object");
        };
        assert_eq!(object.members.len(), 7);
        assert!(matches!(object.members[0], ObjectMember::Shorthand(Identifier { name: "a", .. })));
        assert!(matches!(
            object.members[2],
            ObjectMember::Property { key: PropertyKey::Computed(_), .. }
        ));
        assert!(matches!(
            object.members[4],
            ObjectMember::Property { key: PropertyKey::NumericLiteral(NumericLiteral { value: 4, .. }), .. }
        ));
        assert!(matches!(object.members[6], ObjectMember::Spread(_)));
    });
}

#[test]
fn test_invalid_numeric_literal() {
    assert!(matches!(
        parse_error("let big = 99999999999999999999;"),
        ParseError::InvalidNumericLiteral { .. }
    ));
}

// ============================================================================
// Assignment Targets
// ============================================================================

#[test]
fn test_valid_assignment_targets() {
    assert_eq!(sexp("a.b = 1;"), "(Assign (. a b) 1)");
    assert_eq!(sexp("a[0] = 1;"), "(Assign ([] a 0) 1)");
    assert_eq!(sexp("(a) = 1;"), "(Assign a 1)");
}

#[test]
fn test_invalid_assignment_targets() {
    assert_eq!(
        parse_error("a + b = c;"),
        ParseError::InvalidAssignmentTarget { span: TextSpan::new(0, 5) }
    );
    assert!(matches!(parse_error("a?.b = 1;"), ParseError::InvalidAssignmentTarget { .. }));
    assert!(matches!(parse_error("1++;"), ParseError::InvalidAssignmentTarget { .. }));
    assert!(matches!(parse_error("++f();"), ParseError::InvalidAssignmentTarget { .. }));
}

// ============================================================================
// Unsupported Expressions
// ============================================================================

#[test]
fn test_unsupported_expressions() {
    let kind_of = |source: &str| match parse_error(source) {
        ParseError::UnsupportedConstruct { kind, .. } => kind,
        other => panic!("{source}: {other:?}"),
    };
    assert_eq!(kind_of("x = function () {};"), SyntaxKind::FunctionKeyword);
    assert_eq!(kind_of("x = class {};"), SyntaxKind::ClassKeyword);
    assert_eq!(kind_of("x = a => a;"), SyntaxKind::EqualsGreaterThanToken);
    assert_eq!(kind_of("() => 1;"), SyntaxKind::EqualsGreaterThanToken);
    assert_eq!(kind_of("x = /re/;"), SyntaxKind::SlashToken);
    assert_eq!(kind_of("import('m');"), SyntaxKind::ImportKeyword);
    assert_eq!(kind_of("x = { m() {} };"), SyntaxKind::FunctionKeyword);
}

#[test]
fn test_unsupported_numeric_forms() {
    let span_of = |source: &str| match parse_error(source) {
        ParseError::UnsupportedConstruct { kind: SyntaxKind::NumericLiteral, span } => span,
        other => panic!("{source}: {other:?}"),
    };
    assert_eq!(span_of("x = 1.5;"), TextSpan::new(4, 3));
    assert_eq!(span_of("x = 0x1F;"), TextSpan::new(4, 4));
    assert_eq!(span_of("x = 1e3;"), TextSpan::new(4, 3));
    assert_eq!(span_of("x = 10n;"), TextSpan::new(4, 3));
    assert_eq!(span_of("1in x;"), TextSpan::new(0, 3));

    // A separated dot is an ordinary member access.
    assert_eq!(sexp("1 .toString;"), "(. 1 toString)");
}

#[test]
fn test_expression_expected() {
    assert_eq!(
        parse_error(") ;"),
        ParseError::ExpressionExpected {
            found: SyntaxKind::CloseParenToken,
            span: TextSpan::new(0, 1),
        }
    );
    assert!(matches!(
        parse_error("x = else;"),
        ParseError::ExpressionExpected { found: SyntaxKind::ElseKeyword, .. }
    ));
}

// ============================================================================
// Strict Mode Words
// ============================================================================

#[test]
fn test_yield_is_identifier_when_not_strict() {
    assert_eq!(sexp("yield + 1;"), "(+ yield 1)");
}

#[test]
fn test_yield_in_strict_mode() {
    let render_strict = |source: &str| {
        let arena = Bump::new();
        let tokens = scan_with_options(source, ScanOptions { strict: true }).unwrap();
        let program = parse(&arena, &tokens).unwrap();
        match program.statements {
            [Statement::Expression(stmt)] => render(stmt.expression),
            other => panic!("{other:?}"),
        }
    };
    assert_eq!(render_strict("yield;"), "(yield)");
    assert_eq!(render_strict("yield a + 1;"), "(yield (+ a 1))");
    assert_eq!(render_strict("yield* g;"), "(yield* g)");
    assert_eq!(render_strict("f(yield, 1);"), "(call f [(yield) 1])");
}

// ============================================================================
// Nesting Limit
// ============================================================================

#[test]
fn test_nesting_within_limit() {
    let depth = MAX_RECURSION_DEPTH as usize - 1;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(sexp(&source), "1");

    let calls = format!("{}1{};", "f(".repeat(depth - 1), ")".repeat(depth - 1));
    assert!(sexp(&calls).starts_with("(call f [(call f"));
}

#[test]
fn test_nesting_too_deep() {
    let depth = MAX_RECURSION_DEPTH as usize + 50;
    let parens = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(parse_error(&parens), ParseError::NestingTooDeep { .. }));

    let negations = format!("{}1;", "!".repeat(depth));
    assert!(matches!(parse_error(&negations), ParseError::NestingTooDeep { .. }));

    let blocks = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
    assert!(matches!(parse_error(&blocks), ParseError::NestingTooDeep { .. }));
}

#[test]
fn test_long_exponent_chain_hits_nesting_limit() {
    let chain = format!("x = {}1;", "2 ** ".repeat(50_000));
    assert!(matches!(parse_error(&chain), ParseError::NestingTooDeep { .. }));

    let short = format!("{}1;", "2 ** ".repeat(MAX_RECURSION_DEPTH as usize / 2));
    assert!(sexp(&short).starts_with("(** 2 (** 2"));
}

#[test]
fn test_long_left_associative_chain_is_iterative() {
    let chain = format!("{}1;", "1 + ".repeat(10_000));
    with_program(&chain, |program| {
        let [Statement::Expression(stmt)] = program.statements else {
            panic!("expected one statement");
        };
        let Expression::Binary(sum) = stmt.expression else {
            panic!("expected a binary expression");
        };
        assert_eq!(sum.operator, BinaryOperator::Addition);
        assert!(matches!(sum.left, Expression::Binary(_)));
        assert!(matches!(sum.right, Expression::NumericLiteral(_)));
    });
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn test_expression_spans() {
    with_program("  a + b ;", |program| {
        let [Statement::Expression(stmt)] = program.statements else {
            panic!("expected one statement");
        };
        assert_eq!(stmt.expression.span(), TextSpan::new(2, 5));
        assert_eq!(stmt.span, TextSpan::new(2, 7));
        assert_eq!(program.span, TextSpan::new(0, 9));
    });
}
