//! Compiler integration tests.
//!
//! End-to-end runs of the pipeline: source text -> tokens -> tree -> diagnostics.

use bumpalo::Bump;
use jsfront_ast::node::{Expression, Statement};
use jsfront_compiler::{compile_source, Compilation};
use jsfront_diagnostics::DiagnosticCategory;
use jsfront_options::{parse_config, CompilerOptions};

/// Helper: compile one file and return its rendered diagnostics.
fn diagnostics_for(source: &str) -> Vec<String> {
    let mut compilation = Compilation::new(CompilerOptions::default());
    compilation.add_source("test.js", source);
    compilation
        .compile()
        .diagnostics()
        .iter()
        .map(|d| d.to_string())
        .collect()
}

// ============================================================================
// Single Files
// ============================================================================

#[test]
fn test_compile_clean_file() {
    assert!(diagnostics_for("let x = 5 ;").is_empty());
    assert!(diagnostics_for("const a = [1, 2]; a.push(3); { let b = a[0] ** 2; }").is_empty());
}

#[test]
fn test_compile_empty_file_warns() {
    let mut compilation = Compilation::new(CompilerOptions::default());
    compilation.add_source("empty.js", "// only a comment\n");
    let diagnostics = compilation.compile();
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.diagnostics()[0].category, DiagnosticCategory::Warning);
}

#[test]
fn test_compile_malformed_declaration() {
    assert_eq!(
        diagnostics_for("let x 5 ;"),
        vec!["test.js(1,7): error JS1005: '=' expected.".to_string()]
    );
}

#[test]
fn test_compile_lex_error_line() {
    let source = "let a = 1;\nlet b = 2;\n\nlet c = 'oops\n";
    assert_eq!(
        diagnostics_for(source),
        vec!["test.js(4,9): error JS1002: Unterminated string literal.".to_string()]
    );
}

#[test]
fn test_compile_unsupported() {
    let diagnostics = diagnostics_for("let a = 1;\nif (a) {}");
    assert_eq!(diagnostics, vec!["test.js(2,1): error JS1200: 'if' is not supported yet.".to_string()]);
}

#[test]
fn test_compile_source_tree() {
    let arena = Bump::new();
    let program = compile_source(&arena, "t.js", "total = price * (1 + rate);", &CompilerOptions::default())
        .unwrap();
    let [Statement::Expression(stmt)] = program.statements else {
        panic!("expected one expression statement");
    };
    assert!(matches!(stmt.expression, Expression::Assignment(_)));
}

// ============================================================================
// Many Files
// ============================================================================

#[test]
fn test_compile_many_files_in_parallel() {
    let mut compilation = Compilation::new(CompilerOptions::default());
    for i in 0..64 {
        let source = if i % 8 == 0 {
            format!("let v{i} = ;")
        } else {
            format!("let v{i} = {i} * 2 + 1;")
        };
        compilation.add_source(format!("file{i:02}.js"), source);
    }
    let diagnostics = compilation.compile();
    assert_eq!(diagnostics.error_count(), 8);

    let files: Vec<_> = diagnostics
        .diagnostics()
        .iter()
        .filter_map(|d| d.file.clone())
        .collect();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
    assert_eq!(files[0], "file00.js");
}

#[test]
fn test_deep_nesting_on_worker_stack() {
    let depth = jsfront_parser::MAX_RECURSION_DEPTH as usize - 20;
    let source = format!("let x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    assert!(diagnostics_for(&source).is_empty());

    let too_deep = format!("let x = {}1{};", "[".repeat(500), "]".repeat(500));
    let diagnostics = diagnostics_for(&too_deep);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].contains("JS1201"), "{}", diagnostics[0]);
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_strict_from_config() {
    let config = parse_config(r#"{ "compilerOptions": { "strict": true } }"#).unwrap();
    let mut compilation = Compilation::new(config.compiler_options());
    compilation.add_source("strict.js", "let yield = 1;");
    let diagnostics = compilation.compile();
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.diagnostics()[0].code, 1003);

    let mut loose = Compilation::new(CompilerOptions::default());
    loose.add_source("loose.js", "let yield = 1;");
    assert!(loose.compile().is_empty());
}

#[test]
fn test_load_missing_file() {
    let mut compilation = Compilation::new(CompilerOptions::default());
    assert!(compilation.load_files(&["/no/such/dir/input.js"]).is_err());
    assert!(compilation.source_files().is_empty());
}
