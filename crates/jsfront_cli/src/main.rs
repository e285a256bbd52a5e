//! jsfront: Command-line driver for the jsfront scanner and parser.
//!
//! Usage:
//!   jsfront [--strict] [-p CONFIG] [--tokens] [--ast] [-v...] FILE...
//!
//! Exits 0 when every file compiles, 1 on usage, I/O or config errors, and 2
//! when any file has an error diagnostic.

use bumpalo::Bump;
use clap::Parser as ClapParser;
use jsfront_compiler::{compile_source, scan_options, Compilation, SourceFile};
use jsfront_diagnostics::{Diagnostic, DiagnosticCategory};
use jsfront_options::CompilerOptions;
use miette::{IntoDiagnostic, LabeledSpan, NamedSource, Severity, SourceCode, WrapErr};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "JSFRONT_LOG";

#[derive(ClapParser, Debug)]
#[command(name = "jsfront", about = "jsfront - a JavaScript scanner and parser", version)]
struct Cli {
    /// Source files to compile.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to a jsfront.json project file.
    #[arg(short = 'p', long = "project", value_name = "CONFIG")]
    project: Option<PathBuf>,

    /// Treat strict-mode reserved words as keywords.
    #[arg(long)]
    strict: bool,

    /// Print each file's tokens.
    #[arg(long)]
    tokens: bool,

    /// Print each file's syntax tree.
    #[arg(long)]
    ast: bool,

    /// Raise the log level (repeatable).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> miette::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and succeed; usage errors exit 1.
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };
    init_tracing(cli.verbose);

    if run(&cli)? {
        process::exit(2);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Compile the inputs. Returns whether any file had an error.
fn run(cli: &Cli) -> miette::Result<bool> {
    let (files, mut options) = resolve_inputs(cli)?;
    if files.is_empty() {
        miette::bail!("no input files");
    }

    apply_flags(&mut options, cli);
    if options.is_strict() {
        debug!("using strict mode");
    } else {
        debug!("not using strict mode");
    }

    let mut compilation = Compilation::new(options);
    compilation
        .load_files(files.as_slice())
        .into_diagnostic()
        .wrap_err("failed to load source files")?;

    if cli.tokens || cli.ast {
        for file in compilation.source_files() {
            dump_file(file, &compilation.options, cli);
        }
    }

    let diagnostics = compilation.compile();
    for diagnostic in diagnostics.diagnostics() {
        report(diagnostic, compilation.source_files());
    }

    let errors = diagnostics.error_count();
    if errors > 0 {
        eprintln!("\nFound {} error{}.", errors, if errors == 1 { "" } else { "s" });
    } else {
        info!(files = files.len(), "compiled");
    }
    Ok(errors > 0)
}

/// Input paths and options from the command line and the project file.
fn resolve_inputs(cli: &Cli) -> miette::Result<(Vec<PathBuf>, CompilerOptions)> {
    let mut files = cli.files.clone();
    let Some(project) = cli.project.as_deref() else {
        return Ok((files, CompilerOptions::default()));
    };

    let config = jsfront_options::parse_config_file(project)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read project '{}'", project.display()))?;
    let base_dir = project.parent().unwrap_or(Path::new("."));
    files.extend(config.file_paths(base_dir));
    Ok((files, config.compiler_options()))
}

/// Overlay the command-line flags onto the project file's options.
fn apply_flags(options: &mut CompilerOptions, cli: &Cli) {
    options.merge(&CompilerOptions {
        strict: cli.strict.then_some(true),
    });
}

/// Print the token and tree dumps for one file. Failures are left to the
/// diagnostics pass.
fn dump_file(file: &SourceFile, options: &CompilerOptions, cli: &Cli) {
    if cli.tokens {
        if let Ok(tokens) = jsfront_scanner::scan_with_options(&file.text, scan_options(options)) {
            println!("// {}: {} tokens", file.file_name, tokens.len());
            for token in &tokens {
                println!("{}", tokens.display(token));
            }
        }
    }
    if cli.ast {
        let arena = Bump::new();
        if let Ok(program) = compile_source(&arena, &file.file_name, &file.text, options) {
            println!("// {}", file.file_name);
            println!("{program:#?}");
        }
    }
}

fn report(diagnostic: &Diagnostic, sources: &[SourceFile]) {
    let source = diagnostic
        .file
        .as_deref()
        .and_then(|name| sources.iter().find(|s| s.file_name == name));
    match (source, diagnostic.span) {
        (Some(source), Some(_)) => {
            let rendered = RenderedDiagnostic {
                diagnostic: diagnostic.clone(),
                source_code: NamedSource::new(&source.file_name, source.text.clone()),
            };
            eprintln!("{:?}", miette::Report::new(rendered));
        }
        _ => eprintln!("{diagnostic}"),
    }
}

/// A diagnostic paired with its file's text, for miette's snippet renderer.
#[derive(Debug, thiserror::Error)]
#[error("{}", .diagnostic.message_text)]
struct RenderedDiagnostic {
    diagnostic: Diagnostic,
    source_code: NamedSource<String>,
}

impl miette::Diagnostic for RenderedDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("JS{}", self.diagnostic.code)))
    }

    fn severity(&self) -> Option<Severity> {
        Some(severity_of(self.diagnostic.category))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source_code)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.diagnostic.span?;
        let label = match self.diagnostic.line_and_column {
            Some(position) => format!("here ({position})"),
            None => "here".to_string(),
        };
        let labeled = LabeledSpan::at((span.start as usize, span.length as usize), label);
        Some(Box::new(std::iter::once(labeled)))
    }
}

fn severity_of(category: DiagnosticCategory) -> Severity {
    match category {
        DiagnosticCategory::Error => Severity::Error,
        DiagnosticCategory::Warning => Severity::Warning,
        DiagnosticCategory::Message => Severity::Advice,
    }
}
