//! jsfront_parser: Recursive descent parser for the jsfront compiler front end.
//!
//! Consumes a [`TokenSequence`] from the scanner and builds an arena-allocated
//! [`Program`]. Binary operators are parsed by precedence climbing.

mod error;
mod parser;
mod precedence;
mod utilities;

pub use error::{ParseError, MAX_RECURSION_DEPTH};
pub use parser::{decode_numeric_literal, Parser};
pub use precedence::{binary_operator_precedence, OperatorPrecedence};

use bumpalo::Bump;
use jsfront_ast::node::Program;
use jsfront_scanner::TokenSequence;
use tracing::{debug, instrument};

/// Parse a whole token sequence into a program allocated in `arena`.
#[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse<'a>(arena: &'a Bump, tokens: &TokenSequence<'a>) -> Result<Program<'a>, ParseError> {
    let program = Parser::new(arena, tokens).parse_program()?;
    debug!(statements = program.statements.len(), "parsed");
    Ok(program)
}
