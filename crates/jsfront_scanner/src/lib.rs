//! jsfront_scanner: Lexer for the jsfront compiler front end.
//!
//! Turns a source buffer into a flat [`TokenSequence`]. Scanning is a pure
//! function of the buffer and [`ScanOptions`]; the first malformed input
//! aborts the scan with a positioned [`LexError`].

mod char_codes;
mod error;
mod scanner;
pub mod tables;
mod token;

pub use error::LexError;
pub use scanner::{ScanOptions, Scanner};
pub use token::{Token, TokenDisplay, TokenSequence, INITIAL_TOKEN_CAPACITY};

use tracing::{debug, instrument};

/// Scan `source` with default (non-strict) options.
pub fn scan(source: &str) -> Result<TokenSequence<'_>, LexError> {
    scan_with_options(source, ScanOptions::default())
}

#[instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn scan_with_options(source: &str, options: ScanOptions) -> Result<TokenSequence<'_>, LexError> {
    let tokens = Scanner::new(source, options)?.scan_all()?;
    debug!(count = tokens.len(), "scanned");
    Ok(tokens)
}
