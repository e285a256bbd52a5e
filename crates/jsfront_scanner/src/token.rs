//! Tokens and the growable token sequence produced by the scanner.

use jsfront_ast::SyntaxKind;
use jsfront_core::text::TextSpan;
use std::fmt;
use tracing::trace;

/// Capacity a fresh [`TokenSequence`] starts with. Growth doubles it.
pub const INITIAL_TOKEN_CAPACITY: usize = 2048;

/// A scanned token.
///
/// Every token records where it came from. For identifiers and literals the
/// span is also the token's value; for everything else the text is fixed by
/// the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextSpan,
}

impl Token {
    pub fn new(kind: SyntaxKind, span: TextSpan) -> Self {
        Self { kind, span }
    }
}

/// An ordered, append-only run of tokens over one source buffer.
#[derive(Debug, Clone)]
pub struct TokenSequence<'src> {
    source: &'src str,
    tokens: Vec<Token>,
}

impl<'src> TokenSequence<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::with_capacity(INITIAL_TOKEN_CAPACITY),
        }
    }

    /// Append a token, doubling the backing storage when it is full.
    pub fn push(&mut self, token: Token) {
        if self.tokens.len() == self.tokens.capacity() {
            let old = self.tokens.capacity();
            self.tokens.reserve_exact(old.max(1));
            trace!(old, new = self.tokens.capacity(), "grew token sequence");
        }
        self.tokens.push(token);
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn kinds(&self) -> impl Iterator<Item = SyntaxKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }

    /// The lexeme of `token`, borrowed from the source buffer.
    pub fn text(&self, token: &Token) -> &'src str {
        match token.kind.text() {
            Some(fixed) if !token.kind.has_payload() => fixed,
            _ => token.span.slice(self.source).unwrap_or(""),
        }
    }

    /// A printable view of one token: its kind, plus its lexeme when the
    /// kind carries content.
    pub fn display<'t>(&'t self, token: &'t Token) -> TokenDisplay<'t, 'src> {
        TokenDisplay { sequence: self, token }
    }
}

impl<'a, 'src> IntoIterator for &'a TokenSequence<'src> {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

pub struct TokenDisplay<'t, 'src> {
    sequence: &'t TokenSequence<'src>,
    token: &'t Token,
}

impl fmt::Display for TokenDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.token.kind)?;
        if self.token.kind.has_payload() {
            write!(f, " {:?}", self.sequence.text(self.token))?;
        }
        Ok(())
    }
}
