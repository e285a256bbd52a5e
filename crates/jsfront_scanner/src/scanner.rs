//! The scanner: a single left-to-right pass from source text to tokens.
//!
//! At each token start the character classes are tried in a fixed order:
//! operator probe, identifier or keyword, whitespace, decimal digits, line
//! comment, block comment, quoted string. Anything else is an error. The
//! order matters: `/` and `/=` are operators, so comment starts are excluded
//! from the operator probe before it runs.

use crate::char_codes::{is_identifier_part, is_identifier_start, is_white_space_like};
use crate::error::LexError;
use crate::tables;
use crate::token::{Token, TokenSequence};
use jsfront_ast::SyntaxKind;
use jsfront_core::text::{TextPos, TextSpan};
use memchr::memmem;
use tracing::{trace, warn};

/// Configuration the caller passes into a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Treat the strict-mode reserved words (`yield`, `static`, ...) as keywords.
    pub strict: bool,
}

/// Scanner state over one source buffer.
pub struct Scanner<'src> {
    source: &'src str,
    bytes: &'src [u8],
    /// Byte offset of the next unread character.
    pos: usize,
    /// 1-based line of `pos`.
    line: u32,
    options: ScanOptions,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, options: ScanOptions) -> Result<Self, LexError> {
        if TextPos::try_from(source.len()).is_err() {
            return Err(LexError::SourceTooLarge { length: source.len() });
        }
        Ok(Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            options,
        })
    }

    /// Current line, 1-based.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn pos(&self) -> TextPos {
        self.pos as TextPos
    }

    /// Scan the rest of the buffer. Any error discards the tokens gathered so far.
    pub fn scan_all(mut self) -> Result<TokenSequence<'src>, LexError> {
        let mut tokens = TokenSequence::new(self.source);
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Produce the next token, or `None` once the buffer is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let Some(&byte) = self.bytes.get(self.pos) else {
                return Ok(None);
            };
            let start = self.pos;

            if !self.at_comment_start() {
                if let Some((kind, len)) = tables::match_operator(self.rest()) {
                    self.advance(len)?;
                    return Ok(Some(self.token(kind, start)));
                }
            }

            let ch = self.current_char();
            if is_identifier_start(ch) {
                return self.scan_identifier().map(Some);
            }
            if is_white_space_like(ch) {
                self.skip_whitespace()?;
                continue;
            }
            if ch.is_ascii_digit() {
                return self.scan_number().map(Some);
            }
            if self.rest().starts_with(b"//") {
                self.skip_line_comment()?;
                continue;
            }
            if self.rest().starts_with(b"/*") {
                self.skip_block_comment()?;
                continue;
            }
            if byte == b'\'' || byte == b'"' {
                return self.scan_string(byte).map(Some);
            }

            return Err(LexError::UnexpectedCharacter {
                ch,
                offset: start as TextPos,
                line: self.line,
            });
        }
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    #[inline]
    fn rest(&self) -> &'src [u8] {
        self.bytes.get(self.pos..).unwrap_or(&[])
    }

    #[inline]
    fn rest_str(&self) -> &'src str {
        self.source.get(self.pos..).unwrap_or("")
    }

    /// The character at the cursor. Only called with input remaining.
    fn current_char(&self) -> char {
        self.rest_str()
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    #[inline]
    fn at_comment_start(&self) -> bool {
        let rest = self.rest();
        rest.starts_with(b"//") || rest.starts_with(b"/*")
    }

    /// Move the cursor forward by `len` bytes, refusing to pass the end.
    fn advance(&mut self, len: usize) -> Result<(), LexError> {
        match self.pos.checked_add(len) {
            Some(end) if end <= self.bytes.len() => {
                self.pos = end;
                Ok(())
            }
            _ => Err(LexError::BufferExhaustedMidToken {
                offset: self.bytes.len() as TextPos,
                line: self.line,
            }),
        }
    }

    #[inline]
    fn token(&self, kind: SyntaxKind, start: usize) -> Token {
        Token::new(kind, TextSpan::from_bounds(start as TextPos, self.pos as TextPos))
    }

    // ========================================================================
    // Token classes
    // ========================================================================

    fn scan_identifier(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let rest = self.rest_str();
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !is_identifier_part(ch))
            .map_or(rest.len(), |(i, _)| i);
        let word = &rest[..len];
        self.advance(len)?;
        let kind = tables::lookup_keyword(word, self.options.strict).unwrap_or(SyntaxKind::Identifier);
        Ok(self.token(kind, start))
    }

    fn skip_whitespace(&mut self) -> Result<(), LexError> {
        let mut len = 0;
        let mut newlines = 0;
        for ch in self.rest_str().chars().take_while(|&ch| is_white_space_like(ch)) {
            if ch == '\n' {
                newlines += 1;
            }
            len += ch.len_utf8();
        }
        self.advance(len)?;
        self.line += newlines;
        Ok(())
    }

    /// A maximal run of decimal digits. Fractions, exponents and other radixes
    /// are not recognized here.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let len = self.rest().iter().take_while(|b| b.is_ascii_digit()).count();
        self.advance(len)?;
        Ok(self.token(SyntaxKind::NumericLiteral, start))
    }

    /// Skip to the next line terminator (`\n`, `\r`, U+2028 or U+2029). The
    /// terminator itself is left for the whitespace class so it is counted
    /// once.
    fn skip_line_comment(&mut self) -> Result<(), LexError> {
        let rest = self.rest();
        let len = memchr::memchr3_iter(b'\n', b'\r', 0xE2, rest)
            .find(|&i| rest[i] != 0xE2 || matches!(rest.get(i + 1..i + 3), Some([0x80, 0xA8 | 0xA9])))
            .unwrap_or(rest.len());
        self.advance(len)
    }

    /// Skip through the first `*/`. A comment left open at the end of the
    /// buffer is accepted and ends there.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let rest = self.rest();
        let len = match memmem::find(&rest[2..], b"*/") {
            Some(i) => i + 4,
            None => {
                warn!(
                    offset = self.pos,
                    line = self.line,
                    "block comment is not closed before end of input"
                );
                rest.len()
            }
        };
        let newlines = memchr::memchr_iter(b'\n', &rest[..len]).count() as u32;
        self.advance(len)?;
        self.line += newlines;
        Ok(())
    }

    /// A quoted string, delimiters and escapes kept verbatim in the span.
    fn scan_string(&mut self, quote: u8) -> Result<Token, LexError> {
        let start = self.pos;
        let start_line = self.line;
        let unterminated = LexError::UnterminatedString {
            offset: start as TextPos,
            line: start_line,
        };
        let mut newlines = 0;
        let mut i = start + 1;
        loop {
            match self.bytes.get(i) {
                None => return Err(unterminated),
                Some(&b) if b == quote => {
                    i += 1;
                    break;
                }
                Some(b'\\') => match self.bytes.get(i + 1) {
                    None => return Err(unterminated),
                    Some(b'\r') if self.bytes.get(i + 2) == Some(&b'\n') => {
                        newlines += 1;
                        i += 3;
                    }
                    Some(b'\n') => {
                        newlines += 1;
                        i += 2;
                    }
                    Some(0) => return Err(self.exhausted_at(i + 1, start_line + newlines)),
                    Some(_) => i += 2,
                },
                Some(b'\n' | b'\r') => return Err(unterminated),
                Some(0) => return Err(self.exhausted_at(i, start_line + newlines)),
                Some(_) => i += 1,
            }
        }
        self.advance(i - start)?;
        self.line += newlines;
        trace!(start, end = self.pos, "string literal");
        Ok(self.token(SyntaxKind::StringLiteral, start))
    }

    fn exhausted_at(&self, offset: usize, line: u32) -> LexError {
        LexError::BufferExhaustedMidToken {
            offset: offset as TextPos,
            line,
        }
    }
}
