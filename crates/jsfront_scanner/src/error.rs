use jsfront_core::text::TextPos;

/// A fatal scanning failure. Scanning stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A newline or the end of the buffer came before the closing quote.
    /// `offset` is the opening quote.
    #[error("unterminated string literal (line {line})")]
    UnterminatedString { offset: TextPos, line: u32 },

    #[error("unexpected character {ch:?} (line {line})")]
    UnexpectedCharacter { ch: char, offset: TextPos, line: u32 },

    /// The buffer ended, or hit an embedded NUL, while a token was still open.
    #[error("source ended in the middle of a token (line {line})")]
    BufferExhaustedMidToken { offset: TextPos, line: u32 },

    #[error("source is {length} bytes, larger than the 4 GiB position limit")]
    SourceTooLarge { length: usize },
}

impl LexError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> TextPos {
        match *self {
            LexError::UnterminatedString { offset, .. }
            | LexError::UnexpectedCharacter { offset, .. }
            | LexError::BufferExhaustedMidToken { offset, .. } => offset,
            LexError::SourceTooLarge { .. } => 0,
        }
    }

    /// 1-based line of the error.
    pub fn line(&self) -> u32 {
        match *self {
            LexError::UnterminatedString { line, .. }
            | LexError::UnexpectedCharacter { line, .. }
            | LexError::BufferExhaustedMidToken { line, .. } => line,
            LexError::SourceTooLarge { .. } => 1,
        }
    }
}
