//! Lexical error kinds.
//!
//! Errors never abort a scan. The scanner turns each one into a
//! [`TokenKind::Error`](crate::TokenKind::Error) token whose text is the
//! fixed message below, after consuming at least one byte of input.

use std::fmt;

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexError {
    /// A byte that starts no valid token (`#`, `$`, `@`, non-ASCII, NUL, ...).
    UnexpectedCharacter,
    /// Missing closing `"` before end of input.
    UnterminatedString,
    /// Raw newline before the closing `"`.
    MultiLineString,
    /// Missing closing `'` before end of input.
    UnterminatedCharacter,
    /// Raw newline before the closing `'`.
    MultiLineCharacter,
}

impl LexError {
    /// The fixed diagnostic message carried by the error token.
    pub const fn message(self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter => "Unexpected character.",
            LexError::UnterminatedString => "Unterminated string.",
            LexError::MultiLineString => "Not support multi-line string.",
            LexError::UnterminatedCharacter => "Unterminated character.",
            LexError::MultiLineCharacter => "Not support multi-line character.",
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LexError {}
