//! Hand-written scanner producing one [`Token`] per call.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] and keeps the rest of
//! the session state next to it: the start offset of the token being built
//! and the current line. It never allocates, and every token it returns
//! borrows its text from the [`SourceBuffer`].
//!
//! Input is raw bytes. Only ASCII bytes start tokens; any byte `>= 0x80`
//! outside a comment or literal is reported on its own as an unexpected
//! character.
//!
//! # Design
//!
//! `next_token` skips trivia (whitespace, newlines, `//` comments), marks the
//! token start, consumes one byte and dispatches on it. Each arm either
//! emits a fixed-kind token or calls a focused recognizer that advances the
//! cursor and builds the token. Operators use greedy longest match with at
//! most one byte of lookahead and never backtrack.
//!
//! Lexical errors are encoded as [`TokenKind::Error`] tokens, not as
//! `Result::Err`, and always consume at least one byte so the scan makes
//! progress until it reaches [`TokenKind::Eof`].

use crate::cursor::Cursor;
use crate::{keywords, LexError, SourceBuffer, Span, Token, TokenKind};

/// Scan session over one [`SourceBuffer`].
///
/// A scanner is created per buffer and is never rewound or pointed at
/// another buffer; start a new session with [`Scanner::new`] instead.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    /// Offset of the first byte of the token under construction.
    start: u32,
    /// 1-based line of the next unconsumed byte.
    line: u32,
}

impl<'src> Scanner<'src> {
    /// Start scanning `source` at offset 0 on line 1.
    pub fn new(source: &'src SourceBuffer) -> Self {
        Self {
            cursor: source.cursor(),
            start: 0,
            line: 1,
        }
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Offset of the next unconsumed byte.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] with an empty span once the source is
    /// exhausted. Subsequent calls keep returning the same `Eof` without
    /// advancing.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_trivia();
        self.start = self.cursor.pos();

        if self.cursor.is_eof() {
            return self.make(TokenKind::Eof);
        }

        let c = self.cursor.current();
        self.cursor.advance();

        match c {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'0'..=b'9' => self.number(),
            b'"' => self.quoted(
                b'"',
                TokenKind::String,
                LexError::UnterminatedString,
                LexError::MultiLineString,
            ),
            b'\'' => self.quoted(
                b'\'',
                TokenKind::Character,
                LexError::UnterminatedCharacter,
                LexError::MultiLineCharacter,
            ),

            b'(' => self.make(TokenKind::LeftParen),
            b')' => self.make(TokenKind::RightParen),
            b'[' => self.make(TokenKind::LeftBracket),
            b']' => self.make(TokenKind::RightBracket),
            b'{' => self.make(TokenKind::LeftBrace),
            b'}' => self.make(TokenKind::RightBrace),
            b',' => self.make(TokenKind::Comma),
            b'.' => self.make(TokenKind::Dot),
            b';' => self.make(TokenKind::Semicolon),
            b'~' => self.make(TokenKind::Tilde),

            b'+' => self.operator(
                TokenKind::Plus,
                &[(b'+', TokenKind::PlusPlus), (b'=', TokenKind::PlusEqual)],
            ),
            b'-' => self.operator(
                TokenKind::Minus,
                &[
                    (b'-', TokenKind::MinusMinus),
                    (b'=', TokenKind::MinusEqual),
                    (b'>', TokenKind::MinusGreater),
                ],
            ),
            b'*' => self.operator(TokenKind::Star, &[(b'=', TokenKind::StarEqual)]),
            b'/' => self.operator(TokenKind::Slash, &[(b'=', TokenKind::SlashEqual)]),
            b'%' => self.operator(TokenKind::Percent, &[(b'=', TokenKind::PercentEqual)]),
            b'&' => self.operator(
                TokenKind::Amper,
                &[(b'&', TokenKind::AmperAmper), (b'=', TokenKind::AmperEqual)],
            ),
            b'|' => self.operator(
                TokenKind::Pipe,
                &[(b'|', TokenKind::PipePipe), (b'=', TokenKind::PipeEqual)],
            ),
            b'^' => self.operator(TokenKind::Caret, &[(b'=', TokenKind::CaretEqual)]),
            b'=' => self.operator(TokenKind::Equal, &[(b'=', TokenKind::EqualEqual)]),
            b'!' => self.operator(TokenKind::Bang, &[(b'=', TokenKind::BangEqual)]),
            b'<' => self.operator(
                TokenKind::Less,
                &[(b'=', TokenKind::LessEqual), (b'<', TokenKind::LessLess)],
            ),
            b'>' => self.operator(
                TokenKind::Greater,
                &[
                    (b'=', TokenKind::GreaterEqual),
                    (b'>', TokenKind::GreaterGreater),
                ],
            ),

            // Interior NUL, control bytes, `#`, `$`, `@`, `\`, `` ` ``, `?`, `:`,
            // and every byte >= 0x80 on its own
            _ => self.error(LexError::UnexpectedCharacter),
        }
    }

    // ─── Trivia ───────────────────────────────────────────────────────

    /// Skip whitespace, newlines, and `//` comments.
    ///
    /// Every branch that does not return consumes at least one byte. A
    /// comment body stops before its newline so the newline arm counts it.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' => self.cursor.advance(),
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                b'/' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    self.cursor.eat_until_newline_or_eof();
                }
                _ => return,
            }
        }
    }

    // ─── Identifiers ──────────────────────────────────────────────────

    fn identifier(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.start);
        Token::new(
            keywords::classify(text),
            self.span(),
            self.line,
            text,
        )
    }

    // ─── Literals ─────────────────────────────────────────────────────

    /// Digits, optionally followed by `.` and more digits.
    ///
    /// A `.` is only taken when a digit follows it, so `123.` scans as the
    /// number `123` and leaves the dot for the next token.
    fn number(&mut self) -> Token<'src> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        self.make(TokenKind::Number)
    }

    /// String or character literal body; the opening quote is already consumed.
    ///
    /// A newline before the closing quote is left unconsumed so the next call
    /// counts it as a line break.
    fn quoted(
        &mut self,
        quote: u8,
        kind: TokenKind,
        unterminated: LexError,
        multi_line: LexError,
    ) -> Token<'src> {
        match self.cursor.skip_to_quote_or_newline(quote) {
            b'\n' => self.error(multi_line),
            0 => self.error(unterminated),
            _ => {
                self.cursor.advance(); // consume closing quote
                self.make(kind)
            }
        }
    }

    // ─── Operators ────────────────────────────────────────────────────

    /// One-byte operator with optional one-byte extensions.
    ///
    /// The first extension whose byte matches the next input byte wins;
    /// otherwise the single-byte kind is emitted.
    fn operator(&mut self, single: TokenKind, extensions: &[(u8, TokenKind)]) -> Token<'src> {
        for &(next, kind) in extensions {
            if self.cursor.eat_if(next) {
                return self.make(kind);
            }
        }
        self.make(single)
    }

    // ─── Token construction ───────────────────────────────────────────

    #[inline]
    fn span(&self) -> Span {
        Span::new(self.start, self.cursor.pos())
    }

    #[inline]
    fn make(&self, kind: TokenKind) -> Token<'src> {
        let text = self.cursor.slice_from(self.start);
        debug_assert!(
            kind.lexeme().map_or(true, |l| l.as_bytes() == text),
            "{kind:?} spelled {text:?}"
        );
        Token::new(kind, self.span(), self.line, text)
    }

    #[inline]
    fn error(&self, error: LexError) -> Token<'src> {
        Token::new(
            TokenKind::Error,
            self.span(),
            self.line,
            error.message().as_bytes(),
        )
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore. The sentinel byte (0x00) maps
/// to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: scan a whole buffer and collect its tokens.
///
/// Returns every token except the final `Eof`. For streaming access use
/// [`Scanner`] directly.
pub fn tokenize(source: &SourceBuffer) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
