//! Token dump rendering.
//!
//! One output line per token, `Eof` included:
//!
//! ```text
//!    1 59 'int'
//!    | 41 'main'
//!    2 61 'return'
//! ```
//!
//! The first token on a new line prints the line number in four columns;
//! later tokens on the same line print `   | ` instead. The kind code is
//! right-aligned in two columns, followed by the token text in quotes.
//! Token bytes that are not UTF-8 are rendered as U+FFFD.

use std::io::{self, Write};

use cscan_lexer::{SourceBuffer, Token};

/// Counts collected while dumping one source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DumpStats {
    /// Tokens written, `Eof` included.
    pub tokens: usize,
    /// Error tokens among them.
    pub errors: usize,
    /// Reserved words.
    pub keywords: usize,
    /// Number, string, and character literals.
    pub literals: usize,
    /// Punctuation and operators.
    pub operators: usize,
    /// Line of the final `Eof`.
    pub last_line: u32,
}

/// Writes tokens in dump format, tracking the previous token's line.
#[derive(Debug, Default)]
pub struct TokenDumper {
    prev_line: Option<u32>,
}

impl TokenDumper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one token line.
    pub fn write_token<W: Write>(&mut self, out: &mut W, token: &Token<'_>) -> io::Result<()> {
        if self.prev_line == Some(token.line) {
            out.write_all(b"   | ")?;
        } else {
            write!(out, "{:4} ", token.line)?;
            self.prev_line = Some(token.line);
        }
        writeln!(out, "{:2} '{}'", token.kind.code(), token.text_lossy())
    }
}

/// Scan `source` and write every token, through `Eof`, to `out`.
pub fn dump_tokens<W: Write>(source: &SourceBuffer, out: &mut W) -> io::Result<DumpStats> {
    let mut scanner = source.scanner();
    let mut dumper = TokenDumper::new();
    let mut stats = DumpStats::default();

    loop {
        let token = scanner.next_token();
        tracing::trace!(kind = %token.kind, span = %token.span, line = token.line, "token");
        dumper.write_token(out, &token)?;

        stats.tokens += 1;
        if token.is_error() {
            stats.errors += 1;
        } else if token.kind.is_keyword() {
            stats.keywords += 1;
        } else if token.kind.is_literal() {
            stats.literals += 1;
        } else if token.kind.is_punctuation() {
            stats.operators += 1;
        }
        if token.is_eof() {
            stats.last_line = token.line;
            return Ok(stats);
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
