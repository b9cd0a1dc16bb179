//! Lexical scanner for a C-like language.
//!
//! Standalone crate with no logging or IR dependencies, usable by the
//! `cscan` driver as well as by editors and highlighters.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: owns one copy of the source bytes (text or arbitrary
//!   bytes), followed by a `0x00` sentinel and cache-line padding.
//! - [`Cursor`]: byte walker over the buffer (`current`, `peek`, `eat_if`,
//!   memchr-accelerated skips).
//! - [`Scanner`]: the scan session. Skips trivia, classifies the first byte
//!   of each token, and runs the identifier, number, string, character, and
//!   operator recognizers.
//! - [`keywords`]: reserved-word lookup for identifier-shaped spans.
//!
//! # Example
//!
//! ```
//! use cscan_lexer::{SourceBuffer, TokenKind};
//!
//! let source = SourceBuffer::new("int x = 42;");
//! let kinds: Vec<TokenKind> = source.scanner().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Int,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! ```

mod cursor;
pub mod keywords;
mod lex_error;
mod scanner;
mod source_buffer;
mod span;
mod token;

pub use cursor::Cursor;
pub use lex_error::LexError;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use token::{Token, TokenKind};
