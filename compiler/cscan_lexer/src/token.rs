//! Token kinds and the token value produced by the scanner.
//!
//! # Discriminant Layout
//!
//! `TokenKind` is `#[repr(u8)]` and the discriminant doubles as the kind
//! code shown by token dumps. Codes are grouped:
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-9   | Single-byte punctuation |
//! | 10-40 | Operators, grouped by family (`+`, `++`, `+=`, `-`, ...) |
//! | 41-44 | Identifier and literals |
//! | 45-71 | Reserved words, alphabetical |
//! | 72-73 | Error, end of input |

use std::borrow::Cow;
use std::fmt;

use crate::Span;

/// Kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Punctuation (0-9) ===
    LeftParen = 0,
    RightParen = 1,
    LeftBracket = 2,
    RightBracket = 3,
    LeftBrace = 4,
    RightBrace = 5,
    Comma = 6,
    Dot = 7,
    Semicolon = 8,
    Tilde = 9,

    // === Operators (10-40) ===
    Plus = 10,
    PlusPlus = 11,
    PlusEqual = 12,
    Minus = 13,
    MinusMinus = 14,
    MinusEqual = 15,
    /// `->` member access through a pointer.
    MinusGreater = 16,
    Star = 17,
    StarEqual = 18,
    Slash = 19,
    SlashEqual = 20,
    Percent = 21,
    PercentEqual = 22,
    Amper = 23,
    AmperEqual = 24,
    AmperAmper = 25,
    Pipe = 26,
    PipeEqual = 27,
    PipePipe = 28,
    Caret = 29,
    CaretEqual = 30,
    Equal = 31,
    EqualEqual = 32,
    Bang = 33,
    BangEqual = 34,
    Less = 35,
    LessEqual = 36,
    LessLess = 37,
    Greater = 38,
    GreaterEqual = 39,
    GreaterGreater = 40,

    // === Identifier & Literals (41-44) ===
    Identifier = 41,
    /// Character literal, quotes included: `'a'`.
    Character = 42,
    /// String literal, quotes included: `"abc"`.
    String = 43,
    /// Integer or decimal literal: `42`, `3.14`.
    Number = 44,

    // === Reserved Words (45-71) ===
    Break = 45,
    Case = 46,
    Char = 47,
    Const = 48,
    Continue = 49,
    Default = 50,
    Do = 51,
    Double = 52,
    Else = 53,
    Enum = 54,
    Float = 55,
    For = 56,
    Goto = 57,
    If = 58,
    Int = 59,
    Long = 60,
    Return = 61,
    Short = 62,
    Signed = 63,
    Sizeof = 64,
    Struct = 65,
    Switch = 66,
    Typedef = 67,
    Union = 68,
    Unsigned = 69,
    Void = 70,
    While = 71,

    // === Control (72-73) ===
    /// Lexical error; the token text is the diagnostic message.
    Error = 72,
    /// End of input. Zero-length, repeated on every later call.
    Eof = 73,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 74] = [
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Semicolon,
        TokenKind::Tilde,
        TokenKind::Plus,
        TokenKind::PlusPlus,
        TokenKind::PlusEqual,
        TokenKind::Minus,
        TokenKind::MinusMinus,
        TokenKind::MinusEqual,
        TokenKind::MinusGreater,
        TokenKind::Star,
        TokenKind::StarEqual,
        TokenKind::Slash,
        TokenKind::SlashEqual,
        TokenKind::Percent,
        TokenKind::PercentEqual,
        TokenKind::Amper,
        TokenKind::AmperEqual,
        TokenKind::AmperAmper,
        TokenKind::Pipe,
        TokenKind::PipeEqual,
        TokenKind::PipePipe,
        TokenKind::Caret,
        TokenKind::CaretEqual,
        TokenKind::Equal,
        TokenKind::EqualEqual,
        TokenKind::Bang,
        TokenKind::BangEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::LessLess,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::GreaterGreater,
        TokenKind::Identifier,
        TokenKind::Character,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Break,
        TokenKind::Case,
        TokenKind::Char,
        TokenKind::Const,
        TokenKind::Continue,
        TokenKind::Default,
        TokenKind::Do,
        TokenKind::Double,
        TokenKind::Else,
        TokenKind::Enum,
        TokenKind::Float,
        TokenKind::For,
        TokenKind::Goto,
        TokenKind::If,
        TokenKind::Int,
        TokenKind::Long,
        TokenKind::Return,
        TokenKind::Short,
        TokenKind::Signed,
        TokenKind::Sizeof,
        TokenKind::Struct,
        TokenKind::Switch,
        TokenKind::Typedef,
        TokenKind::Union,
        TokenKind::Unsigned,
        TokenKind::Void,
        TokenKind::While,
        TokenKind::Error,
        TokenKind::Eof,
    ];

    /// Numeric kind code (the `repr(u8)` discriminant).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the reserved-word kinds.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        let code = self as u8;
        code >= TokenKind::Break as u8 && code <= TokenKind::While as u8
    }

    /// Returns `true` for punctuation and operator kinds.
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        (self as u8) <= TokenKind::GreaterGreater as u8
    }

    /// Returns `true` for number, string, and character literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::Character
        )
    }

    /// The fixed source text of this kind, if it always has the same spelling.
    ///
    /// Returns `None` for identifiers, literals, errors, and end of input.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Tilde => Some("~"),
            TokenKind::Plus => Some("+"),
            TokenKind::PlusPlus => Some("++"),
            TokenKind::PlusEqual => Some("+="),
            TokenKind::Minus => Some("-"),
            TokenKind::MinusMinus => Some("--"),
            TokenKind::MinusEqual => Some("-="),
            TokenKind::MinusGreater => Some("->"),
            TokenKind::Star => Some("*"),
            TokenKind::StarEqual => Some("*="),
            TokenKind::Slash => Some("/"),
            TokenKind::SlashEqual => Some("/="),
            TokenKind::Percent => Some("%"),
            TokenKind::PercentEqual => Some("%="),
            TokenKind::Amper => Some("&"),
            TokenKind::AmperEqual => Some("&="),
            TokenKind::AmperAmper => Some("&&"),
            TokenKind::Pipe => Some("|"),
            TokenKind::PipeEqual => Some("|="),
            TokenKind::PipePipe => Some("||"),
            TokenKind::Caret => Some("^"),
            TokenKind::CaretEqual => Some("^="),
            TokenKind::Equal => Some("="),
            TokenKind::EqualEqual => Some("=="),
            TokenKind::Bang => Some("!"),
            TokenKind::BangEqual => Some("!="),
            TokenKind::Less => Some("<"),
            TokenKind::LessEqual => Some("<="),
            TokenKind::LessLess => Some("<<"),
            TokenKind::Greater => Some(">"),
            TokenKind::GreaterEqual => Some(">="),
            TokenKind::GreaterGreater => Some(">>"),
            TokenKind::Break => Some("break"),
            TokenKind::Case => Some("case"),
            TokenKind::Char => Some("char"),
            TokenKind::Const => Some("const"),
            TokenKind::Continue => Some("continue"),
            TokenKind::Default => Some("default"),
            TokenKind::Do => Some("do"),
            TokenKind::Double => Some("double"),
            TokenKind::Else => Some("else"),
            TokenKind::Enum => Some("enum"),
            TokenKind::Float => Some("float"),
            TokenKind::For => Some("for"),
            TokenKind::Goto => Some("goto"),
            TokenKind::If => Some("if"),
            TokenKind::Int => Some("int"),
            TokenKind::Long => Some("long"),
            TokenKind::Return => Some("return"),
            TokenKind::Short => Some("short"),
            TokenKind::Signed => Some("signed"),
            TokenKind::Sizeof => Some("sizeof"),
            TokenKind::Struct => Some("struct"),
            TokenKind::Switch => Some("switch"),
            TokenKind::Typedef => Some("typedef"),
            TokenKind::Union => Some("union"),
            TokenKind::Unsigned => Some("unsigned"),
            TokenKind::Void => Some("void"),
            TokenKind::While => Some("while"),
            TokenKind::Identifier
            | TokenKind::Character
            | TokenKind::String
            | TokenKind::Number
            | TokenKind::Error
            | TokenKind::Eof => None,
        }
    }

    /// Human-readable name for diagnostics: the fixed spelling when there is
    /// one, otherwise a category word.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Character => "character literal",
            TokenKind::String => "string literal",
            TokenKind::Number => "number",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
            _ => match self.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

/// A token produced by the [`Scanner`](crate::Scanner).
///
/// `text` borrows the token's bytes from the source buffer, so the buffer
/// must outlive the token. The bytes are raw source and need not be UTF-8;
/// use [`text_lossy`](Self::text_lossy) to render them. Error tokens are the
/// exception: their `text` is a static diagnostic message, while `span` still
/// covers the bytes that were consumed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Bytes consumed for this token. Zero-length only for `Eof`.
    pub span: Span,
    /// 1-based line of the token's first byte.
    pub line: u32,
    /// Source bytes of the token, or the message for error tokens.
    pub text: &'src [u8],
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32, text: &'src [u8]) -> Self {
        Token {
            kind,
            span,
            line,
            text,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Token text as a string, with invalid UTF-8 replaced by U+FFFD.
    ///
    /// Borrows when the bytes are valid UTF-8.
    pub fn text_lossy(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.text)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {} line {}",
            self.kind,
            self.text_lossy(),
            self.span,
            self.line
        )
    }
}
