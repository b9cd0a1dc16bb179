//! Reserved-word classification.
//!
//! The scanner first delimits an identifier-shaped span, then asks
//! [`lookup`] whether the span spells a reserved word. The lookup uses the
//! span's length as a first-pass filter (reserved words are 2-8 bytes and
//! start with a lowercase letter), then compares the full text against the
//! words of that length.
//!
//! Only an exact match counts: `if` is a keyword, while `i`, `ifx`, and
//! `If` are identifiers. There is no case folding.

use crate::TokenKind;

/// Look up a reserved word by text.
///
/// Returns the keyword's `TokenKind`, or `None` for an ordinary identifier.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    lookup_bytes(text.as_bytes())
}

fn lookup_bytes(bytes: &[u8]) -> Option<TokenKind> {
    let len = bytes.len();

    // Guard: all reserved words are 2-8 bytes and start with a-z
    if !(2..=8).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match bytes {
            b"do" => Some(TokenKind::Do),
            b"if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match bytes {
            b"for" => Some(TokenKind::For),
            b"int" => Some(TokenKind::Int),
            _ => None,
        },
        4 => match bytes {
            b"case" => Some(TokenKind::Case),
            b"char" => Some(TokenKind::Char),
            b"else" => Some(TokenKind::Else),
            b"enum" => Some(TokenKind::Enum),
            b"goto" => Some(TokenKind::Goto),
            b"long" => Some(TokenKind::Long),
            b"void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match bytes {
            b"break" => Some(TokenKind::Break),
            b"const" => Some(TokenKind::Const),
            b"float" => Some(TokenKind::Float),
            b"short" => Some(TokenKind::Short),
            b"union" => Some(TokenKind::Union),
            b"while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match bytes {
            b"double" => Some(TokenKind::Double),
            b"return" => Some(TokenKind::Return),
            b"signed" => Some(TokenKind::Signed),
            b"sizeof" => Some(TokenKind::Sizeof),
            b"struct" => Some(TokenKind::Struct),
            b"switch" => Some(TokenKind::Switch),
            _ => None,
        },
        7 => match bytes {
            b"default" => Some(TokenKind::Default),
            b"typedef" => Some(TokenKind::Typedef),
            _ => None,
        },
        8 => match bytes {
            b"continue" => Some(TokenKind::Continue),
            b"unsigned" => Some(TokenKind::Unsigned),
            _ => None,
        },
        _ => None,
    }
}

/// Classify an identifier-shaped span: reserved word or [`TokenKind::Identifier`].
#[inline]
pub fn classify(span: &[u8]) -> TokenKind {
    lookup_bytes(span).unwrap_or(TokenKind::Identifier)
}
