use pretty_assertions::assert_eq;

use super::*;

/// Helper: scan source bytes and return `(kind, text)` pairs (excluding Eof).
fn scan(source: impl AsRef<[u8]>) -> Vec<(TokenKind, String)> {
    let buf = SourceBuffer::from_bytes(source.as_ref());
    Scanner::new(&buf)
        .map(|t| (t.kind, t.text_lossy().into_owned()))
        .collect()
}

/// Helper: scan and return kinds only.
fn scan_kinds(source: impl AsRef<[u8]>) -> Vec<TokenKind> {
    scan(source).into_iter().map(|(k, _)| k).collect()
}

/// Helper: scan and return `(kind, line)` pairs.
fn scan_lines(source: impl AsRef<[u8]>) -> Vec<(TokenKind, u32)> {
    let buf = SourceBuffer::from_bytes(source.as_ref());
    Scanner::new(&buf).map(|t| (t.kind, t.line)).collect()
}

/// Helper: scan and return `(kind, span)` pairs.
fn scan_spans(source: impl AsRef<[u8]>) -> Vec<(TokenKind, Span)> {
    let buf = SourceBuffer::from_bytes(source.as_ref());
    Scanner::new(&buf).map(|t| (t.kind, t.span)).collect()
}

fn pair(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_owned())
}

// ─── End of input ─────────────────────────────────────────────────────

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = Scanner::new(&buf);
    let tok = scanner.next_token();
    assert_eq!(tok.kind, TokenKind::Eof);
    assert_eq!(tok.span, Span::point(0));
    assert_eq!(tok.line, 1);
    assert!(tok.text.is_empty());
}

#[test]
fn repeated_eof_returns_same_token() {
    let buf = SourceBuffer::new("x\n");
    let mut scanner = Scanner::new(&buf);
    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
    let eof = scanner.next_token();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(2));
    assert_eq!(eof.line, 2);
    for _ in 0..5 {
        assert_eq!(scanner.next_token(), eof);
        assert_eq!(scanner.pos(), 2);
    }
}

#[test]
fn whitespace_only_source() {
    let buf = SourceBuffer::new("  \t\r\n \n");
    let mut scanner = Scanner::new(&buf);
    let tok = scanner.next_token();
    assert_eq!(tok.kind, TokenKind::Eof);
    assert_eq!(tok.line, 3);
    assert_eq!(tok.span, Span::point(7));
}

#[test]
fn iterator_yields_tokens_then_none() {
    let buf = SourceBuffer::new("a b");
    let mut scanner = Scanner::new(&buf);
    assert!(scanner.next().is_some());
    assert!(scanner.next().is_some());
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn tokenize_convenience() {
    let buf = SourceBuffer::new("x = 1;");
    let tokens = tokenize(&buf);
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].text, b"x");
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
}

// ─── Identifiers & keywords ───────────────────────────────────────────

#[test]
fn keyword_identifier_exactness() {
    assert_eq!(scan_kinds("ifx"), [TokenKind::Identifier]);
    assert_eq!(scan_kinds("i"), [TokenKind::Identifier]);
    assert_eq!(scan_kinds("if"), [TokenKind::If]);
    assert_eq!(scan_kinds("const"), [TokenKind::Const]);
    assert_eq!(scan_kinds("constant"), [TokenKind::Identifier]);
}

#[test]
fn every_keyword_scans_to_its_kind() {
    for kind in TokenKind::ALL.iter().filter(|k| k.is_keyword()) {
        let text = kind.lexeme().unwrap();
        assert_eq!(scan(text), [pair(*kind, text)], "{text:?}");
    }
}

#[test]
fn identifiers_with_digits_and_underscores() {
    assert_eq!(
        scan("_tmp1 x2y a_b _"),
        [
            pair(TokenKind::Identifier, "_tmp1"),
            pair(TokenKind::Identifier, "x2y"),
            pair(TokenKind::Identifier, "a_b"),
            pair(TokenKind::Identifier, "_"),
        ]
    );
}

#[test]
fn keyword_glued_to_punctuation() {
    assert_eq!(
        scan_kinds("while(x)"),
        [
            TokenKind::While,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(
        scan_kinds("Int INT int"),
        [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Int]
    );
}

// ─── Numbers ──────────────────────────────────────────────────────────

#[test]
fn integer_literal() {
    assert_eq!(scan("0 42 007"), [
        pair(TokenKind::Number, "0"),
        pair(TokenKind::Number, "42"),
        pair(TokenKind::Number, "007"),
    ]);
}

#[test]
fn decimal_literal() {
    assert_eq!(scan("3.14"), [pair(TokenKind::Number, "3.14")]);
}

#[test]
fn trailing_dot_is_not_part_of_number() {
    assert_eq!(
        scan("123."),
        [pair(TokenKind::Number, "123"), pair(TokenKind::Dot, ".")]
    );
}

#[test]
fn leading_dot_is_separate_token() {
    assert_eq!(
        scan(".5"),
        [pair(TokenKind::Dot, "."), pair(TokenKind::Number, "5")]
    );
}

#[test]
fn second_dot_ends_number() {
    assert_eq!(
        scan("1.2.3"),
        [
            pair(TokenKind::Number, "1.2"),
            pair(TokenKind::Dot, "."),
            pair(TokenKind::Number, "3"),
        ]
    );
}

#[test]
fn dot_followed_by_letter_is_member_access() {
    assert_eq!(
        scan("1.x"),
        [
            pair(TokenKind::Number, "1"),
            pair(TokenKind::Dot, "."),
            pair(TokenKind::Identifier, "x"),
        ]
    );
}

#[test]
fn digits_then_letters_split() {
    assert_eq!(
        scan("9lives"),
        [
            pair(TokenKind::Number, "9"),
            pair(TokenKind::Identifier, "lives"),
        ]
    );
}

// ─── Strings ──────────────────────────────────────────────────────────

#[test]
fn simple_string_includes_quotes() {
    let spans = scan_spans("\"ab\"");
    assert_eq!(spans, [(TokenKind::String, Span::new(0, 4))]);
    assert_eq!(scan("\"ab\""), [pair(TokenKind::String, "\"ab\"")]);
}

#[test]
fn empty_string() {
    assert_eq!(scan("\"\""), [pair(TokenKind::String, "\"\"")]);
}

#[test]
fn backslash_is_ordinary_string_content() {
    // No escape processing: the second quote closes the literal.
    assert_eq!(scan("\"a\\\""), [pair(TokenKind::String, "\"a\\\"")]);
}

#[test]
fn string_may_contain_single_quote() {
    assert_eq!(scan("\"it's\""), [pair(TokenKind::String, "\"it's\"")]);
}

#[test]
fn string_with_non_ascii_content() {
    assert_eq!(scan("\"caf\u{e9}\""), [pair(TokenKind::String, "\"caf\u{e9}\"")]);
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(
        scan_spans("\"ab"),
        [(TokenKind::Error, Span::new(0, 3))]
    );
    assert_eq!(scan("\"ab"), [pair(TokenKind::Error, "Unterminated string.")]);
}

#[test]
fn newline_inside_string_is_error_and_still_counts() {
    assert_eq!(
        scan_lines("\"a\nb\""),
        [
            (TokenKind::Error, 1),
            (TokenKind::Identifier, 2),
            (TokenKind::Error, 2),
        ]
    );
    assert_eq!(
        scan("\"a\nb\""),
        [
            pair(TokenKind::Error, "Not support multi-line string."),
            pair(TokenKind::Identifier, "b"),
            pair(TokenKind::Error, "Unterminated string."),
        ]
    );
}

#[test]
fn multi_line_string_error_does_not_consume_newline() {
    assert_eq!(
        scan_spans("\"a\nx"),
        [
            (TokenKind::Error, Span::new(0, 2)),
            (TokenKind::Identifier, Span::new(3, 4)),
        ]
    );
}

// ─── Characters ───────────────────────────────────────────────────────

#[test]
fn simple_char() {
    assert_eq!(scan("'a'"), [pair(TokenKind::Character, "'a'")]);
}

#[test]
fn char_length_is_not_checked() {
    assert_eq!(scan("'ab'"), [pair(TokenKind::Character, "'ab'")]);
    assert_eq!(scan("''"), [pair(TokenKind::Character, "''")]);
}

#[test]
fn char_may_contain_double_quote() {
    assert_eq!(scan("'\"'"), [pair(TokenKind::Character, "'\"'")]);
}

#[test]
fn unterminated_char_at_eof() {
    assert_eq!(scan("'a"), [pair(TokenKind::Error, "Unterminated character.")]);
}

#[test]
fn newline_inside_char_is_error() {
    assert_eq!(
        scan("'a\n'"),
        [
            pair(TokenKind::Error, "Not support multi-line character."),
            pair(TokenKind::Error, "Unterminated character."),
        ]
    );
    assert_eq!(
        scan_lines("'a\n'"),
        [(TokenKind::Error, 1), (TokenKind::Error, 2)]
    );
}

// ─── Comments & whitespace ────────────────────────────────────────────

#[test]
fn comment_then_identifier_on_next_line() {
    let buf = SourceBuffer::new("// hi\nx");
    let mut scanner = Scanner::new(&buf);
    let tok = scanner.next_token();
    assert_eq!(tok.kind, TokenKind::Identifier);
    assert_eq!(tok.text, b"x");
    assert_eq!(tok.line, 2);
    assert_eq!(tok.span, Span::new(6, 7));
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
}

#[test]
fn trailing_comment_without_newline() {
    assert_eq!(scan_kinds("x // trailing"), [TokenKind::Identifier]);
    assert!(scan_kinds("//only").is_empty());
}

#[test]
fn consecutive_comment_lines_count_newlines() {
    assert_eq!(
        scan_lines("// a\n// b\n\nz"),
        [(TokenKind::Identifier, 4)]
    );
}

#[test]
fn comment_markers_inside_string_are_content() {
    assert_eq!(scan("\"// no\""), [pair(TokenKind::String, "\"// no\"")]);
}

#[test]
fn single_slash_is_division() {
    assert_eq!(
        scan_kinds("a/b"),
        [TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier]
    );
    assert_eq!(scan_kinds("/ /"), [TokenKind::Slash, TokenKind::Slash]);
}

#[test]
fn slash_equal_is_not_a_comment() {
    assert_eq!(
        scan_kinds("x /= 2"),
        [TokenKind::Identifier, TokenKind::SlashEqual, TokenKind::Number]
    );
}

#[test]
fn crlf_counts_one_line() {
    assert_eq!(
        scan_lines("a\r\nb"),
        [(TokenKind::Identifier, 1), (TokenKind::Identifier, 2)]
    );
}

#[test]
fn line_numbers_follow_newlines() {
    assert_eq!(
        scan_lines("a\nb\n\nc"),
        [
            (TokenKind::Identifier, 1),
            (TokenKind::Identifier, 2),
            (TokenKind::Identifier, 4),
        ]
    );
}

// ─── Punctuation & operators ──────────────────────────────────────────

#[test]
fn single_char_punctuation() {
    assert_eq!(
        scan_kinds("()[]{},.;~"),
        [
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
        ]
    );
}

#[test]
fn every_operator_lexeme_scans_to_its_kind() {
    for kind in TokenKind::ALL.iter().filter(|k| k.is_punctuation()) {
        let text = kind.lexeme().unwrap();
        assert_eq!(scan(text), [pair(*kind, text)], "{text:?}");
    }
}

#[test]
fn increment_is_one_token() {
    assert_eq!(scan("++"), [pair(TokenKind::PlusPlus, "++")]);
}

#[test]
fn plus_followed_by_other_is_single() {
    assert_eq!(scan_kinds("+a"), [TokenKind::Plus, TokenKind::Identifier]);
    assert_eq!(scan_kinds("+ +"), [TokenKind::Plus, TokenKind::Plus]);
    assert_eq!(scan_kinds("+-"), [TokenKind::Plus, TokenKind::Minus]);
}

#[test]
fn greedy_match_is_bounded_to_one_lookahead() {
    assert_eq!(scan_kinds("+++"), [TokenKind::PlusPlus, TokenKind::Plus]);
    assert_eq!(scan_kinds("<<="), [TokenKind::LessLess, TokenKind::Equal]);
    assert_eq!(
        scan_kinds(">>="),
        [TokenKind::GreaterGreater, TokenKind::Equal]
    );
    assert_eq!(scan_kinds("&&&"), [TokenKind::AmperAmper, TokenKind::Amper]);
    assert_eq!(scan_kinds("!=="), [TokenKind::BangEqual, TokenKind::Equal]);
    assert_eq!(scan_kinds("-->"), [TokenKind::MinusMinus, TokenKind::Greater]);
    assert_eq!(scan_kinds("==="), [TokenKind::EqualEqual, TokenKind::Equal]);
}

#[test]
fn arrow_member_access() {
    assert_eq!(
        scan("p->next"),
        [
            pair(TokenKind::Identifier, "p"),
            pair(TokenKind::MinusGreater, "->"),
            pair(TokenKind::Identifier, "next"),
        ]
    );
}

#[test]
fn compound_assignments() {
    assert_eq!(
        scan_kinds("+= -= *= /= %= &= |= ^="),
        [
            TokenKind::PlusEqual,
            TokenKind::MinusEqual,
            TokenKind::StarEqual,
            TokenKind::SlashEqual,
            TokenKind::PercentEqual,
            TokenKind::AmperEqual,
            TokenKind::PipeEqual,
            TokenKind::CaretEqual,
        ]
    );
}

#[test]
fn operator_span_lengths() {
    assert_eq!(
        scan_spans("a<=b"),
        [
            (TokenKind::Identifier, Span::new(0, 1)),
            (TokenKind::LessEqual, Span::new(1, 3)),
            (TokenKind::Identifier, Span::new(3, 4)),
        ]
    );
}

// ─── Errors ───────────────────────────────────────────────────────────

#[test]
fn unexpected_character_consumes_one_byte() {
    assert_eq!(scan_spans("#"), [(TokenKind::Error, Span::new(0, 1))]);
    assert_eq!(scan("#"), [pair(TokenKind::Error, "Unexpected character.")]);
}

#[test]
fn scanning_continues_after_error() {
    assert_eq!(
        scan("a#b"),
        [
            pair(TokenKind::Identifier, "a"),
            pair(TokenKind::Error, "Unexpected character."),
            pair(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn characters_outside_the_language() {
    for source in ["@", "$", "`", "?", ":", "\\", "\x01", "\x7f"] {
        assert_eq!(scan_kinds(source), [TokenKind::Error], "{source:?}");
    }
}

#[test]
fn each_non_ascii_byte_is_its_own_error() {
    assert_eq!(
        scan_spans("\u{e9}x"),
        [
            (TokenKind::Error, Span::new(0, 1)),
            (TokenKind::Error, Span::new(1, 2)),
            (TokenKind::Identifier, Span::new(2, 3)),
        ]
    );
    assert_eq!(scan_kinds("\u{1F600}"), [TokenKind::Error; 4]);
}

#[test]
fn latin1_byte_outside_literal_is_unexpected() {
    assert_eq!(
        scan(b"caf\xe9;"),
        [
            pair(TokenKind::Identifier, "caf"),
            pair(TokenKind::Error, "Unexpected character."),
            pair(TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn invalid_utf8_inside_comment_is_skipped() {
    assert_eq!(
        scan_spans(b"int x; // caf\xe9\ny"),
        [
            (TokenKind::Int, Span::new(0, 3)),
            (TokenKind::Identifier, Span::new(4, 5)),
            (TokenKind::Semicolon, Span::new(5, 6)),
            (TokenKind::Identifier, Span::new(15, 16)),
        ]
    );
}

#[test]
fn invalid_utf8_inside_string_keeps_raw_bytes() {
    let buf = SourceBuffer::from_bytes(b"\"caf\xe9\"");
    let tok = Scanner::new(&buf).next_token();
    assert_eq!(tok.kind, TokenKind::String);
    assert_eq!(tok.text, b"\"caf\xe9\"");
    assert_eq!(tok.span, Span::new(0, 6));
}

#[test]
fn interior_null_is_error_not_eof() {
    assert_eq!(
        scan_spans("x\0y"),
        [
            (TokenKind::Identifier, Span::new(0, 1)),
            (TokenKind::Error, Span::new(1, 2)),
            (TokenKind::Identifier, Span::new(2, 3)),
        ]
    );
}

// ─── Sessions ─────────────────────────────────────────────────────────

#[test]
fn independent_sessions_do_not_interfere() {
    let a = SourceBuffer::new("int a;");
    let b = SourceBuffer::new("\n\nfloat b;");
    let mut sa = Scanner::new(&a);
    let mut sb = Scanner::new(&b);
    assert_eq!(sa.next_token().kind, TokenKind::Int);
    assert_eq!(sb.next_token().kind, TokenKind::Float);
    assert_eq!(sa.next_token().line, 1);
    assert_eq!(sb.next_token().line, 3);
}

#[test]
fn sessions_on_separate_threads_share_one_buffer() {
    let buf = SourceBuffer::new("a + b;\nc - d;\n");
    let expected = tokenize(&buf);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| tokenize(&buf))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ─── Realistic input ──────────────────────────────────────────────────

#[test]
fn realistic_function() {
    let source = "int main(void) {\n  return 0;\n}\n";
    assert_eq!(
        scan_lines(source),
        [
            (TokenKind::Int, 1),
            (TokenKind::Identifier, 1),
            (TokenKind::LeftParen, 1),
            (TokenKind::Void, 1),
            (TokenKind::RightParen, 1),
            (TokenKind::LeftBrace, 1),
            (TokenKind::Return, 2),
            (TokenKind::Number, 2),
            (TokenKind::Semicolon, 2),
            (TokenKind::RightBrace, 3),
        ]
    );
}

#[test]
fn realistic_loop() {
    let source = "for (unsigned i = 0; i <= n && !done; i++) sum += a[i] >> 1;";
    assert_eq!(
        scan_kinds(source),
        [
            TokenKind::For,
            TokenKind::LeftParen,
            TokenKind::Unsigned,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::LessEqual,
            TokenKind::Identifier,
            TokenKind::AmperAmper,
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::RightParen,
            TokenKind::Identifier,
            TokenKind::PlusEqual,
            TokenKind::Identifier,
            TokenKind::LeftBracket,
            TokenKind::Identifier,
            TokenKind::RightBracket,
            TokenKind::GreaterGreater,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn realistic_struct_with_comments() {
    let source = "typedef struct node {\n  // payload\n  double value; // units\n  struct node *next;\n} node_t;";
    assert_eq!(
        scan_lines(source),
        [
            (TokenKind::Typedef, 1),
            (TokenKind::Struct, 1),
            (TokenKind::Identifier, 1),
            (TokenKind::LeftBrace, 1),
            (TokenKind::Double, 3),
            (TokenKind::Identifier, 3),
            (TokenKind::Semicolon, 3),
            (TokenKind::Struct, 4),
            (TokenKind::Identifier, 4),
            (TokenKind::Star, 4),
            (TokenKind::Identifier, 4),
            (TokenKind::Semicolon, 4),
            (TokenKind::RightBrace, 5),
            (TokenKind::Identifier, 5),
            (TokenKind::Semicolon, 5),
        ]
    );
}

// ─── Property Tests ───────────────────────────────────────────────────

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    /// Strategy biased toward bytes the scanner actually dispatches on.
    fn c_like_source() -> impl Strategy<Value = String> {
        "[a-z0-9_+\\-*/%&|^=!<>(){}\\[\\],.;~\"' \t\r\n#@]{0,96}"
    }

    /// Skip one run of trivia at the start of `gap`, returning the rest.
    fn strip_trivia(gap: &[u8]) -> Option<&[u8]> {
        if let Some(rest) = gap.strip_prefix(b"//") {
            let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
            return Some(&rest[end..]);
        }
        match gap.split_first() {
            Some((b' ' | b'\t' | b'\r' | b'\n', rest)) => Some(rest),
            _ => None,
        }
    }

    /// Check that scanning `source` accounts for every byte.
    fn check_invariants(source: &[u8]) -> Result<(), TestCaseError> {
        let buf = SourceBuffer::from_bytes(source);
        let mut scanner = Scanner::new(&buf);
        let mut prev_end = 0u32;
        let mut prev_line = 1u32;
        let mut calls = 0usize;

        let eof = loop {
            let tok = scanner.next_token();
            calls += 1;
            prop_assert!(calls <= source.len() + 1, "too many calls for {:?}", source);

            // Gap between tokens is pure trivia.
            let mut gap = &source[prev_end as usize..tok.span.start as usize];
            while !gap.is_empty() {
                match strip_trivia(gap) {
                    Some(rest) => gap = rest,
                    None => prop_assert!(false, "non-trivia gap {:?} in {:?}", gap, source),
                }
            }

            // Line is one plus the newlines before the token.
            let newlines = source[..tok.span.start as usize]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            prop_assert_eq!(tok.line as usize, newlines + 1);
            prop_assert!(tok.line >= prev_line);

            if tok.is_eof() {
                prop_assert_eq!(tok.span.start as usize, source.len());
                break tok;
            }

            prop_assert!(!tok.span.is_empty(), "empty token {:?}", tok);
            if !tok.is_error() {
                prop_assert_eq!(tok.text, &source[tok.span.to_range()]);
            }
            prev_end = tok.span.end;
            prev_line = tok.line;
        };

        prop_assert_eq!(scanner.next_token(), eof);
        prop_assert_eq!(scanner.next_token(), eof);
        Ok(())
    }

    proptest! {
        #[test]
        fn c_like_sources_are_fully_accounted_for(source in c_like_source()) {
            check_invariants(source.as_bytes())?;
        }

        #[test]
        fn arbitrary_unicode_never_panics(source in any::<String>()) {
            check_invariants(source.as_bytes())?;
        }

        #[test]
        fn arbitrary_bytes_never_panic(
            source in proptest::collection::vec(any::<u8>(), 0..128),
        ) {
            check_invariants(&source)?;
        }

        #[test]
        fn keyword_prefixes_and_extensions_are_identifiers(
            index in 45u8..=71,
            suffix in "[a-z0-9_]{1,4}",
            cut in 1usize..8,
        ) {
            let keyword = TokenKind::ALL[usize::from(index)].lexeme().unwrap();

            let extended = format!("{keyword}{suffix}");
            prop_assert_eq!(scan_kinds(&extended), vec![TokenKind::Identifier]);

            if cut < keyword.len() {
                let prefix = &keyword[..cut];
                let kinds = scan_kinds(prefix);
                // A prefix may itself be a shorter keyword (`do` in `double`).
                prop_assert_eq!(kinds.len(), 1);
                prop_assert_ne!(kinds[0], TokenKind::ALL[usize::from(index)]);
            }
        }
    }
}
