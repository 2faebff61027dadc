#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end lexing through the public API.
//!
//! Each test pins one observable behavior of the heuristic lexer on inputs a
//! highlighter actually sees.

use std::io::Cursor;

use glint_lexer::{tokenize, KeywordSet, StreamScanner, TokenKind};
use pretty_assertions::assert_eq;

fn lex(source: &str) -> Vec<(&str, TokenKind)> {
    tokenize(source.as_bytes())
        .map(|t| (t.as_str().unwrap(), t.kind()))
        .collect()
}

#[test]
fn escaped_quote_stays_inside_string() {
    let source = r#""a\"b""#;
    assert_eq!(lex(source), [(source, TokenKind::String)]);
}

#[test]
fn keyword_then_punctuation() {
    assert_eq!(
        lex("if(x)"),
        [
            ("if", TokenKind::Keyword),
            ("(", TokenKind::Punctuation),
            ("x", TokenKind::PlainText),
            (")", TokenKind::Punctuation),
        ]
    );
}

#[test]
fn type_name_then_identifier() {
    assert_eq!(
        lex("Foo bar"),
        [
            ("Foo", TokenKind::TypeName),
            (" ", TokenKind::Whitespace),
            ("bar", TokenKind::PlainText),
        ]
    );
}

#[test]
fn unterminated_comment_is_one_token() {
    assert_eq!(lex("/* abc"), [("/* abc", TokenKind::Comment)]);
}

#[test]
fn arrow_is_one_punctuation_token() {
    assert_eq!(lex("->"), [("->", TokenKind::Punctuation)]);
}

#[test]
fn decimal_then_identifier() {
    assert_eq!(
        lex("123abc"),
        [("123", TokenKind::Decimal), ("abc", TokenKind::PlainText)]
    );
}

#[test]
fn ruby_snippet() {
    let source = "def greet(name)\n  puts \"hi #{name}\" unless name.nil?\nend\n";
    let kinds: Vec<TokenKind> = tokenize(source.as_bytes()).map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Keyword,     // def
            TokenKind::Whitespace,
            TokenKind::PlainText,   // greet
            TokenKind::Punctuation, // (
            TokenKind::PlainText,   // name
            TokenKind::Punctuation, // )
            TokenKind::Whitespace,
            TokenKind::PlainText,   // puts
            TokenKind::Whitespace,
            TokenKind::String,      // "hi #{name}"
            TokenKind::Whitespace,
            TokenKind::Keyword,     // unless
            TokenKind::Whitespace,
            TokenKind::PlainText,   // name
            TokenKind::Punctuation, // .
            TokenKind::Keyword,     // nil
            TokenKind::Punctuation, // ?
            TokenKind::Whitespace,
            TokenKind::Keyword,     // end
            TokenKind::Whitespace,
        ]
    );
}

#[test]
fn python_comment_and_none() {
    assert_eq!(
        lex("x = None  # unset\n"),
        [
            ("x", TokenKind::PlainText),
            (" ", TokenKind::Whitespace),
            ("=", TokenKind::Punctuation),
            (" ", TokenKind::Whitespace),
            ("None", TokenKind::Keyword),
            ("  ", TokenKind::Whitespace),
            ("# unset\n", TokenKind::Comment),
        ]
    );
}

#[test]
fn streaming_and_in_memory_agree() {
    let source = "package main\n\nimport \"fmt\"\n\n/* entry */\nfunc main() { fmt.Println(42) }\n";
    let expected: Vec<(TokenKind, Vec<u8>)> = tokenize(source.as_bytes())
        .map(|t| (t.kind(), t.bytes().to_vec()))
        .collect();
    let streamed = StreamScanner::with_capacity(Cursor::new(source), KeywordSet::shared(), 3)
        .collect_tokens()
        .unwrap();
    assert_eq!(streamed, expected);
}

#[test]
fn independent_tokenizers_run_in_parallel() {
    let sources = ["while (i < 10) i++;", "class A < B; end", "let s = 'x';"];
    let expected: Vec<Vec<TokenKind>> = sources
        .iter()
        .map(|s| tokenize(s.as_bytes()).map(|t| t.kind()).collect())
        .collect();

    let results: Vec<Vec<TokenKind>> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|s| {
                scope.spawn(move || {
                    tokenize(s.as_bytes())
                        .map(|t| t.kind())
                        .collect::<Vec<TokenKind>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}
