//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation, including two character operators
//! - Illegal input
//! - Laziness and the threaded token stream

use super::{
    lexer::{tokenize, Lexer},
    stream::spawn_lexer,
    tokens::{lookup_identifier, Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].literal, "five");
    assert_eq!(tokens[3].literal, "5");
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
	return true;
} else {
	return false;
}

10 == 10;
10 != 9;
";

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Number, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Number, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Number, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Number, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Number, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Number, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Number, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Number, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Number, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Number, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Number, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Number, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let tokens = tokenize(source);
    assert_eq!(tokens.len(), expected.len());

    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Fn,
            TokenKind::Let,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase letter iffy résumé");

    let identifiers: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Identifier)
        .map(|token| token.literal.as_str())
        .collect();

    assert_eq!(
        identifiers,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "letter", "iffy", "résumé"]
    );
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("returns"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = tokenize("= == ! != =!= ===");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Assignment,
            TokenKind::NotEquals,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    let tokens = tokenize("add(1,x)*-2");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Star,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_empty_and_blank_input() {
    assert_eq!(tokenize(""), vec![Token::eof()]);
    assert_eq!(tokenize(" \t\r\n  "), vec![Token::eof()]);
}

#[test]
fn test_tokenize_bad_number() {
    let tokens = tokenize("let x = 123abc + 1;");

    assert_eq!(tokens.len(), 4);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Illegal);
    assert_eq!(last.literal, "123abc");
}

#[test]
fn test_tokenize_bad_number_alone() {
    let tokens = tokenize("123abc");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "123abc");
}

#[test]
fn test_tokenize_number_followed_by_underscore() {
    let tokens = tokenize("1_000");

    assert_eq!(kinds(&tokens), vec![TokenKind::Illegal]);
    assert_eq!(tokens[0].literal, "1_000");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let tokens = tokenize("let a = 5 @ 3;");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Illegal,
        ]
    );
    assert_eq!(tokens[4].literal, "@");
}

#[test]
fn test_tokenize_unrecognised_multibyte_character() {
    let tokens = tokenize("x → y");

    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Illegal]);
    assert_eq!(tokens[1].literal, "→");
}

#[test]
fn test_decimal_point_is_not_part_of_a_number() {
    let tokens = tokenize("12.5");

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Illegal]);
    assert_eq!(tokens[0].literal, "12");
    assert_eq!(tokens[1].literal, ".");
}

#[test]
fn test_lexer_is_lazy() {
    let mut lexer = Lexer::new("let x = 1 # never reached");

    assert_eq!(lexer.next().map(|token| token.kind), Some(TokenKind::Let));
    assert_eq!(lexer.next().map(|token| token.kind), Some(TokenKind::Identifier));
    assert!(!lexer.is_finished());
}

#[test]
fn test_lexer_stops_after_eof() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::EOF);
    assert!(lexer.is_finished());
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("foo 42 + 1x");

    assert_eq!(tokens[0].to_string(), "Identifier (foo)");
    assert_eq!(tokens[1].to_string(), "Number (42)");
    assert_eq!(tokens[2].to_string(), "Plus");
    assert_eq!(tokens[3].to_string(), "Illegal (1x)");
}

#[test]
fn test_stream_matches_inline_lexer() {
    let source = "let add = fn(a, b) { a + b; }; add(1, 2 * 3) != 7;";

    let streamed: Vec<Token> = spawn_lexer(source).collect();

    assert_eq!(streamed, tokenize(source));
}

#[test]
fn test_stream_ends_after_illegal_token() {
    let streamed: Vec<Token> = spawn_lexer("a 9z b c").collect();

    assert_eq!(kinds(&streamed), vec![TokenKind::Identifier, TokenKind::Illegal]);
}

#[test]
fn test_stream_can_be_dropped_early() {
    let mut stream = spawn_lexer("a b c d e f g h");

    assert_eq!(stream.next().unwrap().literal, "a");
    // Dropping must not hang on the blocked producer.
    drop(stream);
}
