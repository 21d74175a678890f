use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::MK_TOKEN;

use super::tokens::{lookup_identifier, Token, TokenKind, OPERATOR_LOOKUP};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^[ \t\r\n]+").unwrap();
    static ref DIGITS: Regex = Regex::new(r"^[0-9]+").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[\p{Alphabetic}_][\p{Alphabetic}\p{N}_]*").unwrap();
    static ref IDENTIFIER_TAIL: Regex = Regex::new(r"^[\p{Alphabetic}\p{N}_]*").unwrap();
}

/// A lexer state. Running a state scans at most one lexeme and returns the
/// state to continue with, or `None` once production is over.
#[derive(Clone, Copy)]
pub struct StateFn(fn(&mut Lexer) -> Option<StateFn>);

/// Maps "what could start here" to the state that scans it.
pub struct StartPattern {
    starts: fn(char) -> bool,
    state: StateFn,
}

const START_PATTERNS: [StartPattern; 4] = [
    StartPattern {
        starts: is_space,
        state: StateFn(lex_whitespace),
    },
    StartPattern {
        starts: is_digit,
        state: StateFn(lex_number),
    },
    StartPattern {
        starts: is_identifier_start,
        state: StateFn(lex_identifier),
    },
    StartPattern {
        starts: is_operator,
        state: StateFn(lex_operator),
    },
];

/// Pull-based tokenizer. Each call to `next` runs states until one token has
/// been emitted; after the EOF or an illegal token it yields nothing.
pub struct Lexer {
    source: String,
    start: usize,
    pos: usize,
    state: Option<StateFn>,
    pending: Option<Token>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            start: 0,
            pos: 0,
            state: Some(StateFn(lex_any)),
            pending: None,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// True once the lexer has stopped producing tokens.
    pub fn is_finished(&self) -> bool {
        self.state.is_none() && self.pending.is_none()
    }

    fn second(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    /// Consumes the anchored match of `regex`, returning its length in bytes.
    fn accept(&mut self, regex: &Regex) -> usize {
        let len = regex.find(self.remainder()).map_or(0, |m| m.end());
        self.advance_n(len);
        len
    }

    fn lexeme(&self) -> &str {
        &self.source[self.start..self.pos]
    }

    fn emit(&mut self, kind: TokenKind) {
        let literal = self.lexeme().to_string();
        self.pending = Some(MK_TOKEN!(kind, literal));
        self.start = self.pos;
    }

    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn illegal(&mut self, reason: &str) -> Option<StateFn> {
        debug!(literal = self.lexeme(), offset = self.start, "{}", reason);
        self.emit(TokenKind::Illegal);
        None
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pending.is_none() {
            let StateFn(state) = self.state.take()?;
            self.state = state(self);
        }

        self.pending.take()
    }
}

impl FusedIterator for Lexer {}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_operator(c: char) -> bool {
    OPERATOR_LOOKUP.contains_key(&c)
}

fn lex_any(lexer: &mut Lexer) -> Option<StateFn> {
    let Some(c) = lexer.at() else {
        return Some(StateFn(lex_eof));
    };

    let state = START_PATTERNS
        .iter()
        .find(|pattern| (pattern.starts)(c))
        .map_or(StateFn(lex_unrecognised), |pattern| pattern.state);

    Some(state)
}

fn lex_whitespace(lexer: &mut Lexer) -> Option<StateFn> {
    lexer.accept(&WHITESPACE);
    lexer.ignore();
    Some(StateFn(lex_any))
}

fn lex_operator(lexer: &mut Lexer) -> Option<StateFn> {
    let Some(c) = lexer.at() else {
        return Some(StateFn(lex_eof));
    };

    let kind = match (c, lexer.second()) {
        ('=', Some('=')) => {
            lexer.advance_n(2);
            TokenKind::Equals
        }
        ('!', Some('=')) => {
            lexer.advance_n(2);
            TokenKind::NotEquals
        }
        _ => match OPERATOR_LOOKUP.get(&c) {
            Some(kind) => {
                lexer.advance_n(c.len_utf8());
                *kind
            }
            None => return Some(StateFn(lex_unrecognised)),
        },
    };

    lexer.emit(kind);
    Some(StateFn(lex_any))
}

fn lex_number(lexer: &mut Lexer) -> Option<StateFn> {
    lexer.accept(&DIGITS);

    if lexer.at().is_some_and(is_identifier_start) {
        lexer.accept(&IDENTIFIER_TAIL);
        return lexer.illegal("bad number syntax");
    }

    lexer.emit(TokenKind::Number);
    Some(StateFn(lex_any))
}

fn lex_identifier(lexer: &mut Lexer) -> Option<StateFn> {
    lexer.accept(&IDENTIFIER);
    let kind = lookup_identifier(lexer.lexeme());
    lexer.emit(kind);
    Some(StateFn(lex_any))
}

fn lex_unrecognised(lexer: &mut Lexer) -> Option<StateFn> {
    let width = lexer.at().map_or(0, char::len_utf8);
    lexer.advance_n(width);
    lexer.illegal("unrecognised character")
}

fn lex_eof(lexer: &mut Lexer) -> Option<StateFn> {
    lexer.ignore();
    lexer.emit(TokenKind::EOF);
    None
}

/// Tokenizes a whole source string.
///
/// The result ends with exactly one EOF token, unless an illegal token was
/// produced first, in which case that illegal token is last.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    Lexer::new(source).collect()
}
