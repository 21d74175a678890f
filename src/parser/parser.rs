//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing entry points.
//! The parser pulls tokens one at a time and keeps exactly two of them in
//! view: the current token and the one after it.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest nesting of expressions and blocks the parser will descend into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Where tokens are pulled from
    tokens: Box<dyn Iterator<Item = Token> + 'a>,
    /// Set once EOF has been pulled, or the source ran dry
    exhausted: bool,
    current: Token,
    peek: Token,
    /// Open expression and block levels
    depth: usize,
    /// Syntax errors collected so far
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser reading from `tokens`, with its lookup tables
    /// registered and both lookahead slots filled.
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
        I::IntoIter: 'a,
    {
        let mut parser = Parser {
            tokens: Box::new(tokens.into_iter()),
            exhausted: false,
            current: Token::eof(),
            peek: Token::eof(),
            depth: 0,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the peek token into the current slot and pulls a fresh peek
    /// token.
    pub fn advance(&mut self) {
        let next = self.pull();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn pull(&mut self) -> Token {
        if self.exhausted {
            return Token::eof();
        }

        match self.tokens.next() {
            Some(token) => {
                if token.is(TokenKind::EOF) {
                    self.exhausted = true;
                }
                token
            }
            None => {
                self.exhausted = true;
                Token::eof()
            }
        }
    }

    /// Advances if the peek token is of the expected kind.
    ///
    /// # Returns
    ///
    /// An `UnexpectedToken` error naming both kinds if it is not; the parser
    /// does not move in that case.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek.is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            }))
        }
    }

    /// Steps over an optional trailing semicolon.
    pub fn skip_semicolon(&mut self) {
        if self.peek.is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Opens one nesting level.
    ///
    /// # Returns
    ///
    /// A fatal `NestingTooDeep` error once `MAX_NESTING_DEPTH` levels are
    /// open. The rest of the input is abandoned in that case, so the parse
    /// winds down at EOF.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.abandon();
            return Err(Error::new(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    /// Closes every level opened since `depth` was read.
    pub fn restore_nesting(&mut self, depth: usize) {
        self.depth = depth;
    }

    fn abandon(&mut self) {
        self.exhausted = true;
        self.current = Token::eof();
        self.peek = Token::eof();
    }

    pub fn has_tokens(&self) -> bool {
        !self.current.is(TokenKind::EOF)
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Binding power of `kind` in infix position.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.get_binding_power(self.peek.kind)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn record_error(&mut self, error: Error) {
        debug!(error = %error, "syntax error");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until EOF.
    ///
    /// A statement that fails records its error and is dropped; parsing
    /// resumes one token further on.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.has_tokens() {
            match parse_stmt(self) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => self.record_error(error),
            }
            self.advance();
        }

        Program { statements }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It never fails outright: the
/// returned program holds every statement that parsed, and the error list
/// describes everything that did not. A non-empty error list means the
/// program is incomplete.
pub fn parse<'a, I>(tokens: I) -> (Program, Vec<Error>)
where
    I: IntoIterator<Item = Token>,
    I::IntoIter: 'a,
{
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    (program, parser.into_errors())
}
