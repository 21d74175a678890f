//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - State-function scanning with a dispatch table per lexeme start
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Malformed input reported in-band as illegal tokens
//! - An optional threaded producer feeding tokens through a rendezvous channel

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
