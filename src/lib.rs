#![allow(clippy::module_inception)]

use tracing::{debug, instrument};

use crate::{
    ast::ast::Program,
    config::{Config, LexMode},
    errors::errors::Error,
    lexer::{lexer::Lexer, stream::spawn_lexer},
    parser::parser::parse,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Tokenizes and parses `source` in one go.
///
/// The returned program holds every statement that parsed; the error list
/// holds one entry per statement that did not.
#[instrument(skip_all, fields(source = %config.source_name()))]
pub fn parse_source(source: &str, config: &Config) -> (Program, Vec<Error>) {
    let (program, errors) = match config.lex_mode {
        LexMode::Inline => parse(Lexer::new(source)),
        LexMode::Threaded => parse(spawn_lexer(source)),
    };

    debug!(
        statements = program.len(),
        errors = errors.len(),
        "parsed source"
    );

    (program, errors)
}
