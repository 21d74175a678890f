use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// On success the current token is the last token of the statement,
/// including its semicolon when there is one.
pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.get_stmt_handler(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_semicolon();

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_let_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier::new(parser.current_token().literal.clone());

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_semicolon();

    Ok(Stmt::Let(LetStmt { name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_semicolon();

    Ok(Stmt::Return(ReturnStmt { value }))
}

/// Parses `{ ... }` with the current token on the opening brace, leaving
/// the current token on the closing brace.
///
/// Statements that fail inside the block are recorded on the parser and
/// skipped; only a missing closing brace or a fatal error fails the block
/// itself.
pub fn parse_block_stmt(parser: &mut Parser<'_>) -> Result<BlockStmt, Error> {
    let depth = parser.nesting_depth();
    let block = parse_block_body(parser);
    parser.restore_nesting(depth);

    block
}

fn parse_block_body(parser: &mut Parser<'_>) -> Result<BlockStmt, Error> {
    parser.enter_nesting()?;
    parser.advance();

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) if error.is_fatal() => return Err(error),
            Err(error) => parser.record_error(error),
        }
        parser.advance();
    }

    if parser.current_token_kind() != TokenKind::CloseCurly {
        return Err(Error::new(ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: parser.current_token_kind(),
        }));
    }

    Ok(BlockStmt { statements })
}
