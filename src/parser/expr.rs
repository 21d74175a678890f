use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression starting at the current token.
///
/// On success the current token is the last token of the expression.
pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Result<Expr, Error> {
    let depth = parser.nesting_depth();
    let expr = parse_expr_levels(parser, bp);
    parser.restore_nesting(depth);

    expr
}

// Every operand and every operator applied to the left side opens a level,
// which bounds the height of the tree being built.
fn parse_expr_levels(parser: &mut Parser<'_>, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_handler(token_kind) else {
        if token_kind == TokenKind::Illegal {
            return Err(Error::new(ErrorImpl::IllegalToken {
                literal: parser.current_token().literal.clone(),
            }));
        }
        return Err(Error::new(ErrorImpl::NoPrefixParseFn { kind: token_kind }));
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than bp, it takes lhs as its left operand
    while bp < parser.peek_binding_power() {
        let Some(led_fn) = parser.get_led_handler(parser.peek_token_kind()) else {
            break;
        };

        parser.enter_nesting()?;
        parser.advance();
        let operator_bp = parser.get_binding_power(parser.current_token_kind());
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let token = parser.current_token();

    match token.kind {
        TokenKind::Number => match token.literal.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(IntegerLiteral { value })),
            Err(_) => Err(Error::new(ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            })),
        },
        TokenKind::Identifier => Ok(Expr::Identifier(Identifier::new(token.literal.clone()))),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanLiteral {
            value: token.is(TokenKind::True),
        })),
        kind => Err(Error::new(ErrorImpl::NoPrefixParseFn { kind })),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let operator = parser.current_token().literal.clone();
    parser.advance();

    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = parser.current_token().literal.clone();
    parser.advance();

    // Same bp on the right keeps equal-precedence operators left associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_literal_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.expect_peek(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parameters.push(parse_parameter(parser)?);
        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parameters.push(parse_parameter(parser)?);
        }
        parser.expect_peek(TokenKind::CloseParen)?;
    }

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionLiteral { parameters, body }))
}

fn parse_parameter(parser: &mut Parser<'_>) -> Result<Identifier, Error> {
    parser.expect_peek(TokenKind::Identifier)?;
    Ok(Identifier::new(parser.current_token().literal.clone()))
}

pub fn parse_call_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    // Arguments are delimited, so each one starts over at Lowest
    let mut arguments = Vec::new();

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);
        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Lowest)?);
        }
        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(Expr::Call(CallExpr {
        callee: Box::new(left),
        arguments,
    }))
}
