use log::trace;

use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token. Kinds without a statement handler
/// start an expression statement.
///
/// On success the current token is the last token of the statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    trace!("statement at {}", parser.current_token());

    match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let token = parser.current_token().clone();

    let value;
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
        value = None;
    } else if parser.peek_is(TokenKind::CloseCurly) || parser.peek_is(TokenKind::EOF) {
        value = None;
    } else {
        parser.advance();
        value = Some(parse_expr(parser, BindingPower::Lowest)?);

        if parser.peek_is(TokenKind::Semicolon) {
            parser.advance();
        }
    }

    Ok(Statement::Return(ReturnStatement { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // optional, so `x + 1` at the end of a block still parses
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}

/// Parses `{ ... }` starting on the opening brace and stopping on the
/// closing one.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStatement, ParseError> {
    let token = parser.current_token().clone();
    parser.enter_block();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) && !parser.current_is(TokenKind::EOF) {
        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    if parser.current_is(TokenKind::EOF) {
        return Err(ParseError::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            got: TokenKind::EOF,
        });
    }

    parser.exit_block();

    Ok(BlockStatement { token, statements })
}
