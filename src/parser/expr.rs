use crate::{
    ast::{
        ast::Expression,
        expressions::{
            Boolean, CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
            IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Pratt loop. Every handler leaves the parser on the last token of the
/// expression it built, so the lookahead is always the candidate operator.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, ParseError> {
    // First parse NUD
    let nud = match parser.get_nud_lookup().get(&parser.current_token_kind()) {
        Some(nud) => *nud,
        None => {
            return Err(ParseError::NoPrefixParseFn {
                kind: parser.current_token_kind(),
            })
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, keep folding into lhs.
    // Passing the operator's own bp to its rhs makes every operator left-associative.
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led) => *led,
            None => return Ok(left),
        };
        let operator_bp = parser.peek_binding_power();

        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current_token().clone();

    Ok(Expression::Identifier(Identifier {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(ParseError::IntegerParse {
            literal: token.value,
        }),
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expression, ParseError> {
    Ok(Expression::Boolean(Boolean {
        value: parser.current_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    // if (<condition>) { <consequence> } else { <alternative> }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative;
    if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        alternative = Some(parse_block_stmt(parser)?);
    } else {
        alternative = None;
    }

    Ok(Expression::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `(a, b, c)` starting on the opening parenthesis.
fn parse_fn_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, ParseError> {
    let mut parameters = Vec::new();

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    let name = parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(Identifier {
        value: name.value.clone(),
        token: name,
    });

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        let name = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            value: name.value.clone(),
            token: name,
        });
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, ParseError> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expression::Call(CallExpression {
        token,
        function: Box::new(left),
        arguments,
    }))
}

/// Comma-separated expressions up to `end`, starting on the opening delimiter.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expression>, ParseError> {
    let mut args = vec![];

    if parser.peek_is(end) {
        parser.advance();
        return Ok(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(end)?;

    Ok(args)
}
