//! Unit tests for AST rendering and token reporting.

use crate::{lexer::tokens::TokenKind, MK_TOKEN};

use super::{
    ast::{Expression, Node, Program, Statement},
    expressions::{Boolean, CallExpression, Identifier, InfixExpression, IntegerLiteral},
    statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
};

fn ident(name: &str) -> Identifier {
    Identifier {
        token: MK_TOKEN!(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

#[test]
fn test_program_string() {
    let program = Program {
        statements: vec![Statement::Let(LetStatement {
            token: MK_TOKEN!(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Expression::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.token_literal(), "");
}

#[test]
fn test_return_statement_string() {
    let with_value = ReturnStatement {
        token: MK_TOKEN!(TokenKind::Return, "return"),
        value: Some(Expression::Integer(IntegerLiteral {
            token: MK_TOKEN!(TokenKind::Int, "5"),
            value: 5,
        })),
    };
    let bare = ReturnStatement {
        token: MK_TOKEN!(TokenKind::Return, "return"),
        value: None,
    };

    assert_eq!(with_value.to_string(), "return 5;");
    assert_eq!(bare.to_string(), "return;");
}

#[test]
fn test_infix_and_call_string() {
    let sum = Expression::Infix(InfixExpression {
        token: MK_TOKEN!(TokenKind::Plus, "+"),
        left: Box::new(Expression::Identifier(ident("a"))),
        operator: "+".to_string(),
        right: Box::new(Expression::Boolean(Boolean {
            token: MK_TOKEN!(TokenKind::True, "true"),
            value: true,
        })),
    });
    let call = Expression::Call(CallExpression {
        token: MK_TOKEN!(TokenKind::OpenParen, "("),
        function: Box::new(Expression::Identifier(ident("f"))),
        arguments: vec![sum.clone(), Expression::Identifier(ident("b"))],
    });

    assert_eq!(sum.to_string(), "(a + true)");
    assert_eq!(sum.token_literal(), "+");
    assert_eq!(call.to_string(), "f((a + true), b)");
    assert_eq!(call.token_literal(), "(");
}

#[test]
fn test_block_statement_separates_statements() {
    let block = BlockStatement {
        token: MK_TOKEN!(TokenKind::OpenCurly, "{"),
        statements: vec![
            Statement::Expression(ExpressionStatement {
                token: MK_TOKEN!(TokenKind::Identifier, "x"),
                expression: Expression::Identifier(ident("x")),
            }),
            Statement::Expression(ExpressionStatement {
                token: MK_TOKEN!(TokenKind::Identifier, "y"),
                expression: Expression::Identifier(ident("y")),
            }),
        ],
    };

    assert_eq!(block.to_string(), "x; y");
    assert_eq!(block.token_literal(), "{");
    assert_eq!(block.iter().count(), 2);
}
