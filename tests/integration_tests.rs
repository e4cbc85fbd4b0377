//! Integration tests for the end-to-end front end.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, checking the rendered program and the diagnostics together.

use monkey::{
    ast::ast::{Expression, Node, Program, Statement},
    errors::errors::ParseError,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
};

fn only_expression(program: &Program) -> &Expression {
    match program.statements.as_slice() {
        [Statement::Expression(stmt)] => &stmt.expression,
        other => panic!("expected a single expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_simple_program() {
    let (program, errors) = parse("let x = 42;");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 1);
    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.to_string(), "let x = 42;");
}

#[test]
fn test_parse_multi_line_program() {
    let source = r#"
let five = 5;
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
"#;
    let (program, errors) = parse(source);

    // `!-/*5` has no operand for `/`
    assert_eq!(
        errors,
        vec![ParseError::NoPrefixParseFn {
            kind: TokenKind::Slash
        }]
    );
    assert_eq!(program.len(), 8);
    assert_eq!(program.statements[2].to_string(), "let add = fn(x, y) { (x + y) };");
    assert_eq!(program.statements[3].to_string(), "let result = add(five, ten);");
    assert_eq!(program.statements[4].to_string(), "((5 < 10) > 5)");
    assert_eq!(
        program.statements[5].to_string(),
        "if (5 < 10) { return true; } else { return false; }"
    );
    assert_eq!(program.statements[7].to_string(), "(10 != 9)");
}

#[test]
fn test_parse_function_and_call() {
    let (program, errors) = parse("let add = fn(a, b) { return a + b; }; add(1, 2 * 3, 4 + 5);");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 2);

    match &program.statements[0] {
        Statement::Let(stmt) => match &stmt.value {
            Expression::Function(function) => {
                assert_eq!(function.parameters.len(), 2);
                assert_eq!(function.body.to_string(), "return (a + b);");
            }
            other => panic!("expected function literal, got {:?}", other),
        },
        other => panic!("expected let statement, got {:?}", other),
    }

    match &program.statements[1] {
        Statement::Expression(stmt) => match &stmt.expression {
            Expression::Call(call) => assert_eq!(call.arguments.len(), 3),
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_rendered_expressions_reparse_to_same_tree() {
    let sources = [
        "-a * b",
        "!-a",
        "a + b * c + d / e - f",
        "3 > 5 == false",
        "(5 + 5) * 2",
        "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
        "a * (b + c) / -d",
        "if (x < y) { x } else { y }",
        "if (flag) { let y = 1; y } else { fn() {} }",
        "if (!ok) { return; }",
        "fn(a) { a }",
        "fn(x, y) { return x + y; }",
        "add(fn(a) { a }, 1)",
        "fn(x) { x }(21)",
    ];

    for source in sources {
        let (first, errors) = parse(source);
        assert!(errors.is_empty(), "diagnostics for {:?}: {:?}", source, errors);

        let rendered = first.to_string();
        let (second, errors) = parse(&rendered);
        assert!(errors.is_empty(), "diagnostics for {:?}: {:?}", rendered, errors);

        // statement tokens differ once parentheses are added, the trees must not
        assert_eq!(only_expression(&first), only_expression(&second), "source: {:?}", source);
        assert_eq!(second.to_string(), rendered);
    }
}

#[test]
fn test_parser_over_explicit_lexer() {
    let mut parser = Parser::new(Lexer::new("let a = 1; let b 2;"));
    let program = parser.parse_program();

    assert_eq!(program.len(), 1);
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_parse_never_panics_on_garbage() {
    let sources = [
        ";;;",
        "))))",
        "let let let",
        "fn fn fn",
        "if if if",
        "else",
        "@#$%^&",
        "let x = fn(a, b { a };",
        "add(1, 2",
        "if (x) { y } else",
        "return return;",
        "ünïcödé = 1;",
    ];

    for source in sources {
        let (_, errors) = parse(source);
        assert!(!errors.is_empty(), "expected diagnostics for {:?}", source);
    }

    let (program, errors) = parse("");
    assert!(program.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_juxtaposed_expressions_are_separate_statements() {
    let (program, errors) = parse("1 2 3");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 3);
    assert_eq!(program.to_string(), "1; 2; 3");

    let (reparsed, errors) = parse(&program.to_string());
    assert!(errors.is_empty());
    assert_eq!(reparsed, program);
}

#[test]
fn test_rendered_blocks_reparse_cleanly() {
    // bodies whose statements gain parentheses keep their shape but not their first token
    let sources = [
        "fn(x, y) { x + y; }",
        "if (a > b) { a - b } else { b - a }",
        "let f = fn(n) { if (n < 2) { n } else { f(n - 1) + f(n - 2) } };",
        "fn() { 1; -2; 3 }",
    ];

    for source in sources {
        let (first, errors) = parse(source);
        assert!(errors.is_empty(), "diagnostics for {:?}: {:?}", source, errors);

        let rendered = first.to_string();
        let (second, errors) = parse(&rendered);
        assert!(errors.is_empty(), "diagnostics for {:?}: {:?}", rendered, errors);
        assert_eq!(second.len(), first.len());
        assert_eq!(second.to_string(), rendered);
    }

    let (program, _) = parse("fn(x, y) { x + y; }");
    assert_eq!(program.to_string(), "fn(x, y) { (x + y) }");
}

#[test]
fn test_empty_statements_are_errors() {
    let (program, errors) = parse(";;;");

    assert!(program.is_empty());
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| matches!(
        e,
        ParseError::NoPrefixParseFn {
            kind: TokenKind::Semicolon
        }
    )));
}

#[test]
fn test_tokenize_round_trip_of_symbols() {
    let tokens = tokenize("let x = fn(a) { !a == -1 };");
    let literals: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();

    assert_eq!(
        literals,
        vec!["let", "x", "=", "fn", "(", "a", ")", "{", "!", "a", "==", "-", "1", "}", ";", ""]
    );
}
