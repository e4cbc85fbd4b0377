//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic messages, names and tips.

use crate::errors::errors::{ErrorTip, ParseError};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_message() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Assignment,
        got: TokenKind::Int,
    };

    assert_eq!(error.to_string(), "expected next token to be =, got INT instead");
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = ParseError::NoPrefixParseFn {
        kind: TokenKind::Semicolon,
    };

    assert_eq!(error.to_string(), "no prefix parse function for ; found");
    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
}

#[test]
fn test_integer_parse_message() {
    let error = ParseError::IntegerParse {
        literal: "99999999999999999999".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
    assert_eq!(error.get_error_name(), "IntegerParse");
}

#[test]
fn test_error_tip_suggestion() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::CloseParen,
        got: TokenKind::EOF,
    };

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "did you forget a closing `)`?"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_none() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::OpenParen,
        got: TokenKind::Identifier,
    };

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_illegal_token_tip() {
    let error = ParseError::NoPrefixParseFn {
        kind: TokenKind::Illegal,
    };

    assert_eq!(
        error.get_tip().to_string(),
        "this character is not part of the language"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
