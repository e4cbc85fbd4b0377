use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A recoverable problem found while parsing.
///
/// Diagnostics carry no source position; the lexer does not track lines or
/// columns, so a message can only say what went wrong, not where.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
}

impl ParseError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ParseError::IntegerParse { .. } => "IntegerParse",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ParseError::UnexpectedToken { expected, .. } => match expected {
                TokenKind::Assignment => ErrorTip::Suggestion(String::from(
                    "a let binding needs `=` between the name and its value",
                )),
                TokenKind::Identifier => {
                    ErrorTip::Suggestion(String::from("expected a name here"))
                }
                TokenKind::CloseParen | TokenKind::CloseCurly => ErrorTip::Suggestion(format!(
                    "did you forget a closing `{}`?",
                    expected
                )),
                _ => ErrorTip::None,
            },
            ParseError::NoPrefixParseFn { kind } => match kind {
                TokenKind::Illegal => {
                    ErrorTip::Suggestion(String::from("this character is not part of the language"))
                }
                TokenKind::EOF => {
                    ErrorTip::Suggestion(String::from("the input ended in the middle of an expression"))
                }
                _ => ErrorTip::Suggestion(format!("`{}` cannot start an expression", kind)),
            },
            ParseError::IntegerParse { .. } => ErrorTip::Suggestion(String::from(
                "integer literals must fit in a signed 64-bit integer",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
