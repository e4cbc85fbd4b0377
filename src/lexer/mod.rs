//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization, one character of lookahead
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Unrecognised characters, surfaced as `Illegal` tokens rather than errors

pub mod lexer;
pub mod tokens;
