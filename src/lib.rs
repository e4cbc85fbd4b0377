#![allow(clippy::module_inception)]

//! Front end for the Monkey language: a pull lexer and a Pratt parser that
//! turn source text into a typed AST plus a list of diagnostics.
//!
//! ```
//! use monkey::parser::parser::parse;
//!
//! let (program, errors) = parse("let x = 1 + 2 * 3;");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
