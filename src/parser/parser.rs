//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from its own lexer and always holds exactly two
//! of them: the token under examination and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Diagnostics are collected rather than returned early: a failed statement
//! is recorded, the parser skips past the rest of that top-level statement,
//! and parsing resumes.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, owned for the lifetime of the parse
    lexer: Lexer,
    /// The token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<ParseError>,
    /// Blocks entered and not yet closed
    block_depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `lexer` with both token slots filled and all
    /// lookup tables registered.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            block_depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the lookahead into the current slot and pulls a fresh token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances only if the lookahead has the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error naming the
    /// expected and actual kinds. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: expected_kind,
                got: self.peek.kind,
            })
        }
    }

    /// Records that the current `{` opens a block.
    pub fn enter_block(&mut self) {
        self.block_depth += 1;
    }

    /// Records that the current `}` closed a block.
    pub fn exit_block(&mut self) {
        self.block_depth = self.block_depth.saturating_sub(1);
    }

    /// Binding power of the lookahead, `Lowest` for tokens with no infix role.
    pub fn peek_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.peek.kind)
            .unwrap_or(&BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix roles carry no binding power of their own, so a kind that is
    /// both prefix and infix (`-`, `(`) keeps its infix precedence.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Diagnostics recorded so far. Empty means a clean parse.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, handing back its diagnostics.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses statements until the end of input.
    pub fn parse_program(&mut self) -> Program {
        debug!("parsing program");

        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!("recording diagnostic: {}", error);
                    self.errors.push(error);
                    self.synchronize();
                }
            }
            self.advance();
        }

        debug!(
            "parsed {} statement(s) with {} diagnostic(s)",
            program.len(),
            self.errors.len()
        );

        program
    }

    /// Skips the rest of a failed top-level statement.
    ///
    /// Stops on the `;` that ends it, on the `}` (and a trailing `;`) that
    /// closes the block the error happened in, or just before a `let` or
    /// `return` at top level. Braces are counted from the depth the parser
    /// was at when the error was raised, so statements inside a broken
    /// function body never leak to the top level.
    fn synchronize(&mut self) {
        let mut depth = std::mem::take(&mut self.block_depth);

        loop {
            match self.current_token_kind() {
                TokenKind::EOF => return,
                TokenKind::Semicolon if depth == 0 => return,
                TokenKind::OpenCurly => depth += 1,
                TokenKind::CloseCurly => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if self.peek_is(TokenKind::Semicolon) {
                            self.advance();
                        }
                        return;
                    }
                }
                _ => {}
            }

            if depth == 0 && (self.peek_is(TokenKind::Let) || self.peek_is(TokenKind::Return)) {
                return;
            }
            self.advance();
        }
    }
}

/// Parses source text into a program and the diagnostics found on the way.
///
/// This is the main entry point. The returned program may be partial when
/// the diagnostics are non-empty and should not be evaluated in that case.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
