use log::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull lexer over a single source buffer.
///
/// `ch` holds the byte at `position`, or `0` once `read_position` has run
/// past the end of the input. Non-ASCII characters are never split: they
/// are consumed whole and surface as a single `Illegal` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Produces the next token. Once the input is exhausted every call
    /// returns `EOF` with an empty literal.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, "");
        }

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::Equals, "==")
                } else {
                    MK_TOKEN!(TokenKind::Assignment, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::NotEquals, "!=")
                } else {
                    MK_TOKEN!(TokenKind::Not, "!")
                }
            }
            b'+' => MK_TOKEN!(TokenKind::Plus, "+"),
            b'-' => MK_TOKEN!(TokenKind::Dash, "-"),
            b'*' => MK_TOKEN!(TokenKind::Star, "*"),
            b'/' => MK_TOKEN!(TokenKind::Slash, "/"),
            b'<' => MK_TOKEN!(TokenKind::Less, "<"),
            b'>' => MK_TOKEN!(TokenKind::Greater, ">"),
            b',' => MK_TOKEN!(TokenKind::Comma, ","),
            b';' => MK_TOKEN!(TokenKind::Semicolon, ";"),
            b'(' => MK_TOKEN!(TokenKind::OpenParen, "("),
            b')' => MK_TOKEN!(TokenKind::CloseParen, ")"),
            b'{' => MK_TOKEN!(TokenKind::OpenCurly, "{"),
            b'}' => MK_TOKEN!(TokenKind::CloseCurly, "}"),
            ch if is_letter(ch) => {
                // read_identifier leaves the cursor past the run already
                let ident = self.read_identifier();
                let token = MK_TOKEN!(lookup_ident(&ident), ident);
                trace!("lexed {}", token);
                return token;
            }
            ch if ch.is_ascii_digit() => {
                let token = MK_TOKEN!(TokenKind::Int, self.read_number());
                trace!("lexed {}", token);
                return token;
            }
            ch if ch.is_ascii() => MK_TOKEN!(TokenKind::Illegal, (ch as char).to_string()),
            _ => self.read_illegal_char(),
        };

        self.read_char();
        trace!("lexed {}", token);
        token
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn read_char(&mut self) {
        self.ch = match self.source.as_bytes().get(self.read_position) {
            Some(byte) => *byte,
            None => 0,
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        self.source[start..self.position].to_string()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        self.source[start..self.position].to_string()
    }

    /// Consumes every byte of a multi-byte character except the last one,
    /// which the trailing `read_char` in `next_token` takes.
    fn read_illegal_char(&mut self) -> Token {
        let ch = self
            .source
            .get(self.position..)
            .and_then(|rest| rest.chars().next());

        match ch {
            Some(ch) => {
                for _ in 1..ch.len_utf8() {
                    self.read_char();
                }
                MK_TOKEN!(TokenKind::Illegal, ch.to_string())
            }
            None => MK_TOKEN!(TokenKind::Illegal, char::REPLACEMENT_CHARACTER.to_string()),
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Drains a fresh lexer over `source`, including the final `EOF` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
