//! Lexer for the fork DSL.
//!
//! Converts source text into a stream of [`Token`]s. Whitespace is
//! insignificant and never produces a token.

use super::error::DslError;
use super::token::{Token, TokenKind};
use super::{EXIT_MARKER, FORK_CHAR};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, DslError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    offset: self.pos,
                });
                break;
            }

            let offset = self.pos;
            let ch = self.advance();

            let kind = match ch {
                FORK_CHAR if self.next_significant() == Some('(') => {
                    self.skip_whitespace();
                    self.advance(); // consume '('
                    TokenKind::ForkOpen
                }
                EXIT_MARKER => TokenKind::Exit,
                ',' => TokenKind::Comma,
                ')' => TokenKind::RParen,
                '(' => {
                    return Err(DslError::lex(
                        "'(' is only valid as part of a fork 'f('",
                        offset,
                    ));
                }
                c if c.is_control() => {
                    return Err(DslError::lex(
                        format!("unexpected control character {c:?}"),
                        offset,
                    ));
                }
                c => TokenKind::Print(c),
            };

            tokens.push(Token { kind, offset });
        }

        Ok(tokens)
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The next non-whitespace character, without consuming anything.
    fn next_significant(&self) -> Option<char> {
        self.chars[self.pos..]
            .iter()
            .copied()
            .find(|c| !c.is_whitespace())
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
    }
}
