//! Parser for the fork DSL.
//!
//! Recursive descent over the token stream. Fork arguments are split at the
//! first comma at their own nesting level; anything unbalanced is reported
//! with the offset of the token that gave it away.

use super::ast::*;
use super::error::DslError;
use super::token::{Token, TokenKind};

/// Deepest fork nesting accepted. Every later stage recurses once per level.
pub const MAX_NESTING: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Program, DslError> {
        let body = self.parse_seq()?;

        let t = self.peek();
        match t.kind {
            TokenKind::Eof => Ok(Program { body }),
            TokenKind::RParen => Err(DslError::syntax("')' without a matching 'f('", t.offset)),
            TokenKind::Comma => Err(DslError::syntax("',' outside of a fork", t.offset)),
            _ => Err(DslError::syntax(
                format!("unexpected token: {:?}", t.kind),
                t.offset,
            )),
        }
    }

    /// Parse statements until a `,`, `)` or end of input (not consumed).
    fn parse_seq(&mut self) -> Result<Vec<Stmt>, DslError> {
        let mut stmts = Vec::new();

        loop {
            let t = self.peek();
            match t.kind {
                TokenKind::Print(c) => {
                    self.advance();
                    stmts.push(Stmt::Print(c));
                }
                TokenKind::Exit => {
                    self.advance();
                    stmts.push(Stmt::Exit);
                }
                TokenKind::ForkOpen => {
                    let offset = t.offset;
                    self.advance();
                    stmts.push(Stmt::Fork(self.parse_fork(offset)?));
                }
                TokenKind::Comma | TokenKind::RParen | TokenKind::Eof => break,
            }
        }

        Ok(stmts)
    }

    /// Parse `parent[,child])` after the `f(` at `offset`.
    fn parse_fork(&mut self, offset: usize) -> Result<Fork, DslError> {
        if self.depth >= MAX_NESTING {
            return Err(DslError::limit(
                format!("forks nested more than {MAX_NESTING} deep"),
                offset,
            ));
        }
        self.depth += 1;
        let fork = self.parse_fork_args(offset);
        self.depth -= 1;
        fork
    }

    fn parse_fork_args(&mut self, offset: usize) -> Result<Fork, DslError> {
        let parent = self.parse_seq()?;

        let child = match self.peek().kind {
            TokenKind::Comma => {
                self.advance();
                self.parse_seq()?
            }
            _ => Vec::new(),
        };

        let t = self.peek();
        match t.kind {
            TokenKind::RParen => {
                self.advance();
                Ok(Fork {
                    parent,
                    child,
                    offset,
                })
            }
            TokenKind::Comma => Err(DslError::syntax(
                "fork takes at most two arguments",
                t.offset,
            )),
            _ => Err(DslError::syntax("unclosed fork: expected ')'", offset)),
        }
    }

    fn peek(&self) -> &Token {
        // The lexer always terminates the stream with Eof and parse_seq stops on it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }
}
