//! Token types for the fork DSL lexer.

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offset of the token's first character.
    pub offset: usize,
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Any printable, non-reserved character.
    Print(char),
    /// The exit marker `x`.
    Exit,
    /// `f(`
    ForkOpen,
    Comma,
    RParen,
    Eof,
}
