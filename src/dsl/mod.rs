//! Fork DSL — source text → tokens → AST.
//!
//! Grammar:
//! - `f(A,B)` forks: the caller continues with `A`, the new child runs `B`,
//!   then both run whatever follows the closing `)`. `f(A)` is `f(A,)`.
//! - `x` is the exit marker; the process executing it stops.
//! - `(`, `)` and `,` are structural; any other character is printed.
//! - Whitespace is ignored.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod transpile;

pub use ast::*;
pub use error::{DslError, ErrorKind};
pub use parser::MAX_NESTING;
pub use transpile::{transpile, transpile_to_string, TranspileOptions};

use lexer::Lexer;
use parser::Parser;

/// First character of the fork opening token `f(`.
pub const FORK_CHAR: char = 'f';

/// The reserved exit marker.
pub const EXIT_MARKER: char = 'x';

/// Entry point for reading fork programs.
pub struct Dsl;

impl Dsl {
    /// Parse DSL source into a Program AST.
    pub fn parse(source: &str) -> Result<Program, DslError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        let mut parser = Parser::new(tokens);
        let program = parser.parse()?;
        log::trace!(
            "parsed {:?}: {} forks, {} prints",
            source,
            program.fork_count(),
            program.print_count()
        );
        Ok(program)
    }
}
