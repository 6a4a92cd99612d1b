//! Error types for the fork DSL.

use std::fmt;

/// An error that occurred while reading a fork program.
#[derive(Debug, Clone, PartialEq)]
pub struct DslError {
    pub message: String,
    /// Zero-based character offset into the source.
    pub offset: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    SyntaxError,
    LimitExceeded,
}

impl DslError {
    pub fn lex(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            kind: ErrorKind::LexError,
        }
    }

    pub fn syntax(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            kind: ErrorKind::SyntaxError,
        }
    }

    pub fn limit(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            kind: ErrorKind::LimitExceeded,
        }
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[offset {}] {:?}: {}", self.offset, self.kind, self.message)
    }
}

impl std::error::Error for DslError {}
