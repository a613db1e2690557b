//! Lex and parse error types.

use thiserror::Error;

/// An error that occurred while splitting source text into tokens.
///
/// Offsets are byte positions into the lexed source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("at column [{start}:{end}] unexpected '{ch}'")]
    UnexpectedChar { ch: char, start: usize, end: usize },

    /// A lone `=`, `&` or `|` that is not doubled.
    #[error("at column [{start}:{end}]: expected '{expected}'")]
    UnpairedOperator {
        expected: &'static str,
        start: usize,
        end: usize,
    },
}

impl LexError {
    /// Byte range of the offending input.
    pub fn span(&self) -> (usize, usize) {
        match self {
            LexError::UnexpectedChar { start, end, .. }
            | LexError::UnpairedOperator { start, end, .. } => (*start, *end),
        }
    }
}

/// An error that occurred while building an expression tree from tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source contained no tokens at all.
    #[error("empty plural expression")]
    EmptyInput,

    /// A token other than the one the grammar requires at this point.
    #[error("expected {expected}, but got {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        start: usize,
        end: usize,
    },

    /// The tokens ran out while the grammar still required one.
    #[error("expected {expected} after token {after}")]
    UnexpectedEnd {
        expected: &'static str,
        after: String,
        offset: usize,
    },

    /// Parentheses or ternaries nested deeper than [`crate::MAX_NESTING`].
    #[error("expression nested deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

impl ParseError {
    /// Byte range the error points at, if it has one.
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::UnexpectedToken { start, end, .. } => Some((*start, *end)),
            ParseError::UnexpectedEnd { offset, .. } | ParseError::TooDeep { offset, .. } => {
                Some((*offset, *offset))
            }
        }
    }
}

/// Either stage of turning source text into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
