//! Error types for plural evaluation.

use plurex_syntax::{ArithOp, CompileError, LexError, ParseError};
use thiserror::Error;

/// An error raised while evaluating a compiled expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// `/` or `%` with a zero right operand.
    #[error("divide by zero in `{operator}`")]
    DivideByZero { operator: ArithOp },

    /// A tree shape the parser never produces, such as a logic chain with no
    /// operands.
    #[error("internal invariant violated: {message}")]
    Invariant { message: String },
}

/// An error parsing a PO `Plural-Forms` header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The header does not have the `nplurals=N; plural=EXPR` shape.
    #[error("malformed Plural-Forms header: '{header}'")]
    Malformed { header: String },

    /// `nplurals` is zero or does not fit in `usize`.
    #[error("invalid nplurals value '{value}'")]
    InvalidPluralCount { value: String },

    /// No common rule is registered for the language.
    #[error("no plural rule known for language '{language}'")]
    UnknownLanguage { language: String },

    /// The `plural=` expression does not compile.
    #[error("invalid plural expression: {0}")]
    Compile(#[from] CompileError),
}

/// Any error produced by the `plurex` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Header(#[from] HeaderError),

    /// The expression selected an index outside `0..nplurals`.
    #[error("plural index {index} is out of range for nplurals={nplurals}")]
    IndexOutOfRange { index: i64, nplurals: usize },
}

impl From<CompileError> for Error {
    fn from(error: CompileError) -> Self {
        match error {
            CompileError::Lex(e) => Error::Lex(e),
            CompileError::Parse(e) => Error::Parse(e),
        }
    }
}
