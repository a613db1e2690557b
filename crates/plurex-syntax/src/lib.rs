//! Syntax layer for gettext `Plural-Forms` expressions.
//!
//! A plural expression is a small C-like formula over the single variable `n`:
//!
//! ```text
//! expression     := ternary
//! ternary        := logical_or ( '?' expression ':' expression )?
//! logical_or     := logical_and ( '||' logical_and )*
//! logical_and    := equality ( '&&' equality )*
//! equality       := relational ( ('==' | '!=') relational )?
//! relational     := additive ( ('>' | '>=' | '<' | '<=') additive )?
//! additive       := multiplicative ( ('+' | '-') multiplicative )*
//! multiplicative := unary ( ('*' | '/' | '%') unary )*
//! unary          := '!'? primary
//! primary        := 'n' | NUMBER | '(' expression ')'
//! ```
//!
//! This crate is shared by the runtime evaluator (`plurex`) and the
//! compile-time code generator (`plurex-macros`) so that both read exactly
//! the same grammar.

pub mod ast;
pub mod error;
mod lexer;
mod parser;
pub mod token;

pub use ast::{Arithmetic, Compare, Expression, Logic, Primary, Ternary, Unary};
pub use error::{CompileError, LexError, ParseError};
pub use lexer::lex;
pub use parser::{MAX_NESTING, parse};
pub use token::{ArithOp, CompareOp, LogicOp, Token, TokenKind};

/// Lex and parse `source` into an expression tree.
///
/// Whitespace between tokens is ignored, so `"n==1?0:1"` and
/// `"n == 1 ? 0 : 1"` produce the same tree.
///
/// # Example
///
/// ```
/// let expr = plurex_syntax::compile("n==1?0:1").unwrap();
/// assert_eq!(expr.to_string(), "n == 1 ? 0 : 1");
/// ```
pub fn compile(source: &str) -> Result<Expression, CompileError> {
    let tokens = lex(source)?;
    Ok(parse(&tokens)?)
}
