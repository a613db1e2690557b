//! Plural expression interpreter.
//!
//! This module evaluates compiled expression trees, wraps them in the
//! shareable [`Plural`] handle, and provides [`PluralEvaluator`], which adds
//! a compile cache and the common-rule shortcut in front of the parser.

mod cache;
mod error;
pub(crate) mod evaluator;
mod plural;

pub use cache::{PluralEvaluator, normalize};
pub use error::{Error, EvalError, HeaderError};
pub use evaluator::eval_expression;
pub use plural::Plural;
