//! Process-wide default evaluator.
//!
//! The free functions [`eval`] and [`compile`] go through one shared
//! [`PluralEvaluator`] created on first use. Its cache lives, and grows, for
//! the rest of the process. Construct your own `PluralEvaluator` to control
//! the cache lifetime instead.

use std::sync::LazyLock;

use plurex_syntax::CompileError;

use crate::interpreter::{Error, Plural, PluralEvaluator};

static DEFAULT_EVALUATOR: LazyLock<PluralEvaluator> = LazyLock::new(PluralEvaluator::new);

/// The shared evaluator behind [`eval`].
pub fn default_evaluator() -> &'static PluralEvaluator {
    &DEFAULT_EVALUATOR
}

/// Select the plural index for `n` using the expression in `source`.
///
/// # Example
///
/// ```
/// let rule = "n % 10 == 1 && n % 100 != 11 ? 0 : n != 0 ? 1 : 2";
/// assert_eq!(plurex::eval(rule, 21), Ok(0));
/// assert_eq!(plurex::eval(rule, 0), Ok(2));
/// assert!(plurex::eval("n / 0", 1).is_err());
/// ```
pub fn eval(source: &str, n: i64) -> Result<i64, Error> {
    DEFAULT_EVALUATOR.eval(source, n)
}

/// Compile `source` into a reusable [`Plural`] without caching it.
pub fn compile(source: &str) -> Result<Plural, CompileError> {
    Plural::compile(source)
}
