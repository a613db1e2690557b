//! Evaluation of gettext `Plural-Forms` expressions.
//!
//! A PO catalog selects between translated forms with a C-like formula over
//! the count `n`, for example `n % 10 == 1 && n % 100 != 11 ? 0 : 1`. This
//! crate compiles such formulas, evaluates them, caches compiled trees, and
//! short-circuits the standard per-language rules to precompiled functions.
//!
//! ```
//! assert_eq!(plurex::eval("n != 1", 0), Ok(1));
//! assert_eq!(plurex::eval("n != 1", 1), Ok(0));
//!
//! let plural = plurex::compile("n==1?0:1").unwrap();
//! assert_eq!(plural.to_string(), "n == 1 ? 0 : 1");
//! ```

// Lets `plural_fn!` expansions inside this crate name `::plurex`.
extern crate self as plurex;

pub mod commons;
mod global;
mod header;
pub mod interpreter;

pub use global::{compile, default_evaluator, eval};
pub use header::PluralForms;
pub use interpreter::{Error, EvalError, HeaderError, Plural, PluralEvaluator};
pub use plurex_macros::plural_fn;
pub use plurex_syntax as syntax;
pub use plurex_syntax::{ArithOp, CompareOp, CompileError, Expression, LexError, LogicOp, ParseError};

#[doc(hidden)]
pub mod __private {
    pub use crate::interpreter::evaluator::{arithmetic, compare, from_bool, not, truthy};
}
