//! Compiled plural expressions.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::Arc;

use plurex_syntax::{CompileError, Expression};

use crate::interpreter::EvalError;
use crate::interpreter::evaluator::eval_expression;

/// A compiled plural expression.
///
/// Cloning is cheap: the tree is shared and never mutated, so one `Plural`
/// can be evaluated from many threads at once.
///
/// `Display` renders the canonical form with single spaces between tokens.
///
/// # Example
///
/// ```
/// use plurex::Plural;
///
/// let plural = Plural::compile("n==1?0:1").unwrap();
/// assert_eq!(plural.to_string(), "n == 1 ? 0 : 1");
/// assert_eq!(plural.eval(1), Ok(0));
/// assert_eq!(plural.eval(4), Ok(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plural {
    expression: Arc<Expression>,
}

impl Plural {
    /// Lex and parse `source` without consulting any cache.
    pub fn compile(source: &str) -> Result<Plural, CompileError> {
        plurex_syntax::compile(source).map(Plural::from)
    }

    /// Select the plural index for the count `n`.
    pub fn eval(&self, n: i64) -> Result<i64, EvalError> {
        eval_expression(&self.expression, n)
    }

    /// The underlying expression tree.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl From<Expression> for Plural {
    fn from(expression: Expression) -> Self {
        Plural {
            expression: Arc::new(expression),
        }
    }
}

impl FromStr for Plural {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plural::compile(s)
    }
}

impl Display for Plural {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.expression.fmt(f)
    }
}
