//! Tree-walking evaluation of plural expressions.
//!
//! Results follow C conventions: comparisons and logic chains yield `0` or
//! `1`, and any nonzero value counts as true. Operands are evaluated left to
//! right and the first error aborts the rest of the walk.
//!
//! Arithmetic is wrapping `i64` arithmetic. Overflow is not reported; it
//! wraps in two's complement, the same way literal magnitudes do in the lexer.

use plurex_syntax::{
    ArithOp, Arithmetic, Compare, CompareOp, Expression, Logic, LogicOp, Primary, Ternary, Unary,
};

use crate::interpreter::EvalError;

pub const FALSE: i64 = 0;
pub const TRUE: i64 = 1;

/// Evaluate an expression tree for the count `n`.
///
/// Untaken ternary branches and short-circuited logic operands are never
/// evaluated, so a division by zero inside them does not surface.
///
/// # Errors
///
/// Returns an error if:
/// - `/` or `%` is applied to a zero right operand
/// - the tree contains a logic chain with no operands
pub fn eval_expression(expression: &Expression, n: i64) -> Result<i64, EvalError> {
    match expression {
        Expression::Ternary(ternary) => eval_ternary(ternary, n),
        Expression::Logic(logic) => eval_logic(logic, n),
        Expression::Compare(compare) => eval_compare(compare, n),
        Expression::Arithmetic(arithmetic) => eval_arithmetic(arithmetic, n),
        Expression::Unary(unary) => eval_unary(unary, n),
        Expression::Primary(primary) => eval_primary(primary, n),
    }
}

fn eval_ternary(ternary: &Ternary, n: i64) -> Result<i64, EvalError> {
    if truthy(eval_expression(&ternary.condition, n)?) {
        eval_expression(&ternary.if_true, n)
    } else {
        eval_expression(&ternary.if_false, n)
    }
}

/// A lone operand keeps its raw value; the result is only forced to `0`/`1`
/// once an operator has actually combined two operands.
fn eval_logic(logic: &Logic, n: i64) -> Result<i64, EvalError> {
    let Some((first, rest)) = logic.operands.split_first() else {
        return Err(EvalError::Invariant {
            message: format!("`{}` chain has no operands", logic.op),
        });
    };
    let mut value = eval_expression(first, n)?;
    for operand in rest {
        match logic.op {
            LogicOp::And if !truthy(value) => return Ok(FALSE),
            LogicOp::Or if truthy(value) => return Ok(TRUE),
            LogicOp::And | LogicOp::Or => value = from_bool(truthy(eval_expression(operand, n)?)),
        }
    }
    Ok(value)
}

fn eval_compare(compare: &Compare, n: i64) -> Result<i64, EvalError> {
    let left = eval_expression(&compare.left, n)?;
    match &compare.right {
        Some((op, right)) => Ok(self::compare(*op, left, eval_expression(right, n)?)),
        None => Ok(left),
    }
}

fn eval_arithmetic(arithmetic: &Arithmetic, n: i64) -> Result<i64, EvalError> {
    let mut value = eval_expression(&arithmetic.first, n)?;
    for (op, operand) in &arithmetic.rest {
        value = self::arithmetic(*op, value, eval_expression(operand, n)?)?;
    }
    Ok(value)
}

fn eval_unary(unary: &Unary, n: i64) -> Result<i64, EvalError> {
    let value = eval_expression(&unary.operand, n)?;
    Ok(if unary.not { not(value) } else { value })
}

fn eval_primary(primary: &Primary, n: i64) -> Result<i64, EvalError> {
    match primary {
        Primary::Variable => Ok(n),
        Primary::Literal(value) => Ok(*value),
        Primary::Group(inner) => eval_expression(inner, n),
    }
}

// =============================================================================
// Operators
//
// Shared with code generated by `plural_fn!`.
// =============================================================================

/// Nonzero is true.
pub fn truthy(value: i64) -> bool {
    value != FALSE
}

pub fn from_bool(value: bool) -> i64 {
    if value { TRUE } else { FALSE }
}

/// Logical `!`.
pub fn not(value: i64) -> i64 {
    from_bool(!truthy(value))
}

/// Apply a comparison, yielding `0` or `1`.
pub fn compare(op: CompareOp, left: i64, right: i64) -> i64 {
    from_bool(match op {
        CompareOp::Eq => left == right,
        CompareOp::Ne => left != right,
        CompareOp::Gt => left > right,
        CompareOp::Ge => left >= right,
        CompareOp::Lt => left < right,
        CompareOp::Le => left <= right,
    })
}

/// Apply an arithmetic operator with wrapping semantics.
///
/// Division truncates toward zero and `%` takes the sign of the left operand.
pub fn arithmetic(op: ArithOp, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        ArithOp::Add => Ok(left.wrapping_add(right)),
        ArithOp::Sub => Ok(left.wrapping_sub(right)),
        ArithOp::Mul => Ok(left.wrapping_mul(right)),
        ArithOp::Div | ArithOp::Rem if right == 0 => Err(EvalError::DivideByZero { operator: op }),
        ArithOp::Div => Ok(left.wrapping_div(right)),
        ArithOp::Rem => Ok(left.wrapping_rem(right)),
    }
}
