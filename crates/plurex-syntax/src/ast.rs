//! Expression tree for plural formulas.
//!
//! One node type per grammar level. Logic and arithmetic chains are kept as
//! flat, ordered operand lists rather than nested binary nodes; evaluation
//! order and the canonical rendering both follow that order.
//!
//! The parser only creates a node when its level actually applies an
//! operator, so `n` parses to a bare [`Primary::Variable`]. Hand-built trees
//! may still contain pass-through nodes (an unnegated [`Unary`], a
//! [`Compare`] with no right side, a single-operand [`Logic`]); these render
//! and evaluate exactly like their inner expression.
//!
//! `Display` produces the canonical text: tokens separated by single spaces,
//! `!` glued to its operand, and parentheses padded as `( e )`.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::token::{ArithOp, CompareOp, LogicOp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Ternary(Ternary),
    Logic(Logic),
    Compare(Compare),
    Arithmetic(Arithmetic),
    Unary(Unary),
    Primary(Primary),
}

/// `condition ? if_true : if_false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ternary {
    pub condition: Box<Expression>,
    pub if_true: Box<Expression>,
    pub if_false: Box<Expression>,
}

/// An `&&` or `||` chain over its operands, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logic {
    pub op: LogicOp,
    pub operands: Vec<Expression>,
}

/// A single equality or relational comparison.
///
/// `right` is `None` when no comparison happened at this position. There is
/// only ever one slot: `a == b == c` has no representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compare {
    pub left: Box<Expression>,
    pub right: Option<(CompareOp, Box<Expression>)>,
}

/// An additive or multiplicative chain, folded left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arithmetic {
    pub first: Box<Expression>,
    pub rest: Vec<(ArithOp, Expression)>,
}

/// An optionally negated primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unary {
    pub not: bool,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primary {
    /// The count `n`.
    Variable,
    /// A non-negative decimal literal (see [`crate::TokenKind::Number`] for overflow).
    Literal(i64),
    /// A parenthesized sub-expression.
    Group(Box<Expression>),
}

impl Expression {
    /// Returns true if the tree mentions `n` anywhere.
    ///
    /// A formula without `n` selects the same index for every count.
    pub fn uses_variable(&self) -> bool {
        match self {
            Expression::Ternary(t) => {
                t.condition.uses_variable()
                    || t.if_true.uses_variable()
                    || t.if_false.uses_variable()
            }
            Expression::Logic(l) => l.operands.iter().any(Expression::uses_variable),
            Expression::Compare(c) => {
                c.left.uses_variable()
                    || c.right.as_ref().is_some_and(|(_, r)| r.uses_variable())
            }
            Expression::Arithmetic(a) => {
                a.first.uses_variable() || a.rest.iter().any(|(_, e)| e.uses_variable())
            }
            Expression::Unary(u) => u.operand.uses_variable(),
            Expression::Primary(Primary::Variable) => true,
            Expression::Primary(Primary::Literal(_)) => false,
            Expression::Primary(Primary::Group(inner)) => inner.uses_variable(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Expression::Ternary(t) => t.fmt(f),
            Expression::Logic(l) => l.fmt(f),
            Expression::Compare(c) => c.fmt(f),
            Expression::Arithmetic(a) => a.fmt(f),
            Expression::Unary(u) => u.fmt(f),
            Expression::Primary(p) => p.fmt(f),
        }
    }
}

impl Display for Ternary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ? {} : {}", self.condition, self.if_true, self.if_false)
    }
}

impl Display for Logic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.op)?;
            }
            operand.fmt(f)?;
        }
        Ok(())
    }
}

impl Display for Compare {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.left.fmt(f)?;
        if let Some((op, right)) = &self.right {
            write!(f, " {op} {right}")?;
        }
        Ok(())
    }
}

impl Display for Arithmetic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.first.fmt(f)?;
        for (op, operand) in &self.rest {
            write!(f, " {op} {operand}")?;
        }
        Ok(())
    }
}

impl Display for Unary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.not {
            f.write_str("!")?;
        }
        self.operand.fmt(f)
    }
}

impl Display for Primary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Primary::Variable => f.write_str("n"),
            Primary::Literal(value) => write!(f, "{value}"),
            Primary::Group(inner) => write!(f, "( {inner} )"),
        }
    }
}
