//! Tokens produced by the lexer and the operator tags they carry.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Logical connective joining two or more operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOp {
    /// `&&`
    And,
    /// `||`
    Or,
}

impl LogicOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicOp::And => "&&",
            LogicOp::Or => "||",
        }
    }
}

/// Equality (`==`, `!=`) and relational (`>`, `>=`, `<`, `<=`) operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
        }
    }
}

/// Additive (`+`, `-`) and multiplicative (`*`, `/`, `%`) operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
        }
    }
}

impl Display for LogicOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Display for CompareOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Display for ArithOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// The kind of a lexed token.
///
/// End of input is not a token: the lexer simply stops, and the parser treats
/// an exhausted slice as the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of decimal digits and its magnitude.
    ///
    /// The magnitude is accumulated with wrapping `i64` arithmetic, so a
    /// literal above `i64::MAX` wraps around instead of being rejected.
    Number(i64),
    /// `==` or `!=`
    Equality(CompareOp),
    /// `&&` or `||`
    Logic(LogicOp),
    /// `!` not followed by `=`
    Not,
    /// `>`, `>=`, `<` or `<=`
    Comparison(CompareOp),
    /// `*`, `/` or `%`
    Multiplicative(ArithOp),
    /// `+` or `-`
    Additive(ArithOp),
    /// `n`
    Variable,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    Separator,
}

impl TokenKind {
    /// Short uppercase tag used when printing tokens in error messages.
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUM",
            TokenKind::Equality(_) => "EQU",
            TokenKind::Logic(_) | TokenKind::Not => "LGC",
            TokenKind::Comparison(_) => "CMP",
            TokenKind::Multiplicative(_) => "MUL",
            TokenKind::Additive(_) => "ADD",
            TokenKind::Variable => "IDN",
            TokenKind::Question => "QST",
            TokenKind::Colon => "COL",
            TokenKind::LeftParen => "LPA",
            TokenKind::RightParen => "RPA",
            TokenKind::Separator => "SEP",
        }
    }
}

/// A token borrowed from the source it was lexed from.
///
/// `start` and `end` are byte offsets into that source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
    pub start: usize,
    pub end: usize,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            TokenKind::Number(value) => {
                write!(f, "{{[{}:{}] NUM({})}}", self.start, self.end, value)
            }
            kind => write!(
                f,
                "{{[{}:{}] {}({})}}",
                self.start,
                self.end,
                kind.tag(),
                self.text
            ),
        }
    }
}
