//! Recursive-descent parser over a lexed token slice.
//!
//! Each grammar level is one method; precedence falls out of the call order.
//! Equality and relational levels accept at most one operator, so a second
//! `==` at the same level is left for the caller and ends up as a trailing
//! token error.

use crate::ast::{Arithmetic, Compare, Expression, Logic, Primary, Ternary, Unary};
use crate::error::ParseError;
use crate::token::{ArithOp, CompareOp, LogicOp, Token, TokenKind};

/// Maximum nesting of sub-expressions (parentheses and ternary branches).
///
/// Bounds the recursion depth of both parsing and evaluation.
pub const MAX_NESTING: usize = 64;

const EXPECTED_PRIMARY: &str = "`n`, a number or `(`";

/// Parse a token slice into an expression tree.
///
/// The expression may be followed by any number of `;` separators. Anything
/// else after a complete expression is an error.
pub fn parse(tokens: &[Token<'_>]) -> Result<Expression, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expression = parser.expression()?;
    while let Some(token) = parser.peek() {
        if token.kind != TokenKind::Separator {
            return Err(unexpected(token, "`;`"));
        }
        parser.advance();
    }
    Ok(expression)
}

struct Parser<'t, 's> {
    tokens: &'t [Token<'s>],
    pos: usize,
    depth: usize,
}

impl<'s> Parser<'_, 's> {
    fn peek(&self) -> Option<Token<'s>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().is_some_and(|token| token.kind == kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(unexpected(token, expected)),
            None => Err(self.unexpected_end(expected)),
        }
    }

    fn unexpected_end(&self, expected: &'static str) -> ParseError {
        let last = self.tokens.last();
        ParseError::UnexpectedEnd {
            expected,
            after: last.map(ToString::to_string).unwrap_or_default(),
            offset: last.map_or(0, |token| token.end),
        }
    }

    /// Byte offset of the next token, or of the end of the last one.
    fn offset(&self) -> usize {
        match self.peek() {
            Some(token) => token.start,
            None => self.tokens.last().map_or(0, |token| token.end),
        }
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                offset: self.offset(),
            });
        }
        self.depth += 1;
        let result = self.ternary();
        self.depth -= 1;
        result
    }

    fn ternary(&mut self) -> Result<Expression, ParseError> {
        let condition = self.logical_or()?;
        if !self.eat(TokenKind::Question) {
            return Ok(condition);
        }
        let if_true = self.expression()?;
        self.expect(TokenKind::Colon, "`:`")?;
        let if_false = self.expression()?;
        Ok(Expression::Ternary(Ternary {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }))
    }

    fn logical_or(&mut self) -> Result<Expression, ParseError> {
        self.logic_chain(LogicOp::Or, Self::logical_and)
    }

    fn logical_and(&mut self) -> Result<Expression, ParseError> {
        self.logic_chain(LogicOp::And, Self::equality)
    }

    /// Collect `operand (op operand)*` into one flat node.
    fn logic_chain(
        &mut self,
        op: LogicOp,
        operand: fn(&mut Self) -> Result<Expression, ParseError>,
    ) -> Result<Expression, ParseError> {
        let first = operand(self)?;
        if !self.eat(TokenKind::Logic(op)) {
            return Ok(first);
        }
        let mut operands = vec![first, operand(self)?];
        while self.eat(TokenKind::Logic(op)) {
            operands.push(operand(self)?);
        }
        Ok(Expression::Logic(Logic { op, operands }))
    }

    fn equality(&mut self) -> Result<Expression, ParseError> {
        let left = self.relational()?;
        match self.peek().map(|token| token.kind) {
            Some(TokenKind::Equality(op)) => {
                self.advance();
                let right = self.relational()?;
                Ok(compare(left, op, right))
            }
            _ => Ok(left),
        }
    }

    fn relational(&mut self) -> Result<Expression, ParseError> {
        let left = self.additive()?;
        match self.peek().map(|token| token.kind) {
            Some(TokenKind::Comparison(op)) => {
                self.advance();
                let right = self.additive()?;
                Ok(compare(left, op, right))
            }
            _ => Ok(left),
        }
    }

    fn additive(&mut self) -> Result<Expression, ParseError> {
        let first = self.multiplicative()?;
        let mut rest = Vec::new();
        while let Some(TokenKind::Additive(op)) = self.peek().map(|token| token.kind) {
            self.advance();
            rest.push((op, self.multiplicative()?));
        }
        Ok(arithmetic(first, rest))
    }

    fn multiplicative(&mut self) -> Result<Expression, ParseError> {
        let first = self.unary()?;
        let mut rest = Vec::new();
        while let Some(TokenKind::Multiplicative(op)) = self.peek().map(|token| token.kind) {
            self.advance();
            rest.push((op, self.unary()?));
        }
        Ok(arithmetic(first, rest))
    }

    fn unary(&mut self) -> Result<Expression, ParseError> {
        if !self.eat(TokenKind::Not) {
            return self.primary();
        }
        let operand = self.primary()?;
        Ok(Expression::Unary(Unary {
            not: true,
            operand: Box::new(operand),
        }))
    }

    fn primary(&mut self) -> Result<Expression, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected_end(EXPECTED_PRIMARY));
        };
        match token.kind {
            TokenKind::Variable => {
                self.advance();
                Ok(Expression::Primary(Primary::Variable))
            }
            TokenKind::Number(value) => {
                self.advance();
                Ok(Expression::Primary(Primary::Literal(value)))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(TokenKind::RightParen, "`)`")?;
                Ok(Expression::Primary(Primary::Group(Box::new(inner))))
            }
            _ => Err(unexpected(token, EXPECTED_PRIMARY)),
        }
    }
}

fn unexpected(token: Token<'_>, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: token.to_string(),
        start: token.start,
        end: token.end,
    }
}

fn compare(left: Expression, op: CompareOp, right: Expression) -> Expression {
    Expression::Compare(Compare {
        left: Box::new(left),
        right: Some((op, Box::new(right))),
    })
}

fn arithmetic(first: Expression, rest: Vec<(ArithOp, Expression)>) -> Expression {
    if rest.is_empty() {
        return first;
    }
    Expression::Arithmetic(Arithmetic {
        first: Box::new(first),
        rest,
    })
}
