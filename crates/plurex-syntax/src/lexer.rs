//! Tokenizer for plural expressions using winnow.
//!
//! Spaces and tabs between tokens are skipped. Two-character operators are
//! tried before their one-character prefixes, so `>=` never lexes as `>`
//! followed by `=`.

use winnow::ascii::digit1;
use winnow::combinator::alt;
use winnow::prelude::*;

use crate::error::LexError;
use crate::token::{ArithOp, CompareOp, LogicOp, Token, TokenKind};

/// Split `source` into tokens.
///
/// Lexing stops at the first error; no partial token list is returned.
///
/// # Example
///
/// ```
/// use plurex_syntax::{lex, TokenKind};
///
/// let tokens = lex("n != 1").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].kind, TokenKind::Number(1));
/// assert_eq!((tokens[1].start, tokens[1].end), (2, 4));
/// ```
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    let mut remaining = source;
    loop {
        remaining = remaining.trim_start_matches([' ', '\t']);
        let Some(first) = remaining.chars().next() else {
            return Ok(tokens);
        };
        let start = offset(source, remaining);
        match token_kind(&mut remaining) {
            Ok(kind) => {
                let end = offset(source, remaining);
                tokens.push(Token {
                    kind,
                    text: &source[start..end],
                    start,
                    end,
                });
            }
            Err(_) => return Err(lex_error(first, start)),
        }
    }
}

/// Byte offset of `remaining` within `original`.
fn offset(original: &str, remaining: &str) -> usize {
    original.len() - remaining.len()
}

/// Describe why no token could start with `ch`.
fn lex_error(ch: char, start: usize) -> LexError {
    let expected = match ch {
        '=' => "==",
        '&' => "&&",
        '|' => "||",
        _ => {
            return LexError::UnexpectedChar {
                ch,
                start,
                end: start + ch.len_utf8(),
            };
        }
    };
    LexError::UnpairedOperator {
        expected,
        start,
        end: start + 1,
    }
}

/// Parse exactly one token.
fn token_kind(input: &mut &str) -> ModalResult<TokenKind> {
    alt((number, paired_operator, single_operator, punctuation)).parse_next(input)
}

/// Parse a maximal run of decimal digits.
fn number(input: &mut &str) -> ModalResult<TokenKind> {
    digit1
        .map(|digits: &str| TokenKind::Number(magnitude(digits)))
        .parse_next(input)
}

/// Accumulate decimal digits into an `i64`, wrapping on overflow.
fn magnitude(digits: &str) -> i64 {
    digits.bytes().fold(0_i64, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
    })
}

/// Parse the two-character operators.
fn paired_operator(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        "==".value(TokenKind::Equality(CompareOp::Eq)),
        "!=".value(TokenKind::Equality(CompareOp::Ne)),
        "&&".value(TokenKind::Logic(LogicOp::And)),
        "||".value(TokenKind::Logic(LogicOp::Or)),
        ">=".value(TokenKind::Comparison(CompareOp::Ge)),
        "<=".value(TokenKind::Comparison(CompareOp::Le)),
    ))
    .parse_next(input)
}

/// Parse the one-character operators.
fn single_operator(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        '>'.value(TokenKind::Comparison(CompareOp::Gt)),
        '<'.value(TokenKind::Comparison(CompareOp::Lt)),
        '!'.value(TokenKind::Not),
        '+'.value(TokenKind::Additive(ArithOp::Add)),
        '-'.value(TokenKind::Additive(ArithOp::Sub)),
        '*'.value(TokenKind::Multiplicative(ArithOp::Mul)),
        '/'.value(TokenKind::Multiplicative(ArithOp::Div)),
        '%'.value(TokenKind::Multiplicative(ArithOp::Rem)),
    ))
    .parse_next(input)
}

/// Parse the variable and punctuation tokens.
fn punctuation(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        'n'.value(TokenKind::Variable),
        '?'.value(TokenKind::Question),
        ':'.value(TokenKind::Colon),
        '('.value(TokenKind::LeftParen),
        ')'.value(TokenKind::RightParen),
        ';'.value(TokenKind::Separator),
    ))
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_reads_decimal_digits() {
        assert_eq!(magnitude("0"), 0);
        assert_eq!(magnitude("007"), 7);
        assert_eq!(magnitude("1000"), 1000);
    }

    #[test]
    fn magnitude_wraps_past_i64_max() {
        assert_eq!(magnitude("9223372036854775807"), i64::MAX);
        assert_eq!(magnitude("9223372036854775808"), i64::MIN);
    }

    #[test]
    fn offset_counts_consumed_bytes() {
        let source = "n != 1";
        assert_eq!(offset(source, &source[2..]), 2);
        assert_eq!(offset(source, ""), source.len());
    }
}
