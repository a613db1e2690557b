//! Integration tests for the plural expression lexer.

use plurex_syntax::{ArithOp, CompareOp, LexError, LogicOp, TokenKind, lex};

fn texts(source: &str) -> Vec<&str> {
    lex(source).unwrap().iter().map(|t| t.text).collect()
}

// =============================================================================
// Accepted input
// =============================================================================

#[test]
fn empty_and_blank_input_produce_no_tokens() {
    assert!(lex("").unwrap().is_empty());
    assert!(lex(" ").unwrap().is_empty());
    assert!(lex("\t \t").unwrap().is_empty());
}

#[test]
fn single_token_inputs() {
    let cases = [
        "0", "n", "==", "!=", "!", "&&", "||", ">", ">=", "<", "<=", "+", "-", "*", "/", "%",
        "?", ":", "(", ")", ";",
    ];
    for source in cases {
        assert_eq!(texts(source), vec![source], "lexing {source:?}");
    }
}

#[test]
fn numbers_take_maximal_digit_runs() {
    let tokens = lex(" 10 ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number(10));
    assert_eq!(tokens[0].text, "10");
    assert_eq!((tokens[0].start, tokens[0].end), (1, 3));

    assert_eq!(texts("100n"), vec!["100", "n"]);
}

#[test]
fn token_kinds_carry_operators() {
    let kinds: Vec<TokenKind> = lex("n%10==1&&n>=2||!n").unwrap().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Variable,
            TokenKind::Multiplicative(ArithOp::Rem),
            TokenKind::Number(10),
            TokenKind::Equality(CompareOp::Eq),
            TokenKind::Number(1),
            TokenKind::Logic(LogicOp::And),
            TokenKind::Variable,
            TokenKind::Comparison(CompareOp::Ge),
            TokenKind::Number(2),
            TokenKind::Logic(LogicOp::Or),
            TokenKind::Not,
            TokenKind::Variable,
        ]
    );
}

#[test]
fn bang_before_equals_is_inequality() {
    let tokens = lex("!=!").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Equality(CompareOp::Ne));
    assert_eq!(tokens[1].kind, TokenKind::Not);
}

#[test]
fn offsets_point_into_original_source() {
    let source = "n % 10 == 1";
    for token in lex(source).unwrap() {
        assert_eq!(&source[token.start..token.end], token.text);
    }
}

#[test]
fn token_display_shows_span_and_kind() {
    let tokens = lex("n >= 12").unwrap();
    assert_eq!(tokens[0].to_string(), "{[0:1] IDN(n)}");
    assert_eq!(tokens[1].to_string(), "{[2:4] CMP(>=)}");
    assert_eq!(tokens[2].to_string(), "{[5:7] NUM(12)}");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn lone_equals_expects_pair() {
    let err = lex("=").unwrap_err();
    assert_eq!(
        err,
        LexError::UnpairedOperator {
            expected: "==",
            start: 0,
            end: 1
        }
    );
    assert!(err.to_string().contains("expected '=='"));
}

#[test]
fn lone_ampersand_and_pipe_expect_pairs() {
    assert!(matches!(
        lex("&"),
        Err(LexError::UnpairedOperator { expected: "&&", .. })
    ));
    assert!(matches!(
        lex("n |1"),
        Err(LexError::UnpairedOperator {
            expected: "||",
            start: 2,
            end: 3
        })
    ));
}

#[test]
fn unknown_character_is_reported_with_position() {
    let err = lex("n == a").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedChar {
            ch: 'a',
            start: 5,
            end: 6
        }
    );
    assert_eq!(err.to_string(), "at column [5:6] unexpected 'a'");
}

#[test]
fn newline_is_not_whitespace() {
    assert!(matches!(
        lex("n\n"),
        Err(LexError::UnexpectedChar { ch: '\n', .. })
    ));
}

#[test]
fn multibyte_character_span_covers_whole_char() {
    let err = lex("n==é").unwrap_err();
    assert_eq!(err.span(), (3, 5));
}
