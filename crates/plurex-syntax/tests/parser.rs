//! Integration tests for parsing and canonical rendering.

use plurex_syntax::{
    ArithOp, CompareOp, CompileError, Expression, LexError, Logic, LogicOp, MAX_NESTING,
    ParseError, Primary, compile, lex, parse,
};

const CANONICAL: &[&str] = &[
    "0",
    "n != 1",
    "n > 1",
    "n % 10 == 1 && n % 100 != 11 ? 0 : n != 0 ? 1 : 2",
    "n == 1 ? 0 : n == 2 ? 1 : 2",
    "n == 1 ? 0 : ( n == 0 || ( n % 100 > 0 && n % 100 < 20 ) ) ? 1 : 2",
    "n % 10 == 1 && n % 100 != 11 ? 0 : n % 10 >= 2 && ( n % 100 < 10 || n % 100 >= 20 ) ? 1 : 2",
    "n % 10 == 1 && n % 100 != 11 ? 0 : n % 10 >= 2 && n % 10 <= 4 && ( n % 100 < 10 || n % 100 >= 20 ) ? 1 : 2",
    "( n == 1 ) ? 0 : ( n >= 2 && n <= 4 ) ? 1 : 2",
    "n == 1 ? 0 : n % 10 >= 2 && n % 10 <= 4 && ( n % 100 < 10 || n % 100 >= 20 ) ? 1 : 2",
    "n % 100 == 1 ? 0 : n % 100 == 2 ? 1 : n % 100 == 3 || n % 100 == 4 ? 2 : 3",
    "n == 0 ? 0 : n == 1 ? 1 : n == 2 ? 2 : n % 100 >= 3 && n % 100 <= 10 ? 3 : n % 100 >= 11 ? 4 : 5",
    "!( n == 1 )",
    "n * 2 - 3 / 1 + 4",
];

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn canonical_sources_round_trip() {
    for source in CANONICAL {
        let expr = compile(source).unwrap();
        assert_eq!(expr.to_string(), *source);
    }
}

#[test]
fn compact_sources_render_with_single_spaces() {
    for source in CANONICAL {
        let compact: String = source.chars().filter(|c| *c != ' ').collect();
        let expr = compile(&compact).unwrap();
        assert_eq!(expr.to_string(), *source, "compact form {compact:?}");
    }
    assert_eq!(compile("n==1?0:1").unwrap().to_string(), "n == 1 ? 0 : 1");
}

#[test]
fn trailing_separators_are_tolerated() {
    assert_eq!(compile("n != 1;").unwrap().to_string(), "n != 1");
    assert_eq!(compile("n != 1 ; ;").unwrap().to_string(), "n != 1");
}

// =============================================================================
// Tree shape
// =============================================================================

#[test]
fn bare_variable_is_a_primary() {
    assert_eq!(
        compile("n").unwrap(),
        Expression::Primary(Primary::Variable)
    );
}

#[test]
fn logic_chains_are_flat() {
    let expr = compile("n == 1 || n == 2 || n == 3").unwrap();
    let Expression::Logic(Logic { op, operands }) = expr else {
        panic!("expected logic node");
    };
    assert_eq!(op, LogicOp::Or);
    assert_eq!(operands.len(), 3);
}

#[test]
fn and_binds_tighter_than_or() {
    let expr = compile("n == 1 || n == 2 && n == 3").unwrap();
    let Expression::Logic(Logic { op, operands }) = expr else {
        panic!("expected logic node");
    };
    assert_eq!(op, LogicOp::Or);
    assert!(matches!(
        &operands[1],
        Expression::Logic(Logic {
            op: LogicOp::And,
            ..
        })
    ));
}

#[test]
fn arithmetic_chains_keep_operator_order() {
    let Expression::Arithmetic(arith) = compile("n + 1 - 2 + 3").unwrap() else {
        panic!("expected arithmetic node");
    };
    let ops: Vec<ArithOp> = arith.rest.iter().map(|(op, _)| *op).collect();
    assert_eq!(ops, vec![ArithOp::Add, ArithOp::Sub, ArithOp::Add]);
}

#[test]
fn ternary_nests_to_the_right() {
    let Expression::Ternary(outer) = compile("n == 1 ? 0 : n == 2 ? 1 : 2").unwrap() else {
        panic!("expected ternary");
    };
    assert!(matches!(*outer.if_false, Expression::Ternary(_)));
    assert!(matches!(*outer.if_true, Expression::Primary(Primary::Literal(0))));
}

#[test]
fn comparison_records_operator() {
    let Expression::Compare(cmp) = compile("n >= 2").unwrap() else {
        panic!("expected comparison");
    };
    let (op, right) = cmp.right.unwrap();
    assert_eq!(op, CompareOp::Ge);
    assert_eq!(*right, Expression::Primary(Primary::Literal(2)));
}

#[test]
fn uses_variable_detects_n() {
    assert!(compile("n != 1").unwrap().uses_variable());
    assert!(compile("( 1 + ( n ) )").unwrap().uses_variable());
    assert!(!compile("0").unwrap().uses_variable());
    assert!(!compile("1 ? 2 : 3").unwrap().uses_variable());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn empty_input_is_distinct() {
    assert_eq!(
        compile("").unwrap_err(),
        CompileError::Parse(ParseError::EmptyInput)
    );
    assert_eq!(parse(&[]).unwrap_err(), ParseError::EmptyInput);
    assert_eq!(
        compile("   ").unwrap_err(),
        CompileError::Parse(ParseError::EmptyInput)
    );
}

#[test]
fn malformed_inputs_are_rejected() {
    for source in ["", "=", "&", "|", "1>!", "! == 1", "n==;n", "(n", "n ? 1", "!!n", "n 1"] {
        assert!(compile(source).is_err(), "{source:?} should not compile");
    }
}

#[test]
fn lex_errors_surface_through_compile() {
    assert!(matches!(
        compile("n = 1"),
        Err(CompileError::Lex(LexError::UnpairedOperator { .. }))
    ));
}

#[test]
fn missing_operand_at_end_names_last_token() {
    let err = compile("1>!").unwrap_err();
    let CompileError::Parse(ParseError::UnexpectedEnd { expected, after, offset }) = err else {
        panic!("expected end-of-input error, got {err:?}");
    };
    assert_eq!(expected, "`n`, a number or `(`");
    assert_eq!(after, "{[2:3] LGC(!)}");
    assert_eq!(offset, 3);
}

#[test]
fn unexpected_token_names_expected_and_found() {
    let err = compile("! == 1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected `n`, a number or `(`, but got {[2:4] EQU(==)}"
    );
}

#[test]
fn chained_equality_is_a_trailing_token_error() {
    let err = compile("n == 1 == 1").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::UnexpectedToken {
            expected: "`;`",
            start: 7,
            ..
        })
    ));
}

#[test]
fn chained_comparison_inside_equality_is_allowed_once_per_level() {
    assert_eq!(
        compile("n > 1 == 1").unwrap().to_string(),
        "n > 1 == 1"
    );
    assert!(compile("n > 1 > 0").is_err());
}

#[test]
fn unclosed_group_expects_right_paren() {
    let tokens = lex("(n").unwrap();
    assert!(matches!(
        parse(&tokens),
        Err(ParseError::UnexpectedEnd { expected: "`)`", .. })
    ));
}

#[test]
fn ternary_without_colon_is_rejected() {
    assert!(matches!(
        compile("n ? 1 2"),
        Err(CompileError::Parse(ParseError::UnexpectedToken {
            expected: "`:`",
            ..
        }))
    ));
}

#[test]
fn deep_nesting_is_rejected() {
    let source = format!("{}n{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
    assert!(matches!(
        compile(&source),
        Err(CompileError::Parse(ParseError::TooDeep { .. }))
    ));

    let ok = format!("{}n{}", "(".repeat(MAX_NESTING - 2), ")".repeat(MAX_NESTING - 2));
    assert!(compile(&ok).is_ok());
}
