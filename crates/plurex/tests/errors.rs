//! Error kinds and messages seen through the public entry points.

use plurex::interpreter::eval_expression;
use plurex::syntax::Logic;
use plurex::{
    ArithOp, CompileError, Error, EvalError, Expression, LexError, LogicOp, ParseError, Plural,
    PluralEvaluator,
};

const MALFORMED: &[&str] = &[
    "", "=", "&", "|", "1>!", "! == 1", "n==;n", "(n", "n ? 1", "!!n", "n 1", "n == 1 == 1",
];

#[test]
fn malformed_sources_never_evaluate() {
    let evaluator = PluralEvaluator::new();
    for source in MALFORMED {
        for n in [0, 1, 5] {
            let result = evaluator.eval(source, n);
            assert!(
                matches!(result, Err(Error::Lex(_) | Error::Parse(_))),
                "{source:?} gave {result:?}"
            );
        }
    }
}

#[test]
fn lone_operators_are_lex_errors() {
    for (source, expected) in [("n = 1", "=="), ("n & 1", "&&"), ("n | 1", "||")] {
        assert_eq!(
            Plural::compile(source),
            Err(CompileError::Lex(LexError::UnpairedOperator {
                expected,
                start: 2,
                end: 3
            }))
        );
    }
}

#[test]
fn unknown_character_is_a_lex_error() {
    assert_eq!(
        Plural::compile("n + x"),
        Err(CompileError::Lex(LexError::UnexpectedChar {
            ch: 'x',
            start: 4,
            end: 5
        }))
    );
}

#[test]
fn cached_evaluator_reports_normalized_offsets() {
    let error = plurex::eval("n = 1", 0).unwrap_err();
    assert_eq!(error.to_string(), "at column [1:2]: expected '=='");
}

#[test]
fn empty_source_is_a_parse_error() {
    assert_eq!(plurex::eval("", 3), Err(Error::Parse(ParseError::EmptyInput)));
    assert_eq!(plurex::eval(" \t ", 3), Err(Error::Parse(ParseError::EmptyInput)));
    assert_eq!(
        plurex::eval("", 3).unwrap_err().to_string(),
        "empty plural expression"
    );
}

#[test]
fn unexpected_token_names_the_token() {
    let error = Plural::compile("n ? 1 ; 2").unwrap_err();
    assert_eq!(error.to_string(), "expected `:`, but got {[6:7] SEP(;)}");
}

#[test]
fn divide_by_zero_message() {
    let error = plurex::eval("n % (n - n)", 4).unwrap_err();
    assert_eq!(
        error,
        Error::Eval(EvalError::DivideByZero {
            operator: ArithOp::Rem
        })
    );
    assert_eq!(error.to_string(), "divide by zero in `%`");
}

#[test]
fn empty_logic_chain_is_an_invariant_violation() {
    let expression = Expression::Logic(Logic {
        op: LogicOp::And,
        operands: Vec::new(),
    });
    assert!(matches!(
        eval_expression(&expression, 1),
        Err(EvalError::Invariant { .. })
    ));
}

#[test]
fn compile_errors_convert_to_matching_kind() {
    let lex = CompileError::Lex(LexError::UnexpectedChar {
        ch: '#',
        start: 0,
        end: 1,
    });
    assert!(matches!(Error::from(lex), Error::Lex(_)));
    assert_eq!(
        Error::from(CompileError::Parse(ParseError::EmptyInput)),
        Error::Parse(ParseError::EmptyInput)
    );
}
