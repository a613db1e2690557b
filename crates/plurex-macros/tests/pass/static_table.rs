// Expansions are usable in static initializers.
use plurex::{EvalError, plural_fn};

static RULES: &[(&str, fn(i64) -> Result<i64, EvalError>)] = &[
    ("0", plural_fn!("0")),
    ("n > 1", plural_fn!("n > 1")),
    ("n == 1 ? 0 : n == 2 ? 1 : 2", plural_fn!("n == 1 ? 0 : n == 2 ? 1 : 2")),
];

fn main() {
    for (source, rule) in RULES {
        for n in 0..10 {
            assert_eq!(rule(n), plurex::compile(source).unwrap().eval(n));
        }
    }
}
