// A two-form rule expands to a callable function pointer.
use plurex::{EvalError, plural_fn};

fn main() {
    let english: fn(i64) -> Result<i64, EvalError> = plural_fn!("n != 1");
    assert_eq!(english(0), Ok(1));
    assert_eq!(english(1), Ok(0));
    assert_eq!(english(2), Ok(1));
}
