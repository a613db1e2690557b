// Untaken branches and short-circuited operands never divide by zero.
use plurex::{ArithOp, EvalError, plural_fn};

fn main() {
    assert_eq!(plural_fn!("1 ? 1 : (1 / 0)")(7), Ok(1));
    assert_eq!(plural_fn!("0 ? (1 / 0) : 2")(7), Ok(2));
    assert_eq!(plural_fn!("0 && (1 / 0)")(7), Ok(0));
    assert_eq!(plural_fn!("1 || (1 / 0)")(7), Ok(1));
    assert_eq!(
        plural_fn!("n % 0")(3),
        Err(EvalError::DivideByZero { operator: ArithOp::Rem })
    );
    assert_eq!(plural_fn!("!(n == 1) + 5 * 2")(1), Ok(10));
}
