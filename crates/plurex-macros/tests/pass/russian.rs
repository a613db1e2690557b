// A three-form rule with nested groups and logic chains.
use plurex::plural_fn;

fn main() {
    let russian = plural_fn!(
        "n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2"
    );
    assert_eq!(russian(1), Ok(0));
    assert_eq!(russian(3), Ok(1));
    assert_eq!(russian(5), Ok(2));
    assert_eq!(russian(11), Ok(2));
    assert_eq!(russian(21), Ok(0));
    assert_eq!(russian(112), Ok(2));
}
