use proc_macro::TokenStream;
use syn::LitStr;

mod codegen;

/// Compile a plural expression into a native function at build time.
///
/// The string literal is lexed and parsed with the same grammar the runtime
/// uses. A malformed expression is a compile error pointing at the literal.
///
/// The macro expands to a value of type
/// `fn(i64) -> Result<i64, ::plurex::EvalError>` whose results match
/// evaluating the same expression at runtime: ternaries and logic chains
/// short-circuit, arithmetic wraps, and `/` or `%` by zero returns
/// `EvalError::DivideByZero`.
///
/// # Example
///
/// ```ignore
/// let english: fn(i64) -> Result<i64, plurex::EvalError> = plural_fn!("n != 1");
/// assert_eq!(english(1), Ok(0));
/// assert_eq!(english(5), Ok(1));
/// ```
#[proc_macro]
pub fn plural_fn(input: TokenStream) -> TokenStream {
    let source = syn::parse_macro_input!(input as LitStr);
    match codegen::expand(&source) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
