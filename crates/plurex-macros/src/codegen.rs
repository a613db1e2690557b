//! Code generation for the plural_fn! macro.
//!
//! Every node becomes a Rust expression of type `i64`. Operators are routed
//! through `::plurex::__private`, the same helpers the tree-walking
//! evaluator calls, so both paths share one definition of each operator.

use plurex_syntax::{
    ArithOp, Arithmetic, Compare, CompareOp, Expression, Logic, LogicOp, Primary,
};
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::LitStr;

/// Expand a string literal into a native plural function.
pub fn expand(source: &LitStr) -> syn::Result<TokenStream> {
    let expression = plurex_syntax::compile(&source.value()).map_err(|e| {
        syn::Error::new(source.span(), format!("invalid plural expression: {e}"))
    })?;
    let body = expression_tokens(&expression);

    Ok(quote! {
        {
            fn plural(n: i64) -> ::core::result::Result<i64, ::plurex::EvalError> {
                let _ = n;
                ::core::result::Result::Ok(#body)
            }
            plural as fn(i64) -> ::core::result::Result<i64, ::plurex::EvalError>
        }
    })
}

fn expression_tokens(expression: &Expression) -> TokenStream {
    match expression {
        Expression::Ternary(ternary) => {
            let condition = expression_tokens(&ternary.condition);
            let if_true = expression_tokens(&ternary.if_true);
            let if_false = expression_tokens(&ternary.if_false);
            quote! {
                if ::plurex::__private::truthy(#condition) { #if_true } else { #if_false }
            }
        }
        Expression::Logic(logic) => logic_tokens(logic),
        Expression::Compare(compare) => compare_tokens(compare),
        Expression::Arithmetic(arithmetic) => arithmetic_tokens(arithmetic),
        Expression::Unary(unary) => {
            let operand = expression_tokens(&unary.operand);
            if unary.not {
                quote! { ::plurex::__private::not(#operand) }
            } else {
                operand
            }
        }
        Expression::Primary(Primary::Variable) => quote! { n },
        Expression::Primary(Primary::Literal(value)) => literal_tokens(*value),
        Expression::Primary(Primary::Group(inner)) => {
            let inner = expression_tokens(inner);
            quote! { (#inner) }
        }
    }
}

/// A single operand passes through unchanged; two or more are booleanized
/// and joined with Rust's short-circuiting operator.
fn logic_tokens(logic: &Logic) -> TokenStream {
    match logic.operands.as_slice() {
        [] => quote! { ::core::compile_error!("logic chain without operands") },
        [single] => expression_tokens(single),
        [first, rest @ ..] => {
            let joiner = match logic.op {
                LogicOp::And => quote! { && },
                LogicOp::Or => quote! { || },
            };
            let chain = rest.iter().fold(truthy_tokens(first), |acc, operand| {
                let operand = truthy_tokens(operand);
                quote! { #acc #joiner #operand }
            });
            quote! { ::plurex::__private::from_bool(#chain) }
        }
    }
}

fn truthy_tokens(expression: &Expression) -> TokenStream {
    let value = expression_tokens(expression);
    quote! { ::plurex::__private::truthy(#value) }
}

fn compare_tokens(compare: &Compare) -> TokenStream {
    let left = expression_tokens(&compare.left);
    let Some((op, right)) = &compare.right else {
        return left;
    };
    let op = compare_op_tokens(*op);
    let right = expression_tokens(right);
    quote! { ::plurex::__private::compare(#op, #left, #right) }
}

fn arithmetic_tokens(arithmetic: &Arithmetic) -> TokenStream {
    let first = expression_tokens(&arithmetic.first);
    if arithmetic.rest.is_empty() {
        return first;
    }
    let steps = arithmetic.rest.iter().map(|(op, operand)| {
        let op = arith_op_tokens(*op);
        let operand = expression_tokens(operand);
        quote! { acc = ::plurex::__private::arithmetic(#op, acc, #operand)?; }
    });
    quote! {
        {
            let mut acc: i64 = #first;
            #(#steps)*
            acc
        }
    }
}

/// Literals above `i64::MAX` have already wrapped negative in the lexer; emit
/// them through their bit pattern so the generated source has no negative
/// literal to overflow.
fn literal_tokens(value: i64) -> TokenStream {
    if value >= 0 {
        let literal = Literal::i64_suffixed(value);
        quote! { #literal }
    } else {
        let literal = Literal::u64_suffixed(u64::from_ne_bytes(value.to_ne_bytes()));
        quote! { (#literal as i64) }
    }
}

fn compare_op_tokens(op: CompareOp) -> TokenStream {
    match op {
        CompareOp::Eq => quote! { ::plurex::CompareOp::Eq },
        CompareOp::Ne => quote! { ::plurex::CompareOp::Ne },
        CompareOp::Gt => quote! { ::plurex::CompareOp::Gt },
        CompareOp::Ge => quote! { ::plurex::CompareOp::Ge },
        CompareOp::Lt => quote! { ::plurex::CompareOp::Lt },
        CompareOp::Le => quote! { ::plurex::CompareOp::Le },
    }
}

fn arith_op_tokens(op: ArithOp) -> TokenStream {
    match op {
        ArithOp::Add => quote! { ::plurex::ArithOp::Add },
        ArithOp::Sub => quote! { ::plurex::ArithOp::Sub },
        ArithOp::Mul => quote! { ::plurex::ArithOp::Mul },
        ArithOp::Div => quote! { ::plurex::ArithOp::Div },
        ArithOp::Rem => quote! { ::plurex::ArithOp::Rem },
    }
}
