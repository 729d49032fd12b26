use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use crate::common::{generate_probe, DuckExpr};

/// Single type check: `Type: Expr`
struct TypeCheck {
    ty: Type,
    expr: DuckExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: DuckExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// Input for quacks! macro: one or more type checks
pub struct QuacksInput {
    checks: Vec<TypeCheck>,
}

impl Parse for QuacksInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // First check is required
        let mut checks = vec![input.parse()?];

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(QuacksInput { checks })
    }
}

pub fn expand_quacks(input: QuacksInput) -> TokenStream {
    let checks = input
        .checks
        .iter()
        .map(|check| generate_probe(&check.expr, &check.ty));

    quote! {
        (true #(&& #checks)*)
    }
}
