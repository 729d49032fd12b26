// Boolean trait expressions and their compile-time probes

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Path, Token, Type,
};

use super::peek_any_keyword;

// =============================================================================
// Duck Expression AST
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlockKind {
    All,
    Any,
    None,
}

#[derive(Clone, Debug)]
pub enum DuckExpr {
    Trait(Path),
    And(Box<DuckExpr>, Box<DuckExpr>),
    Or(Box<DuckExpr>, Box<DuckExpr>),
    Not(Box<DuckExpr>),
    Flock(FlockKind, Vec<DuckExpr>),
}

const FLOCK_KEYWORDS: &[&str] = &["all", "any", "none"];

impl Parse for DuckExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<DuckExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = DuckExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<DuckExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = DuckExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<DuckExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(DuckExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<DuckExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        return content.parse();
    }

    if peek_any_keyword(input, FLOCK_KEYWORDS) && input.peek2(syn::token::Paren) {
        let keyword: syn::Ident = input.parse()?;
        let kind = match keyword.to_string().as_str() {
            "all" => FlockKind::All,
            "any" => FlockKind::Any,
            _ => FlockKind::None,
        };

        let content;
        syn::parenthesized!(content in input);
        let ducks = Punctuated::<DuckExpr, Token![,]>::parse_terminated(&content)?;
        return Ok(DuckExpr::Flock(kind, ducks.into_iter().collect()));
    }

    Ok(DuckExpr::Trait(input.parse()?))
}

// =============================================================================
// Probe Generation
// =============================================================================

/// Generate a `bool` expression checking `expr` against the concrete `ty`.
pub fn generate_probe(expr: &DuckExpr, ty: &Type) -> TokenStream {
    match expr {
        DuckExpr::Trait(path) => generate_single_probe(path, ty),
        DuckExpr::And(lhs, rhs) => {
            let l = generate_probe(lhs, ty);
            let r = generate_probe(rhs, ty);
            quote! { (#l && #r) }
        }
        DuckExpr::Or(lhs, rhs) => {
            let l = generate_probe(lhs, ty);
            let r = generate_probe(rhs, ty);
            quote! { (#l || #r) }
        }
        DuckExpr::Not(operand) => {
            let o = generate_probe(operand, ty);
            quote! { (!#o) }
        }
        DuckExpr::Flock(kind, ducks) => {
            let checks: Vec<_> = ducks.iter().map(|duck| generate_probe(duck, ty)).collect();
            match kind {
                FlockKind::All => quote! { (true #(&& #checks)*) },
                FlockKind::Any => quote! { (false #(|| #checks)*) },
                FlockKind::None => quote! { (!(false #(|| #checks)*)) },
            }
        }
    }
}

/// Inherent const shadows the fallback trait const when `ty: path`.
fn generate_single_probe(path: &Path, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __DuxFallback { const QUACKS: bool = false; }
            struct __DuxProbe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __DuxFallback for __DuxProbe<X> {}
            impl<X: ?Sized + #path> __DuxProbe<X> {
                #[allow(dead_code)]
                const QUACKS: bool = true;
            }
            __DuxProbe::<#ty>::QUACKS
        }
    }
}
