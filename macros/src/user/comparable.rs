use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    DeriveInput, Ident, Member, Token,
};

use crate::common::{member_name, members, peek_assignment, struct_fields, Direction};

/// One entry of `#[comparable(...)]`
enum ComparableArg {
    /// `sort_order = desc`
    SortOrder(Direction),
    /// `field` or `field desc`
    Attribute {
        member: Member,
        direction: Option<Direction>,
    },
}

impl Parse for ComparableArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if peek_assignment(input, "sort_order") {
            input.parse::<Ident>()?;
            input.parse::<Token![=]>()?;
            let direction = Direction::parse_ident(&input.parse()?)?;
            return Ok(ComparableArg::SortOrder(direction));
        }

        let member: Member = input.parse()?;
        let direction = if input.peek(Ident) {
            Some(Direction::parse_ident(&input.parse()?)?)
        } else {
            None
        };

        Ok(ComparableArg::Attribute { member, direction })
    }
}

/// Resolved attribute list for a comparable struct
struct Ordering {
    attributes: Vec<(Member, Direction)>,
    default: Direction,
}

impl Ordering {
    fn describe(&self) -> String {
        let many = self.attributes.len() > 1;
        let list: Vec<String> = self
            .attributes
            .iter()
            .map(|(member, direction)| {
                let name = member_name(member);
                if many && *direction == self.default {
                    name
                } else {
                    format!("{name} {}", direction.label())
                }
            })
            .collect();

        if many {
            format!(
                "Dux::Comparable([{}], default_order: {})",
                list.join(", "),
                self.default.label()
            )
        } else {
            format!("Dux::Comparable({})", list.join(", "))
        }
    }
}

fn parse_ordering(input: &DeriveInput) -> syn::Result<Ordering> {
    let fields = struct_fields(input, "Comparable")?;
    let known = members(fields);

    let mut declared: Vec<(Member, Option<Direction>)> = Vec::new();
    let mut default = Direction::Asc;

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("comparable")) {
        let args = attr.parse_args_with(Punctuated::<ComparableArg, Token![,]>::parse_terminated)?;

        for arg in args {
            match arg {
                ComparableArg::SortOrder(direction) => default = direction,
                ComparableArg::Attribute { member, direction } => {
                    if !known.contains(&member) {
                        return Err(syn::Error::new_spanned(
                            &member,
                            format!("`{}` has no field `{}`", input.ident, member_name(&member)),
                        ));
                    }
                    declared.push((member, direction));
                }
            }
        }
    }

    // Without listed attributes every field takes part, in declaration order.
    if declared.is_empty() {
        declared = known.into_iter().map(|member| (member, None)).collect();
    }

    // Only a struct without fields gets here.
    if declared.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "Must provide at least one attribute",
        ));
    }

    let attributes: Vec<(Member, Direction)> = declared
        .into_iter()
        .map(|(member, direction)| (member, direction.unwrap_or(default)))
        .collect();

    if let [(_, only)] = attributes.as_slice() {
        default = *only;
    }

    Ok(Ordering { attributes, default })
}

pub fn expand_derive_comparable(input: DeriveInput) -> syn::Result<TokenStream> {
    let ordering = parse_ordering(&input)?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let comparisons = ordering.attributes.iter().map(|(member, direction)| match direction {
        Direction::Asc => quote! { ::core::cmp::Ord::cmp(&self.#member, &other.#member) },
        Direction::Desc => quote! { ::core::cmp::Ord::cmp(&other.#member, &self.#member) },
    });

    let order_by = ordering.attributes.iter().map(|(member, direction)| {
        let name = member_name(member);
        let order = match direction {
            Direction::Asc => quote! { ::dux::compare::SortOrder::Asc },
            Direction::Desc => quote! { ::dux::compare::SortOrder::Desc },
        };
        quote! { (#name, #order) }
    });

    let description = ordering.describe();

    Ok(quote! {
        impl #impl_generics ::core::cmp::Ord for #ident #ty_generics #where_clause {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ordering::Equal
                    #( .then_with(|| #comparisons) )*
            }
        }

        impl #impl_generics ::core::cmp::PartialOrd for #ident #ty_generics #where_clause {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                ::core::cmp::Ord::cmp(self, other) == ::core::cmp::Ordering::Equal
            }
        }

        impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}

        impl #impl_generics ::dux::compare::OrderedBy for #ident #ty_generics #where_clause {
            const ORDER_BY: &'static [(&'static str, ::dux::compare::SortOrder)] = &[#(#order_by),*];
            const DESCRIPTION: &'static str = #description;
        }
    })
}
