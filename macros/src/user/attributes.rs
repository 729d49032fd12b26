use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, Field, Member};

use crate::common::{member_name, members, struct_fields};

/// `#[attributes(skip)]` hides a field from runtime lookup.
fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skipped = false;

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("attributes")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("unsupported attributes option, expected `skip`"))
            }
        })?;
    }

    Ok(skipped)
}

pub fn expand_derive_attributes(input: DeriveInput) -> syn::Result<TokenStream> {
    let fields = struct_fields(&input, "Attributes")?;

    let mut names = Vec::new();
    let mut exposed: Vec<Member> = Vec::new();
    let mut generics = input.generics.clone();

    for (field, member) in fields.iter().zip(members(fields)) {
        if is_skipped(field)? {
            continue;
        }

        let ty = &field.ty;
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote! { #ty: ::dux::compare::ToAttrValue });

        names.push(member_name(&member));
        exposed.push(member);
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::dux::compare::Attributes for #ident #ty_generics #where_clause {
            fn attribute(&self, name: &str) -> ::core::option::Option<::dux::compare::AttrValue<'_>> {
                match name {
                    #(
                        #names => ::core::option::Option::Some(
                            ::dux::compare::ToAttrValue::to_attr_value(&self.#exposed)
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
