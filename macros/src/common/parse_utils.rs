//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use proc_macro2::Span;
use syn::{ext::IdentExt, parse::ParseStream, Data, DeriveInput, Fields, Ident, Member};

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is any of the given keywords
pub fn peek_any_keyword(input: ParseStream, keywords: &[&str]) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            let name = ident.to_string();
            return keywords.contains(&name.as_str());
        }
    }
    false
}

/// Check if the next tokens are `keyword =`
pub fn peek_assignment(input: ParseStream, keyword: &str) -> bool {
    peek_any_keyword(input, &[keyword]) && input.peek2(syn::Token![=])
}

// =============================================================================
// Sort Directions
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Accepts `asc`, `desc` and the aliases `ascending`, `descending`.
    pub fn parse_ident(ident: &Ident) -> syn::Result<Self> {
        match ident.to_string().as_str() {
            "asc" | "ascending" => Ok(Direction::Asc),
            "desc" | "descending" => Ok(Direction::Desc),
            other => Err(syn::Error::new(
                ident.span(),
                format!("invalid sort order: `{other}`, expected `asc` or `desc`"),
            )),
        }
    }

    /// Rendered the way comparator descriptions show it.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

// =============================================================================
// Struct Fields
// =============================================================================

/// The fields of a struct, or an error naming the derive that rejected it.
pub fn struct_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data) => Ok(&data.fields),
        _ => Err(syn::Error::new(
            Span::call_site(),
            format!("{derive} can only be derived for structs"),
        )),
    }
}

/// Every field as a `Member`, in declaration order.
pub fn members(fields: &Fields) -> Vec<Member> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(syn::Index::from(index)),
        })
        .collect()
}

/// The runtime attribute name of a member: the unraw identifier or the index.
pub fn member_name(member: &Member) -> String {
    match member {
        Member::Named(ident) => ident.unraw().to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    }
}
