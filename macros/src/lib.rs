//! Procedural macros for dux
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Attributes)]` | struct | Expose fields to runtime comparators |
//! | `#[derive(Comparable)]` | struct | Generate `Ord` from an attribute list |
//! | `quacks![]` | - | Compile-time duck check over traits |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Attributes, Comparable)]
//! #[comparable(value_1 desc, value_2)]
//! struct Pair {
//!     value_1: char,
//!     value_2: char,
//! }
//!
//! assert!(quacks!(Pair: Ord & !Copy));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// Derives
// =============================================================================

/// Derive `dux::compare::Attributes` for a struct.
///
/// Named fields are exposed by name, tuple fields by index (`"0"`, `"1"`).
/// Every exposed field must implement `dux::compare::ToAttrValue`.
///
/// # Usage
/// ```ignore
/// #[derive(Attributes)]
/// struct Person {
///     name: String,
///     age: u32,
///     #[attributes(skip)]
///     cache: Vec<u8>,
/// }
///
/// let comparator = Comparator::builder().attributes(["age desc", "name"]).build()?;
/// ```
#[proc_macro_derive(Attributes, attributes(attributes))]
pub fn derive_attributes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_attributes(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `Ord`, `PartialOrd`, `PartialEq`, `Eq` and `dux::compare::OrderedBy`
/// from a list of attributes.
///
/// Attributes are compared left to right; the first one that differs decides.
/// Without a `#[comparable(...)]` list every field is used, in declaration order.
///
/// # Usage
/// ```ignore
/// // value_1 descending, ties broken by value_2 ascending
/// #[derive(Comparable)]
/// #[comparable(value_1 desc, value_2)]
/// struct Pair { value_1: char, value_2: char }
///
/// // Bare attributes follow `sort_order`
/// #[derive(Comparable)]
/// #[comparable(score, name, sort_order = desc)]
/// struct Player { name: String, score: u32 }
///
/// // Tuple structs use field indices
/// #[derive(Comparable)]
/// #[comparable(1 desc, 0)]
/// struct Point(i32, i32);
/// ```
#[proc_macro_derive(Comparable, attributes(comparable))]
pub fn derive_comparable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_comparable(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

// =============================================================================
// Function-like Macros
// =============================================================================

/// Check if types satisfy trait expressions.
///
/// Returns a `bool` computed from compile-time trait probes. Only concrete
/// types are detected reliably; generic parameters report `false`.
///
/// # Syntax: `quacks!(Type: Expr, ...)`
///
/// All checks must pass for the result to be true.
///
/// ```ignore
/// use dux::quacks;
///
/// assert!(quacks!(String: Clone));
/// assert!(quacks!(String: Clone & !Copy));
/// assert!(quacks!(i32: (Clone | Copy) & core::fmt::Debug));
///
/// // Flocks
/// assert!(quacks!(i32: all(Copy, Ord, Default)));
/// assert!(quacks!(String: any(Copy, core::fmt::Display)));
/// assert!(quacks!(String: none(Copy, Iterator)));
///
/// // Multiple checks
/// assert!(quacks!(String: Clone, i32: Copy));
/// ```
#[proc_macro]
pub fn quacks(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::QuacksInput);
    user::expand_quacks(input).into()
}
