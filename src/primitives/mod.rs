//! # Layer 0: Primitives
//!
//! Basic building blocks for the rest of the crate:
//! - `indifferent.rs`: `IndifferentString` and `Symbol`, interchangeable string forms.
//! - `null_object.rs`: `NullObject`, identity-compared sentinels.

pub mod indifferent;
pub mod null_object;

pub use indifferent::{IndifferentString, Stringish, Symbol};
pub use null_object::NullObject;
