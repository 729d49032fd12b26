//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Attributes)]` | on struct | Runtime attribute lookup |
//! | `#[derive(Comparable)]` | on struct | Attribute-ordered `Ord` |
//! | `quacks!` | function macro | Trait expression checks |

mod attributes;
mod comparable;
mod quacks;

pub use attributes::expand_derive_attributes;
pub use comparable::expand_derive_comparable;
pub use quacks::{expand_quacks, QuacksInput};
