#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, std errors and HashMap / HashSet blankness
// - derive: default, re-exports the dux-macros proc-macros

//! # dux
//!
//! Swiss-army duck type matching.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - IndifferentString, Symbol, NullObject                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Values                                                  |
//! |  - Blank (blankness checks), Enum (closed value sets + aliases)   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Behaviour                                               |
//! |  - Comparator (attribute ordering), duck predicates and flocks    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Macros                                                  |
//! |  - #[derive(Attributes)], #[derive(Comparable)], quacks!          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dux::prelude::*;
//!
//! // Validated options with aliases and a default
//! let colors = Enum::builder(["red", "green"])
//!     .alias("verde", "green")
//!     .default("red")
//!     .return_type(ReturnType::String)
//!     .build()?;
//!
//! assert_eq!(colors.fetch("verde")?, Value::string("green"));
//! assert_eq!(colors.fetch("mauve")?, Value::string("red"));
//!
//! // Declarative ordering
//! #[derive(Comparable)]
//! #[comparable(score desc, name)]
//! struct Player {
//!     name: &'static str,
//!     score: u32,
//! }
//!
//! let mut players = vec![
//!     Player { name: "b", score: 1 },
//!     Player { name: "a", score: 3 },
//! ];
//! players.sort();
//! assert_eq!(players[0].name, "a");
//!
//! assert!(blankish("  "));
//! # Ok::<(), dux::EnumError>(())
//! ```

extern crate alloc;

// Allow `::dux` paths emitted by the derives to work inside the crate itself
extern crate self as dux;

pub mod blankness;
pub mod compare;
pub mod duck;
pub mod enums;
pub mod error;
pub mod primitives;

pub use blankness::{blankish, presentish, Blank};
pub use compare::{
    AttrValue, Attribute, AttributeSpec, Attributes, Comparator, ComparatorBuilder, OrderedBy,
    SortOrder, ToAttrValue, TypeGuard,
};
pub use enums::{AliasMap, Enum, EnumBuilder, ReturnType, Value};
pub use error::{CompareError, EnumError};
pub use primitives::{IndifferentString, NullObject, Stringish, Symbol};

#[cfg(feature = "derive")]
pub use macros::{quacks, Attributes, Comparable};

/// Common items for everyday use.
pub mod prelude {
    pub use crate::blankness::{blankish, presentish, Blank};
    pub use crate::compare::{Attributes, Comparator, OrderedBy, SortOrder, TypeGuard};
    pub use crate::duck::{Flock, Predicate};
    pub use crate::enums::{Enum, ReturnType, Value};
    pub use crate::error::{CompareError, EnumError};
    pub use crate::primitives::{IndifferentString, NullObject, Symbol};
    pub use crate::has_impl;
    #[cfg(feature = "derive")]
    pub use macros::{quacks, Attributes, Comparable};
}
