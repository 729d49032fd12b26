//! # Layer 2: Duck typing
//!
//! Capability checks without runtime reflection:
//!
//! ```text
//! duck/
//! ├── predicate.rs - runtime predicates and all / any / none flocks
//! └── compile.rs   - has_impl! trait probe (quacks! lives in dux-macros)
//! ```
//!
//! ```
//! use dux::duck::{self, Predicate};
//!
//! let short = |word: &str| word.len() < 5;
//! let shouty = |word: &str| word.chars().all(char::is_uppercase);
//!
//! let interface = duck::all([short.into_duck(), shouty.into_duck()]);
//! assert!(interface.test("QUAC"));
//! assert!(!interface.test("quack"));
//!
//! let kind: duck::Flock = "none".parse()?;
//! assert!(duck::flock(kind, [short, short]).test("quackers"));
//! # Ok::<(), dux::EnumError>(())
//! ```

pub mod compile;
pub mod predicate;

pub use predicate::{all, any, flock, none, not, Duck, Flock, FlockOf, Not, Predicate};
