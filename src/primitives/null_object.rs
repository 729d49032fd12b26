//! Null objects for smarter argument building.
//!
//! A [`NullObject`] is a named sentinel that can never be confused with a
//! real value: two null objects are equal only if one is a clone of the
//! other.
//!
//! ```
//! use dux::NullObject;
//!
//! let unset = NullObject::named("Config::UNSET").with_purpose("no timeout configured");
//! let other = NullObject::new();
//!
//! assert_eq!(unset, unset.clone());
//! assert_ne!(unset, other);
//! assert!(other.name().starts_with("Dux::NullObject(0x"));
//! ```

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

const DEFAULT_PURPOSE: &str = "a null object";

/// A named, identity-compared sentinel.
#[derive(Clone)]
pub struct NullObject {
    id: usize,
    name: Cow<'static, str>,
    purpose: Cow<'static, str>,
}

impl NullObject {
    /// Create a null object named after its inspection id.
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id,
            name: Cow::Owned(format!("Dux::NullObject({})", inspect_id(id))),
            purpose: Cow::Borrowed(DEFAULT_PURPOSE),
        }
    }

    /// Create a null object with an explicit name, e.g. `Foo::Bar::NULL`.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<Cow<'static, str>>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// The id shown in this object's default name, as `0x` plus 14 hex digits.
    pub fn inspect_id(&self) -> String {
        inspect_id(self.id)
    }
}

impl Default for NullObject {
    fn default() -> Self {
        Self::new()
    }
}

fn inspect_id(id: usize) -> String {
    format!("0x{:014x}", id << 1)
}

impl PartialEq for NullObject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NullObject {}

impl Hash for NullObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NullObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullObject")
            .field("name", &self.name)
            .field("purpose", &self.purpose)
            .finish()
    }
}

impl fmt::Display for NullObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
