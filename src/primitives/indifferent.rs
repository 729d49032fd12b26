//! Strings that are interchangeable with their symbol form.
//!
//! A [`Symbol`] plays the role of a bare enum tag, an [`IndifferentString`]
//! is the canonical stored form. Both compare equal to plain `&str` and
//! hash exactly like it, so either can be used to query a set keyed by the
//! other.

use alloc::string::{String, ToString};
use core::borrow::Borrow;
use core::fmt;
use core::ops::Deref;

/// Anything that can stand in for a string or a symbol.
pub trait Stringish: AsRef<str> {}

impl<T: AsRef<str> + ?Sized> Stringish for T {}

/// A symbolic token.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Stringish) -> Self {
        Self(name.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A string value that is equivalent to its symbol representation.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndifferentString(String);

impl IndifferentString {
    pub fn new(stringish: impl Stringish) -> Self {
        Self(stringish.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn to_symbol(&self) -> Symbol {
        Symbol(self.0.clone())
    }
}

impl Deref for IndifferentString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IndifferentString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Ord are derived from the inner String, which agree with `str`.
impl Borrow<str> for IndifferentString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IndifferentString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for IndifferentString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IndifferentString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IndifferentString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Symbol> for IndifferentString {
    fn from(value: Symbol) -> Self {
        Self(value.0)
    }
}

impl From<&Symbol> for IndifferentString {
    fn from(value: &Symbol) -> Self {
        Self(value.0.clone())
    }
}

impl PartialEq<str> for IndifferentString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IndifferentString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for IndifferentString {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

impl PartialEq<Symbol> for IndifferentString {
    fn eq(&self, other: &Symbol) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<IndifferentString> for Symbol {
    fn eq(&self, other: &IndifferentString) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<IndifferentString> for &str {
    fn eq(&self, other: &IndifferentString) -> bool {
        *self == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn string_and_symbol_are_interchangeable() {
        let value = IndifferentString::new("foo");
        assert_eq!(value, "foo");
        assert_eq!(value, Symbol::new("foo"));
        assert_eq!(Symbol::new("foo"), value);
        assert_eq!(value, IndifferentString::from(Symbol::from("foo")));
    }

    #[test]
    fn sets_can_be_queried_by_str() {
        let set: BTreeSet<IndifferentString> = ["foo", "bar"].into_iter().map(Into::into).collect();
        assert!(set.contains("foo"));
        assert!(set.contains(Symbol::new("bar").as_str()));
        assert!(!set.contains("baz"));
    }

    #[test]
    fn symbol_debug_looks_like_a_tag() {
        assert_eq!(alloc::format!("{:?}", Symbol::new("asc")), ":asc");
        assert_eq!(alloc::format!("{:?}", IndifferentString::new("asc")), "\"asc\"");
    }
}
