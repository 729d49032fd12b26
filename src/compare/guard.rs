//! Type guards applied to the right-hand side of a comparison.

use alloc::string::{String, ToString};
use core::fmt;

use crate::blankness::blankish;
use crate::error::CompareError;

use super::value::Attributes;

/// Constraint on what a value may be compared against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeGuard {
    /// Compare against anything that exposes the attributes.
    None,
    /// The other value must be of the same type.
    #[default]
    SameType,
    /// The other value's type name must be this name, or end in `::name`.
    Named(String),
}

impl TypeGuard {
    /// A guard for a specific type name. A blank name means no guard.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if blankish(name.as_str()) {
            TypeGuard::None
        } else {
            TypeGuard::Named(name)
        }
    }

    /// A guard for exactly `T`.
    pub fn of<T: ?Sized>() -> Self {
        TypeGuard::Named(core::any::type_name::<T>().to_string())
    }

    pub fn is_guarded(&self) -> bool {
        !matches!(self, TypeGuard::None)
    }

    pub fn is_same_type(&self) -> bool {
        matches!(self, TypeGuard::SameType)
    }

    pub fn is_specific(&self) -> bool {
        matches!(self, TypeGuard::Named(_))
    }

    pub(crate) fn check(&self, a: &dyn Attributes, b: &dyn Attributes) -> Result<(), CompareError> {
        let found = b.type_name();
        let expected = match self {
            TypeGuard::None => return Ok(()),
            TypeGuard::SameType if a.type_name() == found => return Ok(()),
            TypeGuard::SameType => a.type_name(),
            TypeGuard::Named(name) if names_type(name, found) => return Ok(()),
            TypeGuard::Named(name) => name.as_str(),
        };

        Err(CompareError::TypeGuardViolation {
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }
}

fn names_type(name: &str, type_name: &str) -> bool {
    type_name
        .strip_suffix(name)
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with("::"))
}

impl From<bool> for TypeGuard {
    fn from(guarded: bool) -> Self {
        if guarded { TypeGuard::SameType } else { TypeGuard::None }
    }
}

impl fmt::Display for TypeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeGuard::None => f.write_str("none"),
            TypeGuard::SameType => f.write_str("same type"),
            TypeGuard::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_disable_the_guard() {
        assert_eq!(TypeGuard::named("  "), TypeGuard::None);
        assert!(TypeGuard::named("Wrapper").is_specific());
    }

    #[test]
    fn names_match_on_path_segments() {
        assert!(names_type("Wrapper", "my_crate::Wrapper"));
        assert!(names_type("my_crate::Wrapper", "my_crate::Wrapper"));
        assert!(!names_type("Wrapper", "my_crate::ValueWrapper"));
    }
}
