//! # Layer 1: Enums
//!
//! A closed, validated set of string-like values.
//!
//! Members are stored indifferently, so `"foo"` and `Symbol::new("foo")` name
//! the same member. Aliases map secondary names onto members, and lookups
//! fall back in a fixed order:
//!
//! ```text
//! member -> alias -> per-call fallback -> configured default -> callback -> NotFound
//! ```
//!
//! ```
//! use dux::{Enum, EnumError, Value};
//!
//! let orders = Enum::builder(["asc", "desc"])
//!     .alias("ascending", "asc")
//!     .alias("descending", "desc")
//!     .build()?;
//!
//! assert_eq!(orders.fetch("descending")?, Value::symbol("desc"));
//! assert!(matches!(orders.fetch("sideways"), Err(EnumError::NotFound(_))));
//! # Ok::<(), EnumError>(())
//! ```

pub mod alias_map;
pub mod value;

use alloc::collections::BTreeSet;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::error::EnumError;
use crate::primitives::{IndifferentString, Stringish};

pub use alias_map::AliasMap;
pub use value::{ReturnType, Value};

/// A frozen set of strings or symbols that can be used to validate options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enum {
    members: BTreeSet<IndifferentString>,
    aliases: AliasMap,
    default: Option<Value>,
    allow_nil: bool,
    return_type: ReturnType,
}

impl Enum {
    /// Build an enum with no aliases, default or nil support.
    pub fn new<I, S>(values: I) -> Result<Self, EnumError>
    where
        I: IntoIterator<Item = S>,
        S: Stringish,
    {
        Self::builder(values).build()
    }

    pub fn builder<I, S>(values: I) -> EnumBuilder
    where
        I: IntoIterator<Item = S>,
        S: Stringish,
    {
        EnumBuilder {
            values: values.into_iter().map(IndifferentString::new).collect(),
            default: None,
            allow_nil: false,
            aliases: Vec::new(),
            return_type: Ok(ReturnType::default()),
        }
    }

    /// Test for inclusion with indifferent equality.
    pub fn contains(&self, value: impl Stringish) -> bool {
        self.members.contains(value.as_ref())
    }

    /// Case-match predicate; same as [`Enum::contains`].
    pub fn matches(&self, value: impl Stringish) -> bool {
        self.contains(value)
    }

    pub fn is_alias(&self, value: impl Stringish) -> bool {
        self.aliases.is_alias(value.as_ref())
    }

    pub fn allow_nil(&self) -> bool {
        self.allow_nil
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The configured default; `Some(Value::Nil)` when the default is nil.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn return_type(&self) -> ReturnType {
        self.return_type
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndifferentString> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: an enum cannot be built without members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up `value`, failing with [`EnumError::NotFound`] if nothing matches
    /// and no default is configured.
    pub fn fetch(&self, value: impl Stringish) -> Result<Value, EnumError> {
        self.resolve(value, None, None)
    }

    /// Look up `value`, using `fallback` verbatim when it does not match.
    pub fn fetch_or(&self, value: impl Stringish, fallback: impl Into<Value>) -> Result<Value, EnumError> {
        self.resolve(value, Some(fallback.into()), None)
    }

    /// Look up `value`, calling `on_missing` instead of failing with
    /// [`EnumError::NotFound`].
    pub fn fetch_or_else<F>(&self, value: impl Stringish, on_missing: F) -> Result<Value, EnumError>
    where
        F: FnOnce(&str) -> Value,
    {
        let value = value.as_ref();
        match self.lookup(value, None) {
            Some(found) => found,
            None => {
                trace!(value, "enum lookup handed to callback");
                Ok(on_missing(value))
            }
        }
    }

    /// Resolve `value` through members, aliases, `fallback`, the configured
    /// default and finally `on_missing`.
    ///
    /// A fallback is returned as given; members, aliases and the default are
    /// converted to this enum's [`ReturnType`].
    pub fn resolve(
        &self,
        value: impl Stringish,
        fallback: Option<Value>,
        on_missing: Option<&dyn Fn(&str) -> Value>,
    ) -> Result<Value, EnumError> {
        let value = value.as_ref();
        match self.lookup(value, fallback) {
            Some(found) => found,
            None => match on_missing {
                Some(callback) => {
                    trace!(value, "enum lookup handed to callback");
                    Ok(callback(value))
                }
                None => Err(EnumError::NotFound(value.to_string())),
            },
        }
    }

    /// Every resolution step except the callback; `None` means nothing applied.
    fn lookup(&self, value: &str, fallback: Option<Value>) -> Option<Result<Value, EnumError>> {
        if let Some(member) = self.members.get(value) {
            return Some(Ok(self.return_type.render(member)));
        }

        if let Some(target) = self.aliases.get(value) {
            trace!(value, target = target.as_str(), "resolved enum alias");
            return Some(Ok(self.return_type.render(target)));
        }

        if let Some(fallback) = fallback {
            if self.valid_fallback(&fallback) {
                trace!(value, %fallback, "enum lookup used fallback");
                return Some(Ok(fallback));
            }
            return Some(Err(EnumError::InvalidFallback(fallback.to_string())));
        }

        self.default.as_ref().map(|default| {
            trace!(value, %default, "enum lookup used default");
            Ok(self.with_return_type(default))
        })
    }

    /// Fallbacks and defaults share this check.
    fn valid_fallback(&self, fallback: &Value) -> bool {
        match fallback.as_str() {
            None => self.allow_nil,
            Some(text) => self.members.contains(text),
        }
    }

    fn with_return_type(&self, value: &Value) -> Value {
        match value.as_str() {
            None => Value::Nil,
            Some(text) => self.return_type.render(text),
        }
    }
}

impl<'a> IntoIterator for &'a Enum {
    type Item = &'a IndifferentString;
    type IntoIter = alloc::collections::btree_set::Iter<'a, IndifferentString>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dux::Enum([")?;
        for (index, member) in self.members.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(member)?;
        }
        f.write_str("])")
    }
}

/// A fixed enum built on first use.
///
/// With `std` the enum is built once and shared; without it every lookup
/// rebuilds it.
pub(crate) struct LazyEnum {
    build: fn() -> Result<Enum, EnumError>,
    #[cfg(feature = "std")]
    cell: std::sync::OnceLock<Result<Enum, EnumError>>,
}

impl LazyEnum {
    pub(crate) const fn new(build: fn() -> Result<Enum, EnumError>) -> Self {
        Self {
            build,
            #[cfg(feature = "std")]
            cell: std::sync::OnceLock::new(),
        }
    }

    #[cfg(feature = "std")]
    pub(crate) fn fetch(&self, value: &str) -> Result<Value, EnumError> {
        match self.cell.get_or_init(self.build) {
            Ok(enumeration) => enumeration.fetch(value),
            Err(err) => Err(err.clone()),
        }
    }

    #[cfg(not(feature = "std"))]
    pub(crate) fn fetch(&self, value: &str) -> Result<Value, EnumError> {
        (self.build)()?.fetch(value)
    }
}

/// Options for [`Enum::builder`].
#[derive(Clone, Debug)]
pub struct EnumBuilder {
    values: Vec<IndifferentString>,
    default: Option<Value>,
    allow_nil: bool,
    aliases: Vec<(IndifferentString, IndifferentString)>,
    return_type: Result<ReturnType, EnumError>,
}

impl EnumBuilder {
    /// Value used when a lookup fails and no per-call fallback is given.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Make nil the default. Requires [`EnumBuilder::allow_nil`].
    pub fn default_nil(mut self) -> Self {
        self.default = Some(Value::Nil);
        self
    }

    pub fn allow_nil(mut self, allow_nil: bool) -> Self {
        self.allow_nil = allow_nil;
        self
    }

    pub fn alias(mut self, alias: impl Stringish, target: impl Stringish) -> Self {
        self.aliases
            .push((IndifferentString::new(alias), IndifferentString::new(target)));
        self
    }

    pub fn aliases<I, K, V>(self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Stringish,
        V: Stringish,
    {
        aliases
            .into_iter()
            .fold(self, |builder, (alias, target)| builder.alias(alias, target))
    }

    pub fn return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = Ok(return_type);
        self
    }

    /// Select the return type by name; an unknown name fails at [`EnumBuilder::build`].
    pub fn return_type_named(mut self, name: impl Stringish) -> Self {
        self.return_type = name.as_ref().parse();
        self
    }

    pub fn build(self) -> Result<Enum, EnumError> {
        let return_type = self.return_type?;

        if self.values.is_empty() {
            return Err(EnumError::EmptySet);
        }

        let members: BTreeSet<IndifferentString> = self.values.into_iter().collect();

        let mut enumeration = Enum {
            members,
            aliases: AliasMap::default(),
            default: None,
            allow_nil: self.allow_nil,
            return_type,
        };

        if let Some(default) = self.default {
            if !enumeration.valid_fallback(&default) {
                return Err(EnumError::InvalidFallback(default.to_string()));
            }
            enumeration.default = Some(default);
        }

        enumeration.aliases = AliasMap::new(&enumeration.members, self.aliases)?;

        debug!(
            members = enumeration.members.len(),
            aliases = enumeration.aliases.len(),
            default = enumeration.default.is_some(),
            return_type = %enumeration.return_type,
            "built enum"
        );

        Ok(enumeration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_values_collapse() {
        let enumeration = Enum::new(["foo", "foo", "bar"]).unwrap();
        assert_eq!(enumeration.len(), 2);
    }

    #[test]
    fn return_type_is_checked_before_values() {
        let err = Enum::builder(Vec::<&str>::new())
            .return_type_named("integer")
            .build()
            .unwrap_err();
        assert_eq!(err, EnumError::InvalidReturnType("integer".into()));
    }

    #[test]
    fn nil_default_is_rendered_as_nil() {
        let enumeration = Enum::builder(["foo"])
            .allow_nil(true)
            .default_nil()
            .return_type(ReturnType::String)
            .build()
            .unwrap();
        assert_eq!(enumeration.fetch("missing").unwrap(), Value::Nil);
    }

    #[test]
    fn lazy_enums_resolve_repeatedly() {
        static COLORS: LazyEnum = LazyEnum::new(|| Enum::builder(["red"]).alias("rouge", "red").build());

        for _ in 0..3 {
            assert_eq!(COLORS.fetch("rouge").unwrap(), Value::symbol("red"));
        }
        assert_eq!(COLORS.fetch("blue").unwrap_err(), EnumError::NotFound("blue".into()));
    }

    #[test]
    fn display_lists_sorted_members() {
        let enumeration = Enum::new(["foo", "bar", "baz"]).unwrap();
        assert_eq!(alloc::format!("{enumeration}"), "Dux::Enum([bar, baz, foo])");
    }
}
