//! Error types for enum lookups and comparator construction.

use alloc::string::String;

use thiserror::Error;

/// Errors raised while building or querying an [`Enum`](crate::enums::Enum).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// The enum was built without any values.
    #[error("Must provide some values")]
    EmptySet,

    /// A fallback or default is neither a member nor an allowed nil.
    #[error("Cannot use {0} as a fallback")]
    InvalidFallback(String),

    /// An alias points at something that is not a member.
    #[error("alias target `{0}` is not an enum member")]
    InvalidAliasTarget(String),

    /// An alias key collides with an existing member.
    #[error("alias `{0}` is already an enum member")]
    MemberAsAlias(String),

    /// The requested return type is not `symbol` or `string`.
    #[error("Invalid return type: {0:?}")]
    InvalidReturnType(String),

    /// Nothing matched and no fallback, default or callback was available.
    #[error("Invalid enum member: {0:?}")]
    NotFound(String),
}

/// Errors raised while building or applying a
/// [`Comparator`](crate::compare::Comparator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The comparator was built with zero attributes.
    #[error("Must provide at least one attribute")]
    NoAttributes,

    /// An attribute entry is not a name or a `(name, direction)` pair.
    #[error("Don't know what to do with attribute spec {0:?}")]
    InvalidAttributeSpec(String),

    /// A direction token is not one of `asc`, `desc`, `ascending`, `descending`.
    #[error("invalid sort order: {0:?}")]
    InvalidSortOrder(String),

    /// The right-hand side of a comparison failed the configured type guard.
    #[error("{found} must be kind of {expected}")]
    TypeGuardViolation {
        /// Type required by the guard
        expected: String,
        /// Type that was actually supplied
        found: String,
    },

    /// An object does not expose an attribute the comparator needs.
    #[error("{type_name} does not expose attribute `{attribute}`")]
    UnknownAttribute {
        /// Type of the object being compared
        type_name: String,
        /// Missing attribute name
        attribute: String,
    },

    /// Two attribute values have no defined ordering (mixed kinds or NaN).
    #[error("cannot compare values of attribute `{0}`")]
    Incomparable(String),
}
