//! Attribute definitions with sort ordering.

use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::enums::{Enum, LazyEnum};
use crate::error::CompareError;

use super::value::Attributes;

/// Direction an attribute is sorted in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Asc
    }

    pub fn is_descending(self) -> bool {
        self == SortOrder::Desc
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Valid orders for sorting.
static ORDERS: LazyEnum = LazyEnum::new(|| {
    Enum::builder(["asc", "desc"])
        .alias("ascending", "asc")
        .alias("descending", "desc")
        .build()
});

impl FromStr for SortOrder {
    type Err = CompareError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || CompareError::InvalidSortOrder(token.to_string());
        let order = ORDERS.fetch(token).map_err(|_| invalid())?;

        match order.as_str() {
            Some("asc") => Ok(SortOrder::Asc),
            Some("desc") => Ok(SortOrder::Desc),
            _ => Err(invalid()),
        }
    }
}

impl AsRef<str> for SortOrder {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("ASC"),
            SortOrder::Desc => f.write_str("DESC"),
        }
    }
}

/// One attribute of a comparator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    name: String,
    order: SortOrder,
}

impl Attribute {
    pub fn new(name: impl Into<String>, order: SortOrder) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn is_ascending(&self) -> bool {
        self.order.is_ascending()
    }

    pub fn is_descending(&self) -> bool {
        self.order.is_descending()
    }

    /// Compare this attribute of `a` against the same attribute of `b`.
    pub fn compare(&self, a: &dyn Attributes, b: &dyn Attributes) -> Result<Ordering, CompareError> {
        let lhs = self.value_of(a)?;
        let rhs = self.value_of(b)?;

        lhs.partial_cmp(&rhs)
            .map(|ordering| self.order.apply(ordering))
            .ok_or_else(|| CompareError::Incomparable(self.name.clone()))
    }

    fn value_of<'a>(&self, object: &'a dyn Attributes) -> Result<super::AttrValue<'a>, CompareError> {
        object
            .attribute(&self.name)
            .ok_or_else(|| CompareError::UnknownAttribute {
                type_name: object.type_name().to_string(),
                attribute: self.name.clone(),
            })
    }

    /// Render for comparator descriptions; the order is omitted when it
    /// matches the default of a many-attribute comparator.
    pub(crate) fn describe(&self, many: bool, default: SortOrder) -> String {
        if many && self.order == default {
            self.name.clone()
        } else {
            alloc::format!("{} {}", self.name, self.order)
        }
    }
}

/// An attribute entry as supplied to a comparator builder.
///
/// A bare entry is either a name (`"age"`) or a name and a direction
/// separated by whitespace (`"age desc"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeSpec {
    Bare(String),
    Pair(String, String),
}

impl AttributeSpec {
    pub(crate) fn parse(self, default: SortOrder) -> Result<Attribute, CompareError> {
        let (name, order) = match &self {
            AttributeSpec::Bare(entry) => {
                let mut parts = entry.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(name), None, None) => (name, None),
                    (Some(name), Some(order), None) => (name, Some(order)),
                    _ => return Err(self.invalid()),
                }
            }
            AttributeSpec::Pair(name, order) => (name.as_str(), Some(order.as_str())),
        };

        if !matches_attribute_name(name) {
            return Err(self.invalid());
        }

        let order = match order {
            Some(token) => token.parse()?,
            None => default,
        };

        Ok(Attribute::new(name, order))
    }

    fn invalid(&self) -> CompareError {
        let shown = match self {
            AttributeSpec::Bare(entry) => entry.clone(),
            AttributeSpec::Pair(name, order) => alloc::format!("({name}, {order})"),
        };
        CompareError::InvalidAttributeSpec(shown)
    }
}

/// Checks the shape of an attribute name: an identifier, or a tuple index.
pub fn matches_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() => name.chars().all(|c| c.is_ascii_digit()),
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl From<&str> for AttributeSpec {
    fn from(entry: &str) -> Self {
        AttributeSpec::Bare(entry.to_string())
    }
}

impl From<String> for AttributeSpec {
    fn from(entry: String) -> Self {
        AttributeSpec::Bare(entry)
    }
}

impl From<(&str, &str)> for AttributeSpec {
    fn from((name, order): (&str, &str)) -> Self {
        AttributeSpec::Pair(name.to_string(), order.to_string())
    }
}

impl From<(&str, SortOrder)> for AttributeSpec {
    fn from((name, order): (&str, SortOrder)) -> Self {
        AttributeSpec::Pair(name.to_string(), order.as_str().to_string())
    }
}

impl From<Attribute> for AttributeSpec {
    fn from(attribute: Attribute) -> Self {
        AttributeSpec::Pair(attribute.name, attribute.order.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_accepts_aliases() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("descending".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!(
            "sideways".parse::<SortOrder>().unwrap_err(),
            CompareError::InvalidSortOrder("sideways".into())
        );
    }

    #[test]
    fn attribute_names_have_identifier_shape() {
        assert!(matches_attribute_name("value_1"));
        assert!(matches_attribute_name("_private"));
        assert!(matches_attribute_name("0"));
        assert!(!matches_attribute_name(""));
        assert!(!matches_attribute_name("1st"));
        assert!(!matches_attribute_name("first-name"));
    }

    #[test]
    fn bare_entries_may_carry_a_direction() {
        let attribute = AttributeSpec::from("age desc").parse(SortOrder::Asc).unwrap();
        assert_eq!(attribute, Attribute::new("age", SortOrder::Desc));

        let attribute = AttributeSpec::from("age").parse(SortOrder::Desc).unwrap();
        assert_eq!(attribute.order(), SortOrder::Desc);
    }

    #[test]
    fn descriptions_hide_default_orders() {
        let attribute = Attribute::new("age", SortOrder::Asc);
        assert_eq!(attribute.describe(true, SortOrder::Asc), "age");
        assert_eq!(attribute.describe(false, SortOrder::Asc), "age ASC");
    }
}
