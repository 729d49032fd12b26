//! # Layer 2: Attribute-based comparison
//!
//! Build a total ordering from a list of attributes, each sorted ascending
//! or descending, with ties broken left to right. This is the runtime
//! counterpart of `#[derive(Comparable)]`.
//!
//! ```
//! use dux::{Attributes, Comparator};
//!
//! #[derive(Attributes, Debug, PartialEq)]
//! struct Pair {
//!     value_1: char,
//!     value_2: char,
//! }
//!
//! let comparator = Comparator::builder()
//!     .attributes(["value_1 desc", "value_2"])
//!     .build()?;
//!
//! let mut pairs = vec![
//!     Pair { value_1: 'b', value_2: 'a' },
//!     Pair { value_1: 'c', value_2: 'b' },
//!     Pair { value_1: 'c', value_2: 'a' },
//! ];
//! comparator.sort(&mut pairs)?;
//!
//! assert_eq!(pairs[0], Pair { value_1: 'c', value_2: 'a' });
//! assert_eq!(comparator.to_string(), "Dux::Comparable([value_1 DESC, value_2], default_order: ASC)");
//! # Ok::<(), dux::CompareError>(())
//! ```

pub mod attribute;
pub mod guard;
pub mod value;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use tracing::{debug, trace};

use crate::error::CompareError;

pub use attribute::{matches_attribute_name, Attribute, AttributeSpec, SortOrder};
pub use guard::TypeGuard;
pub use value::{AttrValue, Attributes, ToAttrValue};

/// Types whose ordering was declared with `#[derive(Comparable)]`.
pub trait OrderedBy {
    /// Attributes in comparison order.
    const ORDER_BY: &'static [(&'static str, SortOrder)];

    /// Human-readable description, e.g. `Dux::Comparable(value ASC)`.
    const DESCRIPTION: &'static str;
}

/// A comparison function over objects exposing [`Attributes`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparator {
    attributes: Vec<Attribute>,
    default_order: SortOrder,
    type_guard: TypeGuard,
}

impl Comparator {
    pub fn builder() -> ComparatorBuilder {
        ComparatorBuilder::default()
    }

    /// Rebuild the ordering a type declared with `#[derive(Comparable)]`,
    /// guarded to that exact type.
    pub fn for_type<T: OrderedBy>() -> Result<Self, CompareError> {
        Self::builder()
            .attributes(T::ORDER_BY.iter().map(|&(name, order)| (name, order)))
            .type_guard(TypeGuard::of::<T>())
            .build()
    }

    /// Compare `a` against `b`, attribute by attribute.
    pub fn compare(&self, a: &dyn Attributes, b: &dyn Attributes) -> Result<Ordering, CompareError> {
        self.type_guard.check(a, b)?;

        for attribute in &self.attributes {
            let ordering = attribute.compare(a, b)?;
            if ordering != Ordering::Equal {
                trace!(attribute = attribute.name(), ?ordering, "comparison decided");
                return Ok(ordering);
            }
        }

        Ok(Ordering::Equal)
    }

    /// Stable sort of `items`. On the first comparison error the error is
    /// returned and `items` is left untouched.
    pub fn sort<T: Attributes>(&self, items: &mut [T]) -> Result<(), CompareError> {
        let order = self.sorted_indices(items)?;
        apply_order(items, order);
        Ok(())
    }

    /// Bottom-up merge sort over indices, so a failed comparison can abort
    /// without leaving a half-sorted slice behind.
    fn sorted_indices<T: Attributes>(&self, items: &[T]) -> Result<Vec<usize>, CompareError> {
        let len = items.len();
        let mut order: Vec<usize> = (0..len).collect();
        let mut merged = Vec::with_capacity(len);
        let mut width = 1;

        while width < len {
            merged.clear();

            for start in (0..len).step_by(2 * width) {
                let mid = (start + width).min(len);
                let end = (start + 2 * width).min(len);
                let (mut left, mut right) = (start, mid);

                while left < mid && right < end {
                    // Ties keep the left run first.
                    if self.compare(&items[order[left]], &items[order[right]])? == Ordering::Greater {
                        merged.push(order[right]);
                        right += 1;
                    } else {
                        merged.push(order[left]);
                        left += 1;
                    }
                }

                merged.extend_from_slice(&order[left..mid]);
                merged.extend_from_slice(&order[right..end]);
            }

            core::mem::swap(&mut order, &mut merged);
            width *= 2;
        }

        Ok(order)
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn default_order(&self) -> SortOrder {
        self.default_order
    }

    pub fn type_guard(&self) -> &TypeGuard {
        &self.type_guard
    }

    /// Operating on a single attribute.
    pub fn is_single(&self) -> bool {
        self.attributes.len() == 1
    }

    /// Operating on many attributes. Complement of [`Comparator::is_single`].
    pub fn is_many(&self) -> bool {
        self.attributes.len() > 1
    }

    pub fn has_type_guard(&self) -> bool {
        self.type_guard.is_guarded()
    }

    pub fn is_same_type_guard(&self) -> bool {
        self.type_guard.is_same_type()
    }

    pub fn is_specific_type_guard(&self) -> bool {
        self.type_guard.is_specific()
    }
}

/// Move `items[order[k]]` to position `k`, following each permutation cycle.
fn apply_order<T>(items: &mut [T], mut order: Vec<usize>) {
    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            items.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let many = self.is_many();
        let list: Vec<String> = self
            .attributes
            .iter()
            .map(|attribute| attribute.describe(many, self.default_order))
            .collect();

        if many {
            write!(
                f,
                "Dux::Comparable([{}], default_order: {})",
                list.join(", "),
                self.default_order
            )
        } else {
            write!(f, "Dux::Comparable({})", list.join(", "))
        }
    }
}

/// Options for [`Comparator::builder`].
#[derive(Clone, Debug, Default)]
pub struct ComparatorBuilder {
    specs: Vec<AttributeSpec>,
    sort_order: Option<String>,
    type_guard: TypeGuard,
}

impl ComparatorBuilder {
    pub fn attribute(mut self, spec: impl Into<AttributeSpec>) -> Self {
        self.specs.push(spec.into());
        self
    }

    pub fn attributes<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AttributeSpec>,
    {
        self.specs.extend(specs.into_iter().map(Into::into));
        self
    }

    /// Order applied to bare attribute names. Defaults to ascending.
    pub fn sort_order(mut self, order: impl AsRef<str>) -> Self {
        self.sort_order = Some(order.as_ref().into());
        self
    }

    /// Accepts a [`TypeGuard`] or a `bool` (`true` = same type).
    pub fn type_guard(mut self, guard: impl Into<TypeGuard>) -> Self {
        self.type_guard = guard.into();
        self
    }

    pub fn type_guard_named(mut self, name: impl Into<String>) -> Self {
        self.type_guard = TypeGuard::named(name);
        self
    }

    pub fn build(self) -> Result<Comparator, CompareError> {
        let mut default_order = match &self.sort_order {
            Some(token) => token.parse()?,
            None => SortOrder::default(),
        };

        if self.specs.is_empty() {
            return Err(CompareError::NoAttributes);
        }

        let attributes = self
            .specs
            .into_iter()
            .map(|spec| spec.parse(default_order))
            .collect::<Result<Vec<_>, _>>()?;

        if let [only] = attributes.as_slice() {
            default_order = only.order();
        }

        debug!(
            attributes = attributes.len(),
            %default_order,
            type_guard = %self.type_guard,
            "built comparator"
        );

        Ok(Comparator {
            attributes,
            default_order,
            type_guard: self.type_guard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn apply_order_follows_cycles() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        apply_order(&mut items, vec![1, 2, 0, 4, 3]);
        assert_eq!(items, ['b', 'c', 'a', 'e', 'd']);
    }

    #[test]
    fn apply_order_keeps_identity() {
        let mut items = vec![3, 1, 2];
        apply_order(&mut items, vec![0, 1, 2]);
        assert_eq!(items, [3, 1, 2]);
    }
}
