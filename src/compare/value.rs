//! Named, orderable attribute values exposed by comparable objects.

use alloc::boxed::Box;
use alloc::string::String;
use core::cmp::Ordering;

use crate::primitives::{IndifferentString, Symbol};

/// A borrowed attribute value.
///
/// Integers and floats compare numerically across kinds, `Nil` sorts before
/// everything, and values of unrelated kinds have no ordering.
#[derive(Clone, Copy, Debug)]
pub enum AttrValue<'a> {
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl AttrValue<'_> {
    pub fn is_nil(&self) -> bool {
        matches!(self, AttrValue::Nil)
    }

    /// Both integer kinds widened losslessly.
    fn integer(self) -> Option<i128> {
        match self {
            AttrValue::Int(value) => Some(i128::from(value)),
            AttrValue::UInt(value) => Some(i128::from(value)),
            _ => None,
        }
    }
}

impl PartialEq for AttrValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for AttrValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use AttrValue::*;

        match (*self, *other) {
            (Nil, Nil) => Some(Ordering::Equal),
            (Nil, _) => Some(Ordering::Less),
            (_, Nil) => Some(Ordering::Greater),
            (Bool(a), Bool(b)) => Some(a.cmp(&b)),
            (Char(a), Char(b)) => Some(a.cmp(&b)),
            (Str(a), Str(b)) => Some(a.cmp(b)),
            (Float(a), Float(b)) => a.partial_cmp(&b),
            (Float(a), b) => cmp_float_integer(a, b.integer()?),
            (a, Float(b)) => cmp_float_integer(b, a.integer()?).map(Ordering::reverse),
            (a, b) => Some(a.integer()?.cmp(&b.integer()?)),
        }
    }
}

/// 2^127, the first float past every `i128`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Exact float/integer comparison; no rounding of the integer side.
fn cmp_float_integer(float: f64, integer: i128) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I128_BOUND {
        return Some(Ordering::Greater);
    }
    if float < -I128_BOUND {
        return Some(Ordering::Less);
    }

    // Inside the bound the cast truncates exactly, and so does the way back.
    let whole = float as i128;
    let fraction = float - whole as f64;
    let ordering = whole.cmp(&integer).then(if fraction > 0.0 {
        Ordering::Greater
    } else if fraction < 0.0 {
        Ordering::Less
    } else {
        Ordering::Equal
    });

    Some(ordering)
}

/// Conversion into an [`AttrValue`].
pub trait ToAttrValue {
    fn to_attr_value(&self) -> AttrValue<'_>;
}

macro_rules! attr_values {
    ($variant:ident as $target:ty: $($ty:ty),* $(,)?) => {
        $(
            impl ToAttrValue for $ty {
                fn to_attr_value(&self) -> AttrValue<'_> {
                    AttrValue::$variant(*self as $target)
                }
            }
        )*
    };
}

attr_values!(Int as i64: i8, i16, i32, i64, isize);
attr_values!(UInt as u64: u8, u16, u32, u64, usize);
attr_values!(Float as f64: f32, f64);

impl ToAttrValue for bool {
    fn to_attr_value(&self) -> AttrValue<'_> {
        AttrValue::Bool(*self)
    }
}

impl ToAttrValue for char {
    fn to_attr_value(&self) -> AttrValue<'_> {
        AttrValue::Char(*self)
    }
}

impl ToAttrValue for () {
    fn to_attr_value(&self) -> AttrValue<'_> {
        AttrValue::Nil
    }
}

impl ToAttrValue for str {
    fn to_attr_value(&self) -> AttrValue<'_> {
        AttrValue::Str(self)
    }
}

impl ToAttrValue for String {
    fn to_attr_value(&self) -> AttrValue<'_> {
        AttrValue::Str(self)
    }
}

impl ToAttrValue for Symbol {
    fn to_attr_value(&self) -> AttrValue<'_> {
        AttrValue::Str(self.as_str())
    }
}

impl ToAttrValue for IndifferentString {
    fn to_attr_value(&self) -> AttrValue<'_> {
        AttrValue::Str(self.as_str())
    }
}

impl<T: ToAttrValue> ToAttrValue for Option<T> {
    fn to_attr_value(&self) -> AttrValue<'_> {
        self.as_ref().map_or(AttrValue::Nil, ToAttrValue::to_attr_value)
    }
}

impl<T: ToAttrValue + ?Sized> ToAttrValue for &T {
    fn to_attr_value(&self) -> AttrValue<'_> {
        (**self).to_attr_value()
    }
}

impl<T: ToAttrValue + ?Sized> ToAttrValue for Box<T> {
    fn to_attr_value(&self) -> AttrValue<'_> {
        (**self).to_attr_value()
    }
}

/// Objects that expose named attributes to a comparator.
///
/// Usually derived with `#[derive(Attributes)]`.
pub trait Attributes {
    /// Name used by type guards; defaults to [`core::any::type_name`].
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// The value of `name`, or `None` if this object has no such attribute.
    fn attribute(&self, name: &str) -> Option<AttrValue<'_>>;
}

impl<T: Attributes + ?Sized> Attributes for &T {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn attribute(&self, name: &str) -> Option<AttrValue<'_>> {
        (**self).attribute(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_kinds() {
        assert!(AttrValue::Int(-1) < AttrValue::UInt(0));
        assert!(AttrValue::UInt(3) > AttrValue::Int(2));
        assert_eq!(AttrValue::Int(2), AttrValue::Float(2.0));
        assert!(AttrValue::Float(1.5) < AttrValue::UInt(2));
    }

    #[test]
    fn large_integers_compare_exactly_against_floats() {
        let float = AttrValue::Float(9_007_199_254_740_992.0);
        assert!(AttrValue::Int(9_007_199_254_740_993) > float);
        assert!(float < AttrValue::UInt(9_007_199_254_740_993));
        assert_eq!(AttrValue::Int(9_007_199_254_740_992), float);
        assert!(AttrValue::Float(u64::MAX as f64) > AttrValue::UInt(u64::MAX));
        assert!(AttrValue::Float(f64::NEG_INFINITY) < AttrValue::Int(i64::MIN));
    }

    #[test]
    fn fractions_break_integer_ties() {
        assert!(AttrValue::Float(2.5) > AttrValue::Int(2));
        assert!(AttrValue::Float(-2.5) < AttrValue::Int(-2));
        assert!(AttrValue::Int(-3) < AttrValue::Float(-2.5));
        assert_eq!(AttrValue::Float(-0.0), AttrValue::UInt(0));
    }

    #[test]
    fn nil_sorts_first() {
        assert!(AttrValue::Nil < AttrValue::Str("a"));
        assert!(AttrValue::Int(i64::MIN) > AttrValue::Nil);
    }

    #[test]
    fn unrelated_kinds_are_incomparable() {
        assert_eq!(AttrValue::Str("1").partial_cmp(&AttrValue::Int(1)), None);
        assert_eq!(AttrValue::Float(f64::NAN).partial_cmp(&AttrValue::Float(1.0)), None);
    }

    #[test]
    fn options_map_to_nil() {
        assert!(None::<i32>.to_attr_value().is_nil());
        assert_eq!(Some(4u8).to_attr_value(), AttrValue::UInt(4));
    }
}
