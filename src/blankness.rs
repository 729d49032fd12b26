//! Semantic emptiness checks.
//!
//! A value is *blank* when it carries no meaningful content: `None`,
//! `false`, NaN, empty or whitespace-only text, empty maps, and sequences
//! whose elements are all blank. Everything else is *present*.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;

use crate::primitives::{IndifferentString, NullObject, Symbol};

/// Values that can report whether they are semantically empty.
pub trait Blank {
    fn is_blank(&self) -> bool;

    /// Boolean complement of [`Blank::is_blank`].
    fn is_present(&self) -> bool {
        !self.is_blank()
    }
}

/// Check if a value is semantically empty.
pub fn blankish<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

/// Boolean complement of [`blankish`].
pub fn presentish<T: Blank + ?Sized>(value: &T) -> bool {
    !value.is_blank()
}

fn blank_text(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        blank_text(self)
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        blank_text(self)
    }
}

impl Blank for Symbol {
    fn is_blank(&self) -> bool {
        blank_text(self.as_str())
    }
}

impl Blank for IndifferentString {
    fn is_blank(&self) -> bool {
        blank_text(self)
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl Blank for () {
    fn is_blank(&self) -> bool {
        true
    }
}

impl Blank for NullObject {
    fn is_blank(&self) -> bool {
        true
    }
}

impl Blank for f32 {
    fn is_blank(&self) -> bool {
        self.is_nan()
    }
}

impl Blank for f64 {
    fn is_blank(&self) -> bool {
        self.is_nan()
    }
}

macro_rules! present_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    false
                }
            }
        )*
    };
}

present_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

// Sequences are blank when empty or when every element is blank.
impl<T: Blank> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.iter().all(Blank::is_blank)
    }
}

impl<T: Blank, const N: usize> Blank for [T; N] {
    fn is_blank(&self) -> bool {
        self.iter().all(Blank::is_blank)
    }
}

impl<T: Blank> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.iter().all(Blank::is_blank)
    }
}

impl<T: Blank> Blank for VecDeque<T> {
    fn is_blank(&self) -> bool {
        self.iter().all(Blank::is_blank)
    }
}

impl<T: Blank> Blank for BTreeSet<T> {
    fn is_blank(&self) -> bool {
        self.iter().all(Blank::is_blank)
    }
}

// Maps are blank only when empty.
impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Blank for std::collections::HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(feature = "std")]
impl<T: Blank, S> Blank for std::collections::HashSet<T, S> {
    fn is_blank(&self) -> bool {
        self.iter().all(Blank::is_blank)
    }
}
