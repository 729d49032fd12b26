//! Compile-time capability probes.
//!
//! `has_impl!` checks a single trait on a concrete type; `quacks!` (from the
//! `derive` feature) accepts boolean expressions over traits:
//!
//! ```ignore
//! use dux::quacks;
//!
//! assert!(quacks!(String: Clone & !Copy));
//! assert!(quacks!(i32: all(Copy, Ord), str: none(Clone, Copy)));
//! ```

/// Check if a concrete type implements a trait.
///
/// An inherent const on the probe shadows the fallback trait's const when
/// the bound holds. Generic parameters always report `false`.
///
/// ```
/// use dux::has_impl;
///
/// trait Quack {}
/// impl Quack for i32 {}
///
/// assert!(has_impl!(i32, Quack));
/// assert!(!has_impl!(String, Quack));
/// assert!(has_impl!(str, core::fmt::Display));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}
