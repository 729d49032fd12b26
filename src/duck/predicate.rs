//! Predicate combinators.
//!
//! A "duck" is any predicate over a value. Flocks combine ducks with
//! `all`, `any` or `none` semantics.

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::enums::{Enum, LazyEnum};
use crate::error::EnumError;

/// A boolean check over `T`.
pub trait Predicate<T: ?Sized> {
    fn test(&self, value: &T) -> bool;

    /// Erase the concrete predicate type so it can share a flock with others.
    fn into_duck<'a>(self) -> Duck<'a, T>
    where
        Self: Sized + Send + Sync + 'a,
        T: 'a,
    {
        Box::new(move |value: &T| self.test(value))
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// A boxed predicate.
pub type Duck<'a, T> = Box<dyn Fn(&T) -> bool + Send + Sync + 'a>;

/// How the ducks of a flock are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flock {
    /// Every duck must pass.
    All,
    /// At least one duck must pass.
    Any,
    /// No duck may pass.
    None,
}

impl Flock {
    pub fn as_str(self) -> &'static str {
        match self {
            Flock::All => "all",
            Flock::Any => "any",
            Flock::None => "none",
        }
    }

    pub fn evaluate<T, P>(self, ducks: &[P], value: &T) -> bool
    where
        T: ?Sized,
        P: Predicate<T>,
    {
        match self {
            Flock::All => ducks.iter().all(|duck| duck.test(value)),
            Flock::Any => ducks.iter().any(|duck| duck.test(value)),
            Flock::None => !ducks.iter().any(|duck| duck.test(value)),
        }
    }
}

static FLOCK_TYPES: LazyEnum = LazyEnum::new(|| Enum::new(["all", "any", "none"]));

impl FromStr for Flock {
    type Err = EnumError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let kind = FLOCK_TYPES.fetch(token)?;

        match kind.as_str() {
            Some("all") => Ok(Flock::All),
            Some("any") => Ok(Flock::Any),
            Some("none") => Ok(Flock::None),
            _ => Err(EnumError::NotFound(token.to_string())),
        }
    }
}

impl fmt::Display for Flock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of ducks combined by a [`Flock`] kind.
pub struct FlockOf<P> {
    kind: Flock,
    ducks: Vec<P>,
}

impl<P> FlockOf<P> {
    pub fn kind(&self) -> Flock {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.ducks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ducks.is_empty()
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for FlockOf<P> {
    fn test(&self, value: &T) -> bool {
        self.kind.evaluate(&self.ducks, value)
    }
}

impl<P> fmt::Debug for FlockOf<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlockOf")
            .field("kind", &self.kind)
            .field("ducks", &self.ducks.len())
            .finish()
    }
}

/// The negation of a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }
}

/// Combine `ducks` with the given semantics.
pub fn flock<P>(kind: Flock, ducks: impl IntoIterator<Item = P>) -> FlockOf<P> {
    FlockOf {
        kind,
        ducks: ducks.into_iter().collect(),
    }
}

/// Restrictive interface: every duck must pass.
pub fn all<P>(ducks: impl IntoIterator<Item = P>) -> FlockOf<P> {
    flock(Flock::All, ducks)
}

/// Permissive interface: at least one duck must pass.
pub fn any<P>(ducks: impl IntoIterator<Item = P>) -> FlockOf<P> {
    flock(Flock::Any, ducks)
}

/// Exclusive interface: no duck may pass.
pub fn none<P>(ducks: impl IntoIterator<Item = P>) -> FlockOf<P> {
    flock(Flock::None, ducks)
}

pub fn not<P>(duck: P) -> Not<P> {
    Not(duck)
}
