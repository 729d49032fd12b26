//! Lookup results and the representation they are returned in.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::blankness::Blank;
use crate::error::EnumError;
use crate::primitives::{IndifferentString, Symbol};

/// A value produced by an enum lookup, or passed in as a fallback.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Nil,
    Symbol(Symbol),
    String(String),
}

impl Value {
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Value::Symbol(Symbol::new(name.as_ref()))
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// The text of a symbol or string, `None` for nil.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Nil => None,
            Value::Symbol(symbol) => Some(symbol.as_str()),
            Value::String(text) => Some(text),
        }
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<IndifferentString> for Value {
    fn from(value: IndifferentString) -> Self {
        Value::String(value.into_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<Symbol> for Value {
    fn eq(&self, other: &Symbol) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        self.as_str().is_none_or(Blank::is_blank)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Symbol(symbol) => write!(f, "{symbol:?}"),
            Value::String(text) => write!(f, "{text:?}"),
        }
    }
}

/// The representation lookups are returned in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReturnType {
    #[default]
    Symbol,
    String,
}

impl ReturnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnType::Symbol => "symbol",
            ReturnType::String => "string",
        }
    }

    pub(crate) fn render(self, text: &str) -> Value {
        match self {
            ReturnType::Symbol => Value::symbol(text),
            ReturnType::String => Value::string(text),
        }
    }
}

impl FromStr for ReturnType {
    type Err = EnumError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "symbol" => Ok(ReturnType::Symbol),
            "string" => Ok(ReturnType::String),
            other => Err(EnumError::InvalidReturnType(other.to_string())),
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
