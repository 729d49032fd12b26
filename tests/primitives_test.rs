//! Tests for null objects and indifferent strings

use std::collections::{HashMap, HashSet};

use dux::{IndifferentString, NullObject, Symbol};

// =============================================================================
// NullObject
// =============================================================================

#[test]
fn test_null_objects_are_unique() {
    let first = NullObject::new();
    let second = NullObject::new();

    assert_ne!(first, second);
    assert_eq!(first, first.clone());
    assert_ne!(first.name(), second.name());
}

#[test]
fn test_default_name() {
    let null = NullObject::new();
    let id = null.inspect_id();

    assert!(id.starts_with("0x"));
    assert_eq!(id.len(), 16);
    assert_eq!(null.name(), format!("Dux::NullObject({id})"));
    assert_eq!(null.to_string(), null.name());
    assert_eq!(null.purpose(), "a null object");
}

#[test]
fn test_named_null_object() {
    let unset = NullObject::named("Config::UNSET").with_purpose("no timeout configured");
    let lookalike = NullObject::named("Config::UNSET");

    assert_eq!(unset.name(), "Config::UNSET");
    assert_eq!(unset.purpose(), "no timeout configured");
    assert_ne!(unset, lookalike);
    assert!(format!("{unset:?}").contains("Config::UNSET"));
}

#[test]
fn test_null_objects_as_keys() {
    let missing = NullObject::named("MISSING");
    let mut seen = HashSet::new();

    assert!(seen.insert(missing.clone()));
    assert!(!seen.insert(missing));
    assert!(seen.insert(NullObject::default()));
}

// =============================================================================
// IndifferentString
// =============================================================================

#[test]
fn test_string_symbol_equivalence() {
    let value = IndifferentString::new("foo");

    assert_eq!(value, "foo");
    assert_eq!(value, String::from("foo"));
    assert_eq!(value, Symbol::new("foo"));
    assert_eq!(Symbol::new("foo"), value);
    assert_eq!(value.to_symbol(), Symbol::from("foo"));
    assert_ne!(value, "Foo");
}

#[test]
fn test_lookup_by_either_form() {
    let mut map = HashMap::new();
    map.insert(IndifferentString::from(Symbol::new("size")), 3);

    assert_eq!(map.get("size"), Some(&3));
    assert_eq!(map.get(Symbol::new("size").as_str()), Some(&3));
    assert_eq!(map.get("color"), None);
}

#[test]
fn test_symbol_rendering() {
    let symbol = Symbol::new("asc");
    assert_eq!(format!("{symbol:?}"), ":asc");
    assert_eq!(symbol.to_string(), "asc");
    assert_eq!(IndifferentString::new(&symbol).into_string(), "asc");
}
