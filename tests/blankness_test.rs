//! Tests for blankness checks

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use dux::{blankish, presentish, Blank, IndifferentString, NullObject, Symbol, Value};
use test_case::test_case;

// =============================================================================
// Text
// =============================================================================

#[test_case("" ; "empty")]
#[test_case(" " ; "space")]
#[test_case("\t\n\r " ; "mixed whitespace")]
#[test_case("\u{3000}" ; "unicode whitespace")]
fn test_blank_text(text: &str) {
    assert!(blankish(text));
    assert!(blankish(&text.to_string()));
    assert!(Symbol::new(text).is_blank());
    assert!(IndifferentString::new(text).is_blank());
}

#[test_case("a")]
#[test_case("  a  ")]
#[test_case("0")]
fn test_present_text(text: &str) {
    assert!(presentish(text));
    assert!(text.is_present());
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn test_booleans() {
    assert!(blankish(&false));
    assert!(presentish(&true));
}

#[test]
fn test_numbers_are_present() {
    assert!(presentish(&0));
    assert!(presentish(&0u64));
    assert!(presentish(&-1i8));
    assert!(presentish(&0.0));
    assert!(presentish(&'\0'));
}

#[test]
fn test_nan_is_blank() {
    assert!(blankish(&f64::NAN));
    assert!(blankish(&f32::NAN));
    assert!(presentish(&f64::INFINITY));
}

#[test]
fn test_unit_and_null_objects() {
    assert!(blankish(&()));
    assert!(blankish(&NullObject::new()));
    assert!(blankish(&NullObject::named("Config::UNSET")));
}

#[test]
fn test_options() {
    assert!(blankish(&None::<i32>));
    assert!(blankish(&Some("  ")));
    assert!(presentish(&Some(0)));
    assert!(blankish(&Some(None::<String>)));
}

#[test]
fn test_values() {
    assert!(Value::Nil.is_blank());
    assert!(Value::string(" ").is_blank());
    assert!(Value::symbol("foo").is_present());
}

// =============================================================================
// Collections
// =============================================================================

#[test]
fn test_sequences_of_blanks_are_blank() {
    assert!(blankish(&Vec::<i32>::new()));
    assert!(blankish(&vec![" ", "", "\n"]));
    assert!(blankish(&[None::<u8>, None]));
    assert!(blankish(&VecDeque::from([false, false])));
    assert!(blankish(&vec![vec![""], vec![]]));
    assert!(blankish(&[""][..]));
}

#[test]
fn test_sequences_with_content_are_present() {
    assert!(presentish(&vec!["", "a"]));
    assert!(presentish(&[0]));
    assert!(presentish(&Box::new(vec![Some(1)])));
}

#[test]
fn test_sets() {
    assert!(blankish(&HashSet::<String>::new()));
    assert!(blankish(&HashSet::from([""])));
    assert!(presentish(&HashSet::from(["a"])));
    assert!(blankish(&std::collections::BTreeSet::from([" "])));
}

#[test]
fn test_maps_are_blank_only_when_empty() {
    assert!(blankish(&HashMap::<String, String>::new()));
    assert!(blankish(&BTreeMap::<i32, i32>::new()));
    assert!(presentish(&HashMap::from([("", "")])));
    assert!(presentish(&BTreeMap::from([(0, ())])));
}
