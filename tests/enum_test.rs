//! Tests for Enum: membership, aliases and fallback resolution

use dux::{Enum, EnumError, ReturnType, Symbol, Value};
use proptest::prelude::*;

fn foo_bar_baz() -> dux::EnumBuilder {
    Enum::builder(["foo", "bar", "baz"])
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_empty_set_fails() {
    let err = Enum::new(Vec::<&str>::new()).unwrap_err();
    assert_eq!(err, EnumError::EmptySet);
}

#[test]
fn test_invalid_default_fails() {
    let err = foo_bar_baz().default("wrong").build().unwrap_err();
    assert!(matches!(err, EnumError::InvalidFallback(_)));
}

#[test]
fn test_nil_default_requires_allow_nil() {
    let err = foo_bar_baz().default_nil().build().unwrap_err();
    assert!(matches!(err, EnumError::InvalidFallback(_)));

    let enumeration = foo_bar_baz().default_nil().allow_nil(true).build().unwrap();
    assert!(enumeration.has_default());
    assert_eq!(enumeration.default(), Some(&Value::Nil));
}

#[test]
fn test_alias_key_cannot_be_member() {
    let err = foo_bar_baz().alias("foo", "bar").build().unwrap_err();
    assert_eq!(err, EnumError::MemberAsAlias("foo".into()));
}

#[test]
fn test_alias_target_must_be_member() {
    let err = foo_bar_baz().alias("qux", "quux").build().unwrap_err();
    assert_eq!(err, EnumError::InvalidAliasTarget("quux".into()));
}

#[test]
fn test_invalid_return_type_fails() {
    let err = foo_bar_baz().return_type_named("integer").build().unwrap_err();
    assert_eq!(err, EnumError::InvalidReturnType("integer".into()));
    assert!("string".parse::<ReturnType>().is_ok());
}

#[test]
fn test_display() {
    let enumeration = foo_bar_baz().build().unwrap();
    assert_eq!(enumeration.to_string(), "Dux::Enum([bar, baz, foo])");
}

// =============================================================================
// Membership
// =============================================================================

#[test]
fn test_works_with_strings_and_symbols() {
    let enumeration = foo_bar_baz().build().unwrap();

    for name in ["foo", "bar", "baz"] {
        assert!(enumeration.contains(name));
        assert!(enumeration.contains(Symbol::new(name)));
        assert!(enumeration.matches(String::from(name)));
    }

    assert!(!enumeration.contains("qux"));
    assert!(!enumeration.contains("FOO"));
}

#[test]
fn test_aliases_are_not_members() {
    let enumeration = Enum::builder(["asc", "desc"])
        .aliases([("ascending", "asc"), ("descending", "desc")])
        .build()
        .unwrap();

    assert!(enumeration.is_alias("ascending"));
    assert!(!enumeration.contains("ascending"));
    assert!(!enumeration.is_alias("asc"));
    assert_eq!(enumeration.aliases().len(), 2);
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_fetch_valid_value() {
    let enumeration = foo_bar_baz().build().unwrap();
    assert_eq!(enumeration.fetch("foo").unwrap(), Value::symbol("foo"));
}

#[test]
fn test_fetch_invalid_value_fails() {
    let enumeration = foo_bar_baz().build().unwrap();
    assert_eq!(
        enumeration.fetch("wrong").unwrap_err(),
        EnumError::NotFound("wrong".into())
    );
}

#[test]
fn test_fallback_is_used() {
    let enumeration = foo_bar_baz().build().unwrap();
    assert_eq!(
        enumeration.fetch_or("wrong", Symbol::new("foo")).unwrap(),
        Value::symbol("foo")
    );
}

#[test]
fn test_invalid_fallback_fails() {
    let enumeration = foo_bar_baz().build().unwrap();
    let err = enumeration.fetch_or("wrong", Symbol::new("very_wrong")).unwrap_err();
    assert!(matches!(err, EnumError::InvalidFallback(_)));
    assert!(err.to_string().contains("fallback"));
}

#[test]
fn test_precedence_fallback_over_default() {
    let enumeration = foo_bar_baz().default(Symbol::new("foo")).build().unwrap();

    assert_eq!(enumeration.fetch("wrong").unwrap(), Value::symbol("foo"));
    assert_eq!(
        enumeration.fetch_or("wrong", Symbol::new("bar")).unwrap(),
        Value::symbol("bar")
    );
    assert!(matches!(
        enumeration.fetch_or("wrong", Symbol::new("nonmember")),
        Err(EnumError::InvalidFallback(_))
    ));
}

#[test]
fn test_fallback_is_returned_verbatim() {
    let enumeration = foo_bar_baz().return_type(ReturnType::Symbol).build().unwrap();

    let value = enumeration.fetch_or("wrong", "bar").unwrap();
    assert_eq!(value, Value::string("bar"));
    assert!(value.is_string());
}

#[test]
fn test_nil_fallback() {
    let strict = foo_bar_baz().build().unwrap();
    assert!(matches!(
        strict.fetch_or("wrong", Value::Nil),
        Err(EnumError::InvalidFallback(_))
    ));

    let lenient = foo_bar_baz().allow_nil(true).build().unwrap();
    assert_eq!(lenient.fetch_or("wrong", Value::Nil).unwrap(), Value::Nil);
}

#[test]
fn test_default_beats_callback() {
    let enumeration = foo_bar_baz().default("baz").build().unwrap();
    let value = enumeration
        .fetch_or_else("wrong", |_| Value::string("from callback"))
        .unwrap();
    assert_eq!(value, Value::symbol("baz"));
}

#[test]
fn test_callback_replaces_not_found() {
    let enumeration = foo_bar_baz().build().unwrap();

    let value = enumeration
        .fetch_or_else("wrong", |missing| Value::string(format!("no {missing}")))
        .unwrap();
    assert_eq!(value, Value::string("no wrong"));

    let callback = |missing: &str| Value::symbol(missing);
    let value = enumeration.resolve("other", None, Some(&callback)).unwrap();
    assert_eq!(value, Value::symbol("other"));
}

#[test]
fn test_callback_not_used_for_matches() {
    let enumeration = foo_bar_baz().build().unwrap();
    let value = enumeration
        .fetch_or_else("bar", |_| panic!("callback should not run"))
        .unwrap();
    assert_eq!(value, Value::symbol("bar"));
}

#[test]
fn test_return_types() {
    let strings = foo_bar_baz().return_type(ReturnType::String).build().unwrap();
    assert_eq!(strings.fetch(Symbol::new("foo")).unwrap(), Value::string("foo"));

    let symbols = foo_bar_baz().return_type_named("symbol").build().unwrap();
    assert_eq!(symbols.fetch("foo").unwrap(), Value::symbol("foo"));
    assert!(symbols.fetch("foo").unwrap().is_symbol());
}

#[test]
fn test_alias_resolves_in_return_type() {
    let enumeration = Enum::builder(["asc", "desc"])
        .alias("descending", "desc")
        .return_type(ReturnType::String)
        .build()
        .unwrap();

    assert_eq!(enumeration.fetch("descending").unwrap(), Value::string("desc"));
}

// =============================================================================
// Properties
// =============================================================================

fn members() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..8)
}

proptest! {
    #[test]
    fn prop_contains_every_member(values in members(), outsider in "[A-Z]{1,8}") {
        let enumeration = Enum::new(&values).unwrap();

        for value in &values {
            prop_assert!(enumeration.contains(value));
        }
        prop_assert!(!enumeration.contains(&outsider));
    }

    #[test]
    fn prop_alias_resolves_like_target(values in members(), alias in "[A-Z]{1,8}", pick in any::<prop::sample::Index>()) {
        let target = pick.get(&values).clone();
        let enumeration = Enum::builder(&values).alias(&alias, &target).build().unwrap();

        prop_assert_eq!(enumeration.fetch(&alias).unwrap(), enumeration.fetch(&target).unwrap());
    }

    #[test]
    fn prop_member_alias_always_fails(values in members(), pick in any::<prop::sample::Index>()) {
        let member = pick.get(&values).clone();
        let err = Enum::builder(&values).alias(&member, &member).build().unwrap_err();

        prop_assert_eq!(err, EnumError::MemberAsAlias(member));
    }

    #[test]
    fn prop_resolve_is_idempotent(values in members(), probe in "[a-z]{1,8}") {
        let enumeration = Enum::builder(&values).default(values[0].as_str()).build().unwrap();

        prop_assert_eq!(enumeration.fetch(&probe), enumeration.fetch(&probe));
    }
}
