//! Read-only alias → member mapping.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::ToString;

use crate::error::EnumError;
use crate::primitives::IndifferentString;

/// An indifferent, read-only map from aliases to canonical members.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasMap {
    mapping: BTreeMap<IndifferentString, IndifferentString>,
}

impl AliasMap {
    /// Validate `aliases` against `members`.
    ///
    /// Fails with [`EnumError::MemberAsAlias`] when a key is already a member,
    /// and [`EnumError::InvalidAliasTarget`] when a target is not one.
    pub(crate) fn new<I>(members: &BTreeSet<IndifferentString>, aliases: I) -> Result<Self, EnumError>
    where
        I: IntoIterator<Item = (IndifferentString, IndifferentString)>,
    {
        let mut mapping = BTreeMap::new();

        for (alias, target) in aliases {
            if members.contains(alias.as_str()) {
                return Err(EnumError::MemberAsAlias(alias.to_string()));
            }

            if !members.contains(target.as_str()) {
                return Err(EnumError::InvalidAliasTarget(target.to_string()));
            }

            mapping.insert(alias, target);
        }

        Ok(Self { mapping })
    }

    pub fn is_alias(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// The canonical member `key` points at.
    pub fn get(&self, key: &str) -> Option<&IndifferentString> {
        self.mapping.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IndifferentString, &IndifferentString)> {
        self.mapping.iter()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
