// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::FieldKey;

/// The user's current address input, keyed by [`FieldKey`].
///
/// Owned by the caller (the parent form). The core only reads it and proposes
/// pruned copies; it never mutates a snapshot in place. A key can be present
/// with an explicit `None` value ("cleared") or absent entirely; [`Self::get`]
/// treats both as no value.
///
/// The renderer's change contract is caller-side: when a field reports a new
/// scalar value, merge it with [`Self::with_field`], which returns a fresh
/// snapshot and leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressValue {
    entries: BTreeMap<FieldKey, Option<String>>,
}

impl AddressValue {
    pub fn new() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn len(&self) -> usize { self.entries.len() }

    /// The value entered for `key`, if any. An explicit `None` entry and an
    /// absent key both come back as `None`.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.entries.get(&key).and_then(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: FieldKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Keys present in this snapshot (including explicitly cleared ones).
    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (*key, value.as_deref()))
    }

    /// Return a new snapshot with `key` set to `value` (`None` records an
    /// explicit clear). The original is untouched.
    #[must_use]
    pub fn with_field(&self, key: FieldKey, value: Option<String>) -> Self {
        let mut next = self.clone();
        next.entries.insert(key, value);
        next
    }

    /// Canonical serialization for equality/diff checks: keys sorted
    /// lexicographically by wire name, non-null values joined with `\n`.
    /// Two snapshots with identical key/value pairs always serialize
    /// identically, regardless of insertion order.
    pub fn to_canonical_string(&self) -> String {
        let mut pairs: Vec<(&'static str, &str)> = self
            .entries
            .iter()
            .filter_map(|(key, value)| {
                value.as_deref().map(|value| (key.wire_name(), value))
            })
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
            .iter()
            .map(|(_, value)| *value)
            .collect::<Vec<&str>>()
            .join("\n")
    }
}

impl FromIterator<(FieldKey, Option<String>)> for AddressValue {
    fn from_iter<I: IntoIterator<Item = (FieldKey, Option<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
