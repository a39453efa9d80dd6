// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One subdivision entry as the provider ships it. Immutable, externally
/// sourced. Two entries are not assumed unique by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub code: String,
    pub name: String,
}

impl ZoneEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// The untyped country schema payload exactly as the provider returns it.
///
/// This type exists only at the provider boundary. It is validated and
/// normalized into [`CountryAddressSchema`] before any other part of the
/// pipeline sees it.
///
/// Every member defaults so a sparse provider payload still deserializes;
/// the one thing validation insists on is the format template.
///
/// [`CountryAddressSchema`]: crate::CountryAddressSchema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCountrySchema {
    /// Template whose tokens denote field order, eg
    /// `"{{address1}} {{city}}, {{province}} {{zip}}"`.
    pub format_template: Option<String>,

    /// Human readable label per raw field key present in this country's
    /// format. Keys are wire names; unrecognized keys are dropped during
    /// validation.
    pub labels: HashMap<String, String>,

    /// Wire names of the fields that are not mandatory.
    pub optional_field_keys: Vec<String>,

    /// Valid subdivision entries. Present only when the country format
    /// includes a zone field.
    pub zones: Vec<ZoneEntry>,
}
