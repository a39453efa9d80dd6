// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{schema::FieldKey, zone::ZoneOption};

/// A fully resolved, render-ready descriptor for one address field.
///
/// Recomputed in full every time the country changes; never partially
/// patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub key: FieldKey,
    pub label: String,
    pub required: bool,
    /// `Some` exactly when `key` is [`FieldKey::Zone`]; the list itself may
    /// be empty when the provider shipped no zones (the renderer decides how
    /// to degrade).
    pub zone_options: Option<Vec<ZoneOption>>,
}

/// Caller-side override for the required/optional flag of every resolved
/// field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Requiredness {
    /// `required = !optional_field_keys.contains(key)`, per the schema.
    #[default]
    FromSchema,
    /// Force every field non-required regardless of the schema.
    AllOptional,
}
