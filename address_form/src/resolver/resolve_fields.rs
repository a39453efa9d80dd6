// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Requiredness, ResolvedField};
use crate::{schema::{CountryAddressSchema, FieldKey},
            zone::build_zone_options};

/// Resolve parsed field keys into render-ready descriptors.
///
/// For each key in `parsed_keys`, in order:
/// - Look up its label. A key with no label cannot be rendered; it is a
///   schema inconsistency, logged and skipped, never fatal.
/// - Compute the required flag from the schema's optional set, unless the
///   caller overrides requiredness globally.
/// - For the zone key, attach the built option list (possibly empty).
///
/// Output order matches `parsed_keys` order exactly; identical inputs yield
/// identical output.
pub fn resolve_fields(
    parsed_keys: &[FieldKey],
    schema: &CountryAddressSchema,
    requiredness: Requiredness,
) -> Vec<ResolvedField> {
    parsed_keys
        .iter()
        .filter_map(|key| {
            let Some(label) = schema.labels.get(key) else {
                tracing::warn!(
                    message = "Dropping address field with no label in schema",
                    field_key = %key
                );
                return None;
            };
            let required = match requiredness {
                Requiredness::AllOptional => false,
                Requiredness::FromSchema => !schema.optional_field_keys.contains(key),
            };
            let zone_options =
                (*key == FieldKey::Zone).then(|| build_zone_options(&schema.zones));
            Some(ResolvedField {
                key: *key,
                label: label.clone(),
                required,
                zone_options,
            })
        })
        .collect()
}
