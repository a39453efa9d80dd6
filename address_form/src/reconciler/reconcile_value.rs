// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use super::AddressValue;
use crate::{resolver::ResolvedField, schema::FieldKeyList};

/// Prune a previously entered address value to the keys present in a freshly
/// resolved field set.
///
/// When the previous value carries no extraneous key, the input is returned
/// as [`Cow::Borrowed`]: the identity-preserving fast path callers can use
/// to skip redundant downstream updates. Otherwise a filtered copy comes back
/// with the surviving values unchanged; the original is never mutated.
///
/// Runs once per country change, after resolution completes, before the value
/// is handed back to the caller. An empty previous value reconciles to itself
/// as a no-op.
pub fn reconcile<'previous>(
    previous: &'previous AddressValue,
    resolved_fields: &[ResolvedField],
) -> Cow<'previous, AddressValue> {
    let keep: FieldKeyList = resolved_fields.iter().map(|field| field.key).collect();

    if previous.keys().all(|key| keep.contains(&key)) {
        return Cow::Borrowed(previous);
    }

    let pruned: AddressValue = previous
        .iter()
        .filter(|(key, _)| keep.contains(key))
        .map(|(key, value)| (key, value.map(str::to_string)))
        .collect();
    Cow::Owned(pruned)
}

#[cfg(test)]
mod tests_reconcile {
    use std::borrow::Cow;

    use pretty_assertions::assert_eq;

    use super::reconcile;
    use crate::{reconciler::AddressValue, resolver::ResolvedField, schema::FieldKey};

    fn fields_for(keys: &[FieldKey]) -> Vec<ResolvedField> {
        keys.iter()
            .map(|key| ResolvedField {
                key: *key,
                label: key.wire_name().to_string(),
                required: true,
                zone_options: None,
            })
            .collect()
    }

    fn value_of(pairs: &[(FieldKey, &str)]) -> AddressValue {
        pairs
            .iter()
            .map(|(key, value)| (*key, Some((*value).to_string())))
            .collect()
    }

    #[test]
    fn test_extraneous_keys_are_pruned_and_survivors_kept() {
        let previous = value_of(&[
            (FieldKey::Street1, "1 Main St"),
            (FieldKey::Zone, "Ontario"),
            (FieldKey::PostalCode, "M5V 1J1"),
        ]);
        let fields = fields_for(&[FieldKey::Street1, FieldKey::City]);

        let pruned = reconcile(&previous, &fields);

        assert!(matches!(pruned, Cow::Owned(_)));
        assert_eq!(pruned.get(FieldKey::Street1), Some("1 Main St"));
        assert!(!pruned.contains_key(FieldKey::Zone));
        assert!(!pruned.contains_key(FieldKey::PostalCode));
        // The original snapshot is untouched.
        assert_eq!(previous.len(), 3);
    }

    #[test]
    fn test_conforming_value_takes_the_identity_fast_path() {
        let previous = value_of(&[(FieldKey::Street1, "1 Main St")]);
        let fields = fields_for(&[FieldKey::Street1, FieldKey::City]);

        let reconciled = reconcile(&previous, &fields);

        assert!(matches!(reconciled, Cow::Borrowed(_)));
        assert_eq!(*reconciled, previous);
    }

    #[test]
    fn test_empty_previous_value_is_a_no_op() {
        let previous = AddressValue::new();
        let reconciled = reconcile(&previous, &fields_for(&[FieldKey::City]));
        assert!(matches!(reconciled, Cow::Borrowed(_)));
        assert!(reconciled.is_empty());
    }

    #[test]
    fn test_reconcile_is_idempotent_under_canonical_serialization() {
        let previous = value_of(&[
            (FieldKey::Street1, "1 Main St"),
            (FieldKey::Zone, "Ontario"),
        ]);
        let fields = fields_for(&[FieldKey::Street1, FieldKey::Zone]);

        let once = reconcile(&previous, &fields).into_owned();
        let twice = reconcile(&once, &fields).into_owned();

        assert_eq!(
            previous.to_canonical_string(),
            once.to_canonical_string()
        );
        assert_eq!(once.to_canonical_string(), twice.to_canonical_string());
    }

    #[test]
    fn test_cleared_entries_survive_when_their_key_survives() {
        let previous = value_of(&[(FieldKey::City, "Lyon")])
            .with_field(FieldKey::Zone, None);
        let fields = fields_for(&[FieldKey::City, FieldKey::Zone]);

        let reconciled = reconcile(&previous, &fields);

        assert!(matches!(reconciled, Cow::Borrowed(_)));
        assert!(reconciled.contains_key(FieldKey::Zone));
    }
}
