// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// The fixed set of address fields this crate resolves. Any other token in a
/// raw format template is ignored.
///
/// The wire names (`street1`, `street2`, `city`, `postalCode`, `zone`) are
/// what appear in provider label maps, serialized [`AddressValue`] snapshots,
/// and canonical serialization key order.
///
/// [`AddressValue`]: crate::AddressValue
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum FieldKey {
    #[serde(rename = "street1")]
    #[strum(serialize = "street1")]
    Street1,

    #[serde(rename = "street2")]
    #[strum(serialize = "street2")]
    Street2,

    #[serde(rename = "city")]
    #[strum(serialize = "city")]
    City,

    #[serde(rename = "postalCode")]
    #[strum(serialize = "postalCode")]
    PostalCode,

    /// A country's subdivision field (state / province / region). The only
    /// field that can carry an enumerated option list.
    #[serde(rename = "zone")]
    #[strum(serialize = "zone")]
    Zone,
}

/// Inline list of field keys. There are at most [`FIELD_KEY_COUNT`] of them,
/// so this never spills to the heap.
pub type FieldKeyList = SmallVec<[FieldKey; FIELD_KEY_COUNT]>;

/// Number of [`FieldKey`] variants.
pub const FIELD_KEY_COUNT: usize = 5;

impl FieldKey {
    /// Map a raw format-template token to the field key it denotes.
    ///
    /// `address1`/`address2` are the street lines, `zip` is the postal code,
    /// and `province` is the zone. Returns `None` for tokens this crate does
    /// not resolve (eg `country`, `firstName`, `phone`), which are dropped
    /// from the parsed field order entirely.
    pub fn from_template_token(token: &str) -> Option<Self> {
        match token {
            "address1" => Some(Self::Street1),
            "address2" => Some(Self::Street2),
            "city" => Some(Self::City),
            "zip" => Some(Self::PostalCode),
            "province" => Some(Self::Zone),
            _ => None,
        }
    }

    /// The stable wire name for this key.
    pub fn wire_name(self) -> &'static str { self.into() }
}

#[cfg(test)]
mod tests_field_key {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::FieldKey;

    #[test]
    fn test_wire_names_round_trip() {
        for key in [
            FieldKey::Street1,
            FieldKey::Street2,
            FieldKey::City,
            FieldKey::PostalCode,
            FieldKey::Zone,
        ] {
            assert_eq!(FieldKey::from_str(key.wire_name()).unwrap(), key);
        }
    }

    #[test]
    fn test_postal_code_wire_name_is_camel_case() {
        assert_eq!(FieldKey::PostalCode.wire_name(), "postalCode");
        assert_eq!(FieldKey::PostalCode.to_string(), "postalCode");
    }

    #[test]
    fn test_template_tokens_map_to_keys() {
        assert_eq!(
            FieldKey::from_template_token("address1"),
            Some(FieldKey::Street1)
        );
        assert_eq!(
            FieldKey::from_template_token("address2"),
            Some(FieldKey::Street2)
        );
        assert_eq!(FieldKey::from_template_token("city"), Some(FieldKey::City));
        assert_eq!(
            FieldKey::from_template_token("zip"),
            Some(FieldKey::PostalCode)
        );
        assert_eq!(
            FieldKey::from_template_token("province"),
            Some(FieldKey::Zone)
        );
    }

    #[test]
    fn test_unrecognized_template_tokens_are_none() {
        for token in ["country", "firstName", "lastName", "company", "phone", ""] {
            assert_eq!(FieldKey::from_template_token(token), None);
        }
    }
}
