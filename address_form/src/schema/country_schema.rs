// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::{HashMap, HashSet},
          str::FromStr};

use super::{FieldKey, RawCountrySchema, ZoneEntry};
use crate::error::SchemaError;

/// The validated, typed country address schema. Built from a
/// [`RawCountrySchema`] at the provider boundary via [`Self::try_from_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryAddressSchema {
    /// Template whose tokens denote field order. Guaranteed present.
    pub format_template: String,

    /// Label per field key present in this country's format.
    pub labels: HashMap<FieldKey, String>,

    /// Fields that are not mandatory.
    pub optional_field_keys: HashSet<FieldKey>,

    /// Valid subdivision entries, in provider order. Empty when the country
    /// has no zone field (or the provider shipped none).
    pub zones: Vec<ZoneEntry>,
}

impl CountryAddressSchema {
    /// Validate and normalize a raw provider payload.
    ///
    /// Label and optional-key entries whose wire name is not a [`FieldKey`]
    /// are dropped with a debug event. A missing format template is the one
    /// hard failure: without it, field order cannot be determined.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingFormatTemplate`] when the payload has no
    /// format template.
    pub fn try_from_raw(
        country_code: &str,
        raw: RawCountrySchema,
    ) -> Result<Self, SchemaError> {
        let Some(format_template) = raw.format_template else {
            return Err(SchemaError::MissingFormatTemplate {
                country_code: country_code.to_string(),
            });
        };

        let mut labels = HashMap::new();
        for (raw_key, label) in raw.labels {
            match FieldKey::from_str(&raw_key) {
                Ok(key) => {
                    labels.insert(key, label);
                }
                Err(_) => {
                    tracing::debug!(
                        message = "Ignoring label for unrecognized field key",
                        raw_key = %raw_key,
                        country_code = %country_code
                    );
                }
            }
        }

        let mut optional_field_keys = HashSet::new();
        for raw_key in raw.optional_field_keys {
            match FieldKey::from_str(&raw_key) {
                Ok(key) => {
                    optional_field_keys.insert(key);
                }
                Err(_) => {
                    tracing::debug!(
                        message = "Ignoring optional flag for unrecognized field key",
                        raw_key = %raw_key,
                        country_code = %country_code
                    );
                }
            }
        }

        Ok(Self {
            format_template,
            labels,
            optional_field_keys,
            zones: raw.zones,
        })
    }
}
