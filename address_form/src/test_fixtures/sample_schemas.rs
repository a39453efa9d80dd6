// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Canned raw provider payloads, kept as JSON so fixtures exercise the same
//! deserialization path real payloads take.

use serde_json::json;

use crate::schema::RawCountrySchema;

fn from_json(payload: serde_json::Value) -> RawCountrySchema {
    serde_json::from_value(payload).expect("fixture payload must deserialize")
}

/// United States: zone field with enumerated states.
pub fn us() -> RawCountrySchema {
    from_json(json!({
        "formatTemplate": "{{address1}} {{city}}, {{province}} {{zip}}",
        "labels": {
            "street1": "Address",
            "city": "City",
            "zone": "State",
            "postalCode": "ZIP code"
        },
        "optionalFieldKeys": [],
        "zones": [
            { "code": "CA", "name": "California" },
            { "code": "NY", "name": "New York" },
            { "code": "TX", "name": "Texas" }
        ]
    }))
}

/// Canada: provinces, with an optional second street line.
pub fn ca() -> RawCountrySchema {
    from_json(json!({
        "formatTemplate": "{{address1}} {{address2}} {{city}} {{province}} {{zip}}",
        "labels": {
            "street1": "Address",
            "street2": "Apt, suite, etc.",
            "city": "City",
            "zone": "Province",
            "postalCode": "Postal code"
        },
        "optionalFieldKeys": ["street2"],
        "zones": [
            { "code": "AB", "name": "Alberta" },
            { "code": "ON", "name": "Ontario" },
            { "code": "QC", "name": "Quebec" }
        ]
    }))
}

/// Germany: postal code before city, no zone field.
pub fn de() -> RawCountrySchema {
    from_json(json!({
        "formatTemplate": "{{address1}} {{zip}} {{city}}",
        "labels": {
            "street1": "Straße und Hausnummer",
            "city": "Stadt",
            "postalCode": "PLZ"
        },
        "optionalFieldKeys": []
    }))
}

/// France: postal code before city, no zone field.
pub fn fr() -> RawCountrySchema {
    from_json(json!({
        "formatTemplate": "{{address1}} {{zip}} {{city}}",
        "labels": {
            "street1": "Adresse",
            "city": "Ville",
            "postalCode": "Code postal"
        },
        "optionalFieldKeys": []
    }))
}

/// The provider's generic international format (broad layout, free-text
/// city), served for territories outside the provider's dataset.
pub fn generic() -> RawCountrySchema {
    from_json(json!({
        "formatTemplate": "{{address1}} {{address2}} {{city}}",
        "labels": {
            "street1": "Address line 1",
            "street2": "Address line 2",
            "city": "City"
        },
        "optionalFieldKeys": ["street2"]
    }))
}

/// A malformed payload with no format template, for boundary-validation
/// tests.
pub fn missing_template() -> RawCountrySchema {
    from_json(json!({
        "labels": { "street1": "Address" }
    }))
}
