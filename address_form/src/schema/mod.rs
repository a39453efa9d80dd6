// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The data model for country address schemas, plus the provider boundary
//! where an untyped payload ([`RawCountrySchema`]) is validated into the
//! typed [`CountryAddressSchema`]. Nothing past that edge ever handles an
//! untyped blob.

// Attach sources.
pub mod country_schema;
pub mod field_key;
pub mod raw_schema;

// Re-export.
pub use country_schema::*;
pub use field_key::*;
pub use raw_schema::*;
