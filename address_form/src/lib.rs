// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_address_form
//!
//! Country-aware postal address form resolution. Given a country code, this
//! crate determines which address fields apply, in what order, which are
//! required, what labels to show, and (for the zone field, ie the
//! state/province/region) which enumerated values are valid. When the
//! country changes, previously entered data is reconciled against the new
//! schema: fields that no longer apply are discarded, everything still valid
//! survives.
//!
//! Rendering, styling, localization catalogs, and transport are all external
//! collaborators. The crate consumes a [`SchemaProvider`] (async country
//! schema lookup) and drives a [`FieldRenderer`] (one callback per resolved
//! field); it owns nothing but the resolution pipeline itself.
//!
//! # Pipeline
//!
//! ```text
//! country code
//!     → normalize territory code          (engine::territory_remap)
//!     → SchemaProvider fetch              (async, generation-counted)
//!     → validate raw payload              (schema::CountryAddressSchema)
//!     → parse format template             (format_parser)
//!     → resolve field descriptors         (resolver)
//!     → build zone options                (zone)
//!     → reconcile previous value          (reconciler)
//!     → CountryChange {fields, value}     (engine)
//! ```
//!
//! Rapid country switching is safe: only the most recently initiated fetch
//! can be applied; superseded results (success or failure) are discarded.
//! See [`AddressForm`] for the state machine.
//!
//! # Example
//!
//! The synchronous pieces compose without an engine:
//!
//! ```
//! use r3bl_address_form::{FieldKey, ZoneEntry, build_zone_options,
//!                         parse_format_template, validate_selection};
//!
//! let keys = parse_format_template("{{address1}} {{city}}, {{province}} {{zip}}");
//! assert_eq!(
//!     keys.as_slice(),
//!     &[
//!         FieldKey::Street1,
//!         FieldKey::City,
//!         FieldKey::Zone,
//!         FieldKey::PostalCode
//!     ]
//! );
//!
//! let options = build_zone_options(&[ZoneEntry::new("ON", "Ontario")]);
//! assert_eq!(options[0].label, "Ontario - ON");
//!
//! // Zone selections match by name; anything else must be cleared.
//! assert_eq!(validate_selection(&options, Some("Ontario")), Some("Ontario"));
//! assert_eq!(validate_selection(&options, Some("Quebec")), None);
//! ```

// Attach.
pub mod engine;
pub mod error;
pub mod format_parser;
pub mod reconciler;
pub mod resolver;
pub mod schema;
pub mod test_fixtures;
pub mod zone;

// Re-export.
pub use engine::*;
pub use error::*;
pub use format_parser::*;
pub use reconciler::*;
pub use resolver::*;
pub use schema::*;
pub use zone::*;
