// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The country-change state machine that drives the whole pipeline:
//! fetch → validate → parse → resolve → reconcile, with stale-result
//! suppression via a generation counter. See [`AddressForm`].

// Attach sources.
pub mod field_renderer;
pub mod form_engine;
pub mod schema_provider;
pub mod territory_remap;

// Re-export.
pub use field_renderer::*;
pub use form_engine::*;
pub use schema_provider::*;
pub use territory_remap::*;
