// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test fixtures for exercising the form engine without a real schema
//! provider: a scripted [`StaticSchemaProvider`] and canned country payloads
//! in [`sample_schemas`].

// Attach sources.
pub mod sample_schemas;
pub mod schema_provider_fixtures;

// Re-export.
pub use schema_provider_fixtures::*;
