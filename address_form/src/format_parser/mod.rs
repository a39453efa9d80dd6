// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extracts the ordered list of semantic field tokens from a country's raw
//! format template. See [`parse_format_template`].

// Attach sources.
pub mod parse_format_template;

// Re-export.
pub use parse_format_template::*;
