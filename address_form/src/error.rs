// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the address form pipeline. See [`SchemaError`],
//! [`ProviderError`], and the umbrella [`AddressFormError`].
//!
//! Recoverable schema inconsistencies (a field key with no label, an empty
//! zone list) never surface here. They degrade inside the resolver with a
//! [`tracing`] event. Only a fetch failure or a truly malformed schema
//! (missing format template) becomes an explicit failure signal.
//!
//! All variants carry owned strings so the engine can hold the error in its
//! `Failed` state and hand a clone to the caller at the same time.

/// Malformed schema data from the provider. Not user-facing; the caller is
/// expected to treat this the same way as a fetch failure (fall back to a
/// free-text address input).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SchemaError {
    /// The provider payload has no format template, so field order cannot be
    /// determined. This is a collaborator contract violation, not a user
    /// error.
    #[error("country schema for {country_code} is missing its format template")]
    #[diagnostic(
        code(address_form::schema::missing_format_template),
        help(
            "The schema provider returned a malformed payload. \
             Verify the provider dataset for this country code."
        )
    )]
    MissingFormatTemplate {
        /// The country code the schema was requested for.
        country_code: String,
    },
}

/// Transient failure while fetching a country schema from the provider.
///
/// The core does not retry; retry/timeout policy belongs to the provider
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ProviderError {
    /// Network/service failure while talking to the provider.
    #[error("schema provider request failed for {country_code}: {message}")]
    #[diagnostic(
        code(address_form::provider::fetch_failed),
        help("Fall back to a free-text address input and let the user retry.")
    )]
    Fetch {
        country_code: String,
        /// Human readable description of the underlying transport failure.
        message: String,
    },

    /// The provider has no schema for this country code.
    #[error("schema provider does not recognize country code {country_code}")]
    #[diagnostic(code(address_form::provider::unknown_country))]
    UnknownCountry { country_code: String },
}

impl ProviderError {
    /// Wrap an arbitrary transport error into [`ProviderError::Fetch`].
    pub fn fetch(
        country_code: impl Into<String>,
        source: impl std::fmt::Display,
    ) -> Self {
        Self::Fetch {
            country_code: country_code.into(),
            message: source.to_string(),
        }
    }
}

/// Umbrella error surfaced by the form engine's `Failed` state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum AddressFormError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Provider(#[from] ProviderError),
}
