// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::future::Future;

use crate::{error::ProviderError, schema::RawCountrySchema};

/// The external country address schema lookup service.
///
/// Locale travels as a per-call parameter; a provider handle carries no
/// mutable locale state. Label language varies by locale, the field set does
/// not.
///
/// The provider owns its own retry and timeout policy. The engine never
/// retries; a failed fetch surfaces as a load-failure signal so the caller
/// can fall back to an unstructured address input.
pub trait SchemaProvider {
    /// Fetch the raw address schema for one country, localized for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure or when the country
    /// code is unknown to the provider.
    fn schema_for(
        &self,
        country_code: &str,
        locale: &str,
    ) -> impl Future<Output = Result<RawCountrySchema, ProviderError>> + Send;
}
