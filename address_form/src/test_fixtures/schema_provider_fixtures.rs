// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::{HashMap, HashSet},
          time::Duration};

use crate::{engine::SchemaProvider, error::ProviderError, schema::RawCountrySchema};

/// A scripted schema provider keyed by country code, with optional latency
/// and failure injection. Locale is accepted and ignored; the canned payloads
/// carry one label language.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaProvider {
    schemas: HashMap<String, RawCountrySchema>,
    failing: HashSet<String>,
    latency: Option<Duration>,
}

impl StaticSchemaProvider {
    pub fn new() -> Self { Self::default() }

    /// Register a schema payload under a country code.
    #[must_use]
    pub fn with_schema(mut self, country_code: &str, raw: RawCountrySchema) -> Self {
        self.schemas.insert(country_code.to_string(), raw);
        self
    }

    /// Make every request for `country_code` fail with a synthetic transport
    /// error.
    #[must_use]
    pub fn with_failure(mut self, country_code: &str) -> Self {
        self.failing.insert(country_code.to_string());
        self
    }

    /// Delay every response, for tests that need interleaved fetches.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

impl SchemaProvider for StaticSchemaProvider {
    async fn schema_for(
        &self,
        country_code: &str,
        _locale: &str,
    ) -> Result<RawCountrySchema, ProviderError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing.contains(country_code) {
            return Err(ProviderError::fetch(
                country_code,
                "synthetic transport failure",
            ));
        }
        self.schemas
            .get(country_code)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownCountry {
                country_code: country_code.to_string(),
            })
    }
}

#[cfg(test)]
mod tests_static_schema_provider {
    use pretty_assertions::assert_eq;

    use super::{SchemaProvider, StaticSchemaProvider};
    use crate::{error::ProviderError, test_fixtures::sample_schemas};

    #[tokio::test]
    async fn test_registered_schema_comes_back() {
        let provider =
            StaticSchemaProvider::new().with_schema("US", sample_schemas::us());
        let raw = provider.schema_for("US", "en").await.unwrap();
        assert!(raw.format_template.is_some());
    }

    #[tokio::test]
    async fn test_unregistered_country_is_unknown() {
        let provider = StaticSchemaProvider::new();
        let err = provider.schema_for("QQ", "en").await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::UnknownCountry {
                country_code: "QQ".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_failure_injection_wins_over_registration() {
        let provider = StaticSchemaProvider::new()
            .with_schema("US", sample_schemas::us())
            .with_failure("US");
        let err = provider.schema_for("US", "en").await.unwrap_err();
        assert!(matches!(err, ProviderError::Fetch { .. }));
    }
}
