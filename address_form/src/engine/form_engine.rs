// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{FieldProps, FieldRenderer, SchemaProvider, normalize_country_code};
use crate::{error::AddressFormError,
            format_parser::parse_format_template,
            reconciler::{AddressValue, reconcile},
            resolver::{Requiredness, ResolvedField, resolve_fields},
            schema::{CountryAddressSchema, FieldKey, RawCountrySchema},
            zone::validate_selection};

/// Cancellation token for one schema fetch. Issued by
/// [`AddressForm::begin_country_change`]; only the ticket whose generation is
/// still current when [`AddressForm::apply`] runs can affect the form. A
/// ticket that is simply dropped (unmount, rapid re-selection) has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    country_code: String,
    provider_code: String,
    locale: String,
}

impl FetchTicket {
    /// The country code as the caller selected it.
    pub fn country_code(&self) -> &str { &self.country_code }

    /// The code the provider is actually queried with (after territory
    /// normalization).
    pub fn provider_code(&self) -> &str { &self.provider_code }

    pub fn locale(&self) -> &str { &self.locale }
}

/// What one successful country change hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryChange {
    /// The country code as the caller selected it.
    pub country_code: String,

    /// Render-ready field descriptors, in resolution order.
    pub fields: Vec<ResolvedField>,

    /// The previous value pruned to the new field set, with a stale zone
    /// selection cleared.
    pub value: AddressValue,

    /// `true` when a previously chosen zone no longer appears in the new
    /// option list and was cleared to `None`. The caller must propagate this
    /// as an explicit field update.
    pub zone_cleared: bool,

    /// `true` when [`Self::value`] differs meaningfully from the previous
    /// value (compared via canonical serialization). Callers can skip
    /// redundant downstream updates when this is `false`.
    pub value_changed: bool,
}

/// The country-change cycle: `Idle → Loading → {Resolved | Failed}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// No country selected; the pipeline does not run and the renderer shows
    /// nothing.
    #[default]
    Idle,

    /// A schema fetch is in flight.
    Loading {
        generation: u64,
        country_code: String,
    },

    /// The pipeline completed; the form is render-ready.
    Resolved(CountryChange),

    /// The fetch (or boundary validation) failed. No partial field list is
    /// surfaced; the caller falls back to an unstructured address input.
    Failed {
        country_code: String,
        error: AddressFormError,
    },
}

/// Outcome of applying one fetch result to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(CountryChange),
    Failed(AddressFormError),
    /// The ticket was superseded by a newer country/locale selection before
    /// its result arrived. Dropped silently; the form is unchanged.
    Stale,
}

/// The address form engine.
///
/// Owns the state machine and the generation counter, and drives the full
/// pipeline on every country change:
///
/// ```text
/// country code → normalize → SchemaProvider → validate → parse format
///     → resolve fields (+ zone options) → reconcile previous value
///     → CountryChange {fields, pruned value}
/// ```
///
/// All state changes are communicated upward through [`ApplyOutcome`]; the
/// engine never persists caller state. The caller supplies the current
/// country code and its current [`AddressValue`] snapshot, and merges field
/// edits itself via [`AddressValue::with_field`].
///
/// # Stale results
///
/// Only the result of the most recently initiated fetch may be applied. The
/// begin/fetch/apply split makes the ordering guarantee explicit:
///
/// - [`Self::begin_country_change`] bumps the generation and returns a
///   [`FetchTicket`].
/// - [`Self::fetch`] performs the provider call for a ticket.
/// - [`Self::apply`] compares the ticket's generation against the current
///   one and discards superseded results, success and failure alike, as
///   [`ApplyOutcome::Stale`].
///
/// [`Self::change_country`] composes the three for callers that cannot be
/// preempted mid-flight.
#[derive(Debug)]
pub struct AddressForm<P: SchemaProvider> {
    provider: P,
    locale: String,
    requiredness: Requiredness,
    generation: u64,
    state: FormState,
}

impl<P: SchemaProvider> AddressForm<P> {
    pub fn new(provider: P, locale: impl Into<String>) -> Self {
        Self {
            provider,
            locale: locale.into(),
            requiredness: Requiredness::default(),
            generation: 0,
            state: FormState::Idle,
        }
    }

    /// Override the required/optional flag globally (eg force everything
    /// optional for a "billing same as shipping" flow).
    #[must_use]
    pub fn with_requiredness(mut self, requiredness: Requiredness) -> Self {
        self.requiredness = requiredness;
        self
    }

    pub fn state(&self) -> &FormState { &self.state }

    pub fn locale(&self) -> &str { &self.locale }

    /// Change the label language. Field sets do not vary by locale, but
    /// labels do, so the caller re-drives the load cycle afterwards. Any
    /// fetch still in flight under the old locale is superseded.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        if locale != self.locale {
            self.locale = locale;
            self.generation += 1;
        }
    }

    /// Back to "no country selected". Any fetch still in flight is
    /// superseded and its eventual result will be discarded.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = FormState::Idle;
    }

    /// Start a country change. Puts the form into `Loading` and returns the
    /// ticket the eventual fetch result must be applied with.
    pub fn begin_country_change(&mut self, country_code: &str) -> FetchTicket {
        self.generation += 1;
        self.state = FormState::Loading {
            generation: self.generation,
            country_code: country_code.to_string(),
        };
        FetchTicket {
            generation: self.generation,
            country_code: country_code.to_string(),
            provider_code: normalize_country_code(country_code).to_string(),
            locale: self.locale.clone(),
        }
    }

    /// Perform the provider call for a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProviderError`] as the provider reported it; pass the
    /// whole `Result` to [`Self::apply`] rather than short-circuiting, so
    /// that failure handling and stale suppression stay in one place.
    pub async fn fetch(
        &self,
        ticket: &FetchTicket,
    ) -> Result<RawCountrySchema, crate::error::ProviderError> {
        self.provider
            .schema_for(&ticket.provider_code, &ticket.locale)
            .await
    }

    /// Apply one fetch result. Stale tickets are discarded without touching
    /// the form; current tickets transition to `Resolved` or `Failed`.
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<RawCountrySchema, crate::error::ProviderError>,
        previous: &AddressValue,
    ) -> ApplyOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                message = "Discarding superseded schema fetch result",
                country_code = %ticket.country_code,
                stale_generation = ticket.generation,
                current_generation = self.generation
            );
            return ApplyOutcome::Stale;
        }

        let raw = match result {
            Ok(raw) => raw,
            Err(provider_error) => return self.fail(ticket, provider_error.into()),
        };

        let schema = match CountryAddressSchema::try_from_raw(&ticket.country_code, raw)
        {
            Ok(schema) => schema,
            Err(schema_error) => return self.fail(ticket, schema_error.into()),
        };

        let change = run_pipeline(
            &ticket.country_code,
            &schema,
            self.requiredness,
            previous,
        );
        self.state = FormState::Resolved(change.clone());
        ApplyOutcome::Applied(change)
    }

    /// Begin + fetch + apply in one call, for callers that cannot be
    /// preempted while the fetch is in flight.
    pub async fn change_country(
        &mut self,
        country_code: &str,
        previous: &AddressValue,
    ) -> ApplyOutcome {
        let ticket = self.begin_country_change(country_code);
        let result = self.fetch(&ticket).await;
        self.apply(&ticket, result, previous)
    }

    /// Invoke the renderer once per resolved field, in resolution order,
    /// using the caller's current value snapshot. Renders nothing unless the
    /// form is `Resolved`.
    pub fn render(&self, value: &AddressValue, renderer: &mut impl FieldRenderer) {
        let FormState::Resolved(change) = &self.state else {
            return;
        };
        for field in &change.fields {
            renderer.render_field(FieldProps {
                key: field.key,
                label: &field.label,
                required: field.required,
                value: value.get(field.key),
                zone_options: field.zone_options.as_deref(),
            });
        }
    }

    fn fail(&mut self, ticket: &FetchTicket, error: AddressFormError) -> ApplyOutcome {
        tracing::warn!(
            message = "Country schema load failed",
            country_code = %ticket.country_code,
            error = %error
        );
        self.state = FormState::Failed {
            country_code: ticket.country_code.clone(),
            error: error.clone(),
        };
        ApplyOutcome::Failed(error)
    }
}

/// The synchronous half of a country change: parse → resolve → reconcile →
/// zone invalidation. Pure computation, no I/O.
fn run_pipeline(
    country_code: &str,
    schema: &CountryAddressSchema,
    requiredness: Requiredness,
    previous: &AddressValue,
) -> CountryChange {
    let parsed_keys = parse_format_template(&schema.format_template);
    let fields = resolve_fields(&parsed_keys, schema, requiredness);
    let mut value = reconcile(previous, &fields).into_owned();

    let mut zone_cleared = false;
    let zone_options = fields
        .iter()
        .find(|field| field.key == FieldKey::Zone)
        .and_then(|field| field.zone_options.as_deref());
    if let Some(options) = zone_options {
        let stale_zone = match value.get(FieldKey::Zone) {
            Some(current) if !current.is_empty() => {
                validate_selection(options, Some(current)).is_none()
            }
            _ => false,
        };
        if stale_zone {
            value = value.with_field(FieldKey::Zone, None);
            zone_cleared = true;
        }
    }

    let value_changed = value.to_canonical_string() != previous.to_canonical_string();
    CountryChange {
        country_code: country_code.to_string(),
        fields,
        value,
        zone_cleared,
        value_changed,
    }
}
