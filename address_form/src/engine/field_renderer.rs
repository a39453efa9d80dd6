// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{schema::FieldKey, zone::ZoneOption};

/// Everything a renderer needs to draw one address field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProps<'render> {
    pub key: FieldKey,
    pub label: &'render str,
    pub required: bool,
    /// The current value for this field from the caller's snapshot, if any.
    pub value: Option<&'render str>,
    /// `Some` for the zone field only; may be empty.
    pub zone_options: Option<&'render [ZoneOption]>,
}

/// The pluggable form field renderer collaborator.
///
/// [`AddressForm::render`] invokes [`Self::render_field`] once per resolved
/// field, in resolution order. When the user edits a field, the caller merges
/// the new scalar value into its own snapshot with
/// [`AddressValue::with_field`] keyed by [`FieldProps::key`]; the core never
/// holds that state.
///
/// [`AddressForm::render`]: crate::AddressForm::render
/// [`AddressValue::with_field`]: crate::AddressValue::with_field
pub trait FieldRenderer {
    fn render_field(&mut self, props: FieldProps<'_>);
}
