// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::schema::ZoneEntry;

/// Maximum number of grapheme clusters of a zone name shown in an option
/// label before truncation kicks in.
pub const MAX_ZONE_LABEL_DISPLAY_LEN: usize = 30;

const TRUNCATION_MARKER: &str = "…";

/// One selectable zone, render-ready.
///
/// `value` is the zone *name*, not its code: the upstream schema identifies
/// zones by name in submitted values, so the name is the canonical match key
/// for [`validate_selection`]. `label` is the (possibly truncated) name
/// suffixed with the code for disambiguation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOption {
    pub value: String,
    pub label: String,
}

/// Truncate a zone name for display. Grapheme-cluster aware, so a multi-byte
/// or combining sequence never gets cut in half.
fn truncate_for_display(name: &str) -> Cow<'_, str> {
    let mut graphemes = name.graphemes(true);
    let truncated: String = graphemes
        .by_ref()
        .take(MAX_ZONE_LABEL_DISPLAY_LEN)
        .collect();
    if graphemes.next().is_none() {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{truncated}{TRUNCATION_MARKER}"))
    }
}

/// Build the sorted, deduplicated option list from raw zone entries.
///
/// Truncation is applied *before* sorting so the sort order reflects the
/// displayed text. The sort is ascending by label, case-insensitive, and
/// stable; re-running on the same input yields the same list every time.
pub fn build_zone_options(zones: &[ZoneEntry]) -> Vec<ZoneOption> {
    let mut options: Vec<ZoneOption> = zones
        .iter()
        .map(|zone| ZoneOption {
            value: zone.name.clone(),
            label: format!("{} - {}", truncate_for_display(&zone.name), zone.code),
        })
        .collect();
    options.sort_by_cached_key(|option| option.label.to_lowercase());
    options.dedup();
    options
}

/// Check a previously chosen zone value against a fresh option list.
///
/// Returns the value unchanged when some option's `value` matches it, and
/// `None` when the selection is no longer valid and must be cleared. Runs
/// whenever the option list changes (ie whenever the country changes), not
/// on every keystroke. An absent or empty current value is left alone.
pub fn validate_selection<'value>(
    options: &[ZoneOption],
    current_value: Option<&'value str>,
) -> Option<&'value str> {
    let current = current_value.filter(|value| !value.is_empty())?;
    options
        .iter()
        .any(|option| option.value == current)
        .then_some(current)
}
