// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser,
          bytes::complete::{take_till, take_while1},
          sequence::preceded};

use crate::schema::{FieldKey, FieldKeyList};

/// Scan to the next maximal alphanumeric run, skipping the formatting and
/// punctuation characters between tokens (`{{`, `}}`, whitespace, commas,
/// underscores in literal text, and so on). Errors when no run remains.
fn next_token_run(input: &str) -> IResult<&str, &str> {
    preceded(
        take_till(char::is_alphanumeric),
        take_while1(char::is_alphanumeric),
    )
    .parse(input)
}

/// Extract the ordered field keys from a raw format template.
///
/// Raw tokens are the maximal alphanumeric runs of the template, taken left
/// to right. Runs that map to a [`FieldKey`] (see
/// [`FieldKey::from_template_token`]) are kept; every other run is discarded
/// and never rendered. A key's position is its first occurrence; later
/// duplicates neither move nor re-emit it.
///
/// An empty result is valid: a template with no recognized tokens means
/// "show no fields", not an error. (A *missing* template is rejected earlier,
/// at the provider boundary.)
pub fn parse_format_template(template: &str) -> FieldKeyList {
    let mut keys = FieldKeyList::new();
    let mut remainder = template;
    while let Ok((rest, run)) = next_token_run(remainder) {
        if let Some(key) = FieldKey::from_template_token(run) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        remainder = rest;
    }
    keys
}

#[cfg(test)]
mod tests_parse_format_template {
    use pretty_assertions::assert_eq;

    use super::parse_format_template;
    use crate::schema::FieldKey;

    #[test]
    fn test_recognized_tokens_in_first_occurrence_order() {
        let keys = parse_format_template("{{address1}} {{city}}, {{province}} {{zip}}");
        assert_eq!(
            keys.as_slice(),
            &[
                FieldKey::Street1,
                FieldKey::City,
                FieldKey::Zone,
                FieldKey::PostalCode
            ]
        );
    }

    #[test]
    fn test_unrecognized_tokens_are_discarded() {
        let keys = parse_format_template(
            "{{firstName}} {{lastName}}_{{company}}_{{address1}} {{address2}}_{{city}} \
             {{country}} {{province}} {{zip}}_{{phone}}",
        );
        assert_eq!(
            keys.as_slice(),
            &[
                FieldKey::Street1,
                FieldKey::Street2,
                FieldKey::City,
                FieldKey::Zone,
                FieldKey::PostalCode
            ]
        );
    }

    #[test]
    fn test_duplicate_token_keeps_first_position() {
        let keys = parse_format_template("{{zip}} {{city}} {{zip}}");
        assert_eq!(keys.as_slice(), &[FieldKey::PostalCode, FieldKey::City]);
    }

    #[test]
    fn test_template_with_no_recognized_tokens_is_empty() {
        let keys = parse_format_template("{{firstName}} {{lastName}} {{country}}");
        assert!(keys.is_empty());
    }

    #[test]
    fn test_empty_template_is_empty() {
        assert!(parse_format_template("").is_empty());
    }

    #[test]
    fn test_punctuation_only_template_is_empty() {
        assert!(parse_format_template("{} -- ,,, \n\n").is_empty());
    }

    #[test]
    fn test_tokens_survive_without_braces() {
        // The scanner keys off alphanumeric runs, not the delimiter syntax.
        let keys = parse_format_template("address1\ncity province zip");
        assert_eq!(
            keys.as_slice(),
            &[
                FieldKey::Street1,
                FieldKey::City,
                FieldKey::Zone,
                FieldKey::PostalCode
            ]
        );
    }

    #[test]
    fn test_digits_are_part_of_a_run() {
        // "address1" must scan as one run, not "address" + "1".
        let keys = parse_format_template("{{address1}}");
        assert_eq!(keys.as_slice(), &[FieldKey::Street1]);
    }
}
