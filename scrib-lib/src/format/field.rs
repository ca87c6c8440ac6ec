//! Per-field validation and normalization rules.
//!
//! Validators never fail the serialization - a value is either kept
//! (possibly normalized) or the whole field is dropped as if it had never
//! been set.

use std::borrow::Cow;

/// Lower bound of the year range a record can carry.
pub const MIN_REPRESENTABLE_YEAR: i64 = 1;

/// Upper bound of the year range a record can carry.
///
/// These bounds are a historical artifact: they are the limits of the
/// timestamp epoch representation an earlier date field type was backed by,
/// not a bibliographic rule. They are kept as named constants so the
/// serializer carries no date/time dependency to reproduce them.
pub const MAX_REPRESENTABLE_YEAR: i64 = 292_278_994;

/// A field left out of composed output, together with the value that was
/// rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedField {
    /// Lowercase name of the skipped field, or `cite` for a rejected
    /// citation key.
    pub name: String,
    /// The raw value that failed validation.
    pub value: String,
}

/// Outcome of validating a single field value.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Validated<'value> {
    /// Emit the field with this, possibly normalized, value.
    Keep(Cow<'value, str>),
    /// Leave the field out entirely.
    Drop,
}

/// Validates the value of a named field.
///
/// `year`, `number` and `pages` have their own rules, every other field has
/// the identity validator and is emitted exactly as stored.
pub(super) fn validate<'value>(name: &str, value: &'value str) -> Validated<'value> {
    match name {
        "year" => Validated::Keep(clamp_year(value)),
        "number" | "pages" if !is_digits(value) => Validated::Drop,
        _ => Validated::Keep(Cow::Borrowed(value)),
    }
}

/// A citation key is only emitted when it does not start with a decimal digit.
pub(super) fn valid_cite(cite: &str) -> bool {
    cite.chars().next().map_or(false, |c| !c.is_ascii_digit())
}

/// Non-numeric years, e.g. "in press", are legal and pass through unchanged.
/// Numeric years are clamped into the representable range.
fn clamp_year(value: &str) -> Cow<'_, str> {
    match value.parse::<i64>() {
        Ok(year) => {
            let year = year.clamp(MIN_REPRESENTABLE_YEAR, MAX_REPRESENTABLE_YEAR);
            Cow::Owned(year.to_string())
        }
        Err(_) => Cow::Borrowed(value),
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
