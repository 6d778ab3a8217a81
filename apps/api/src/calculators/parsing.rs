//! Shared numeric parsing and validation for calculator form fields.
//!
//! # Parsing policy
//! - Blank text (after trimming) is zero and never an error.
//! - Every character other than a digit, `.` or `-` is stripped (`$1,250,000` → `1250000`).
//! - Non-blank text that strips to nothing, or does not convert to a finite number,
//!   is a parse error for that field.
//! - Amounts above `MAX_FIELD_VALUE` are rejected so derived results stay finite.
//!
//! # Blocking
//! Any field error blocks every result of the calculator. `FieldReader::finish` only
//! runs the computation when no error was recorded.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("Enter a valid number")]
    NotANumber,

    #[error("Values cannot be negative")]
    Negative,

    #[error("Must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },

    #[error("Values above {max} are not supported")]
    TooLarge { max: f64 },

    #[error("{0}")]
    Constraint(String),
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Largest amount any field accepts. Sums and products of a handful of fields
/// up to this size stay far inside `f64` range.
pub const MAX_FIELD_VALUE: f64 = 1e15;

/// Field name → first error recorded for that field.
pub type FieldErrors = BTreeMap<String, FieldError>;

/// Converts raw form text to a number under the shared parsing policy.
pub fn parse_number(raw: &str) -> Result<f64, FieldError> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return Err(FieldError::NotANumber);
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::NotANumber),
    }
}

/// Picks the submitted text for a field, falling back to the form default when
/// the field was not sent at all. A sent-but-blank field stays blank.
pub fn field_text<'a>(raw: &'a Option<String>, default: &'a str) -> &'a str {
    raw.as_deref().unwrap_or(default)
}

/// A form field as sent by the client: text, or a bare JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawField> for String {
    fn from(raw: RawField) -> Self {
        match raw {
            RawField::Text(text) => text,
            RawField::Number(number) => number.to_string(),
        }
    }
}

/// `deserialize_with` helper for optional form fields; `null` counts as missing.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawField>::deserialize(deserializer)?.map(String::from))
}

/// `deserialize_with` helper for repeated form fields.
pub fn texts_or_numbers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<RawField>::deserialize(deserializer)?
        .into_iter()
        .map(String::from)
        .collect())
}

/// Reads fields one by one, recording errors instead of stopping at the first.
#[derive(Debug, Default)]
pub struct FieldReader {
    errors: FieldErrors,
}

impl FieldReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a monetary amount, percentage or count that cannot be negative.
    pub fn non_negative(&mut self, name: &str, raw: &str) -> f64 {
        match parse_number(raw) {
            Ok(value) if value < 0.0 => {
                self.reject(name, FieldError::Negative);
                0.0
            }
            Ok(value) if value > MAX_FIELD_VALUE => {
                self.reject(
                    name,
                    FieldError::TooLarge {
                        max: MAX_FIELD_VALUE,
                    },
                );
                0.0
            }
            Ok(value) => value,
            Err(err) => {
                self.reject(name, err);
                0.0
            }
        }
    }

    /// Parses a value constrained to the closed range `[min, max]`.
    pub fn bounded(&mut self, name: &str, raw: &str, min: f64, max: f64) -> f64 {
        match parse_number(raw) {
            Ok(value) if value < min || value > max => {
                self.reject(name, FieldError::OutOfRange { min, max });
                0.0
            }
            Ok(value) => value,
            Err(err) => {
                self.reject(name, err);
                0.0
            }
        }
    }

    /// Records an error; the first error per field wins.
    pub fn reject(&mut self, name: &str, err: FieldError) {
        self.errors.entry(name.to_string()).or_insert(err);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Runs `compute` only when every field read so far was valid.
    pub fn finish<T>(self, compute: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.errors.is_empty() {
            Ok(compute())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(parse_number(""), Ok(0.0));
        assert_eq!(parse_number("   "), Ok(0.0));
    }

    #[test]
    fn test_strips_currency_formatting() {
        assert_eq!(parse_number("$1,250,000"), Ok(1_250_000.0));
        assert_eq!(parse_number(" 0.75 % "), Ok(0.75));
    }

    #[test]
    fn test_keeps_minus_sign() {
        assert_eq!(parse_number("-500"), Ok(-500.0));
    }

    #[test]
    fn test_letters_only_is_parse_error() {
        assert_eq!(parse_number("abc"), Err(FieldError::NotANumber));
    }

    #[test]
    fn test_malformed_numbers_are_parse_errors() {
        assert_eq!(parse_number("1.2.3"), Err(FieldError::NotANumber));
        assert_eq!(parse_number("-"), Err(FieldError::NotANumber));
        assert_eq!(parse_number("10-5"), Err(FieldError::NotANumber));
    }

    #[test]
    fn test_overflow_is_not_finite() {
        let huge = "9".repeat(400);
        assert_eq!(parse_number(&huge), Err(FieldError::NotANumber));
    }

    #[test]
    fn test_field_text_prefers_submitted_value() {
        assert_eq!(field_text(&Some("5".to_string()), "20"), "5");
        assert_eq!(field_text(&Some(String::new()), "20"), "");
        assert_eq!(field_text(&None, "20"), "20");
    }

    #[test]
    fn test_reader_collects_errors_per_field() {
        let mut reader = FieldReader::new();
        assert_eq!(reader.non_negative("a", "-1"), 0.0);
        reader.non_negative("b", "xyz");
        reader.bounded("c", "150", 0.0, 100.0);
        assert_eq!(reader.non_negative("d", "42"), 42.0);

        let errors = reader.finish(|| ()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["a"], FieldError::Negative);
        assert_eq!(errors["b"], FieldError::NotANumber);
        assert_eq!(
            errors["c"],
            FieldError::OutOfRange {
                min: 0.0,
                max: 100.0
            }
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut reader = FieldReader::new();
        assert_eq!(reader.bounded("rate", "0", 0.0, 100.0), 0.0);
        assert_eq!(reader.bounded("rate", "100", 0.0, 100.0), 100.0);
        assert!(!reader.has_errors());
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut reader = FieldReader::new();
        reader.reject("x", FieldError::Negative);
        reader.reject("x", FieldError::NotANumber);
        assert_eq!(reader.finish(|| ()).unwrap_err()["x"], FieldError::Negative);
    }

    #[test]
    fn test_finish_computes_only_when_clean() {
        let mut reader = FieldReader::new();
        let v = reader.non_negative("a", "3");
        assert_eq!(reader.finish(|| v * 2.0), Ok(6.0));
    }

    #[test]
    fn test_amount_above_limit_is_rejected() {
        let mut reader = FieldReader::new();
        assert_eq!(reader.non_negative("ok", "1,000,000,000,000,000"), 1e15);
        reader.non_negative("big", &"9".repeat(308));
        let errors = reader.finish(|| ()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors["big"], FieldError::TooLarge { .. }));
    }

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "text_or_number")]
        rate: Option<String>,
        #[serde(default, deserialize_with = "texts_or_numbers")]
        values: Vec<String>,
    }

    #[test]
    fn test_fields_accept_numbers_and_text() {
        let form: Form =
            serde_json::from_str(r#"{"rate": 20, "values": ["1,000", 2.5]}"#).unwrap();
        assert_eq!(form.rate.as_deref(), Some("20"));
        assert_eq!(form.values, vec!["1,000".to_string(), "2.5".to_string()]);

        let form: Form = serde_json::from_str(r#"{"rate": null}"#).unwrap();
        assert_eq!(form.rate, None);
        assert!(form.values.is_empty());
    }

    #[test]
    fn test_error_serializes_as_message() {
        let json = serde_json::to_value(FieldError::Negative).unwrap();
        assert_eq!(json, serde_json::json!("Values cannot be negative"));
    }
}
