//! Form - Field Specs, Draft Values and Validation
//!
//! Every entity form is described by a static list of [`FieldSpec`]s. The
//! modal edits a [`FormValues`] draft (raw strings keyed by field), which is
//! parsed into a typed form through a [`FormReader`].

use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;
use chrono::NaiveDate;

use super::record::{EntityKind, RecordId};
use super::status::{OfferingType, Status};

/// Date format used by every date field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const INVALID_NUMBER: &str = "validation.invalid_number";
pub const INVALID_DATE: &str = "validation.invalid_date";
pub const INVALID_CHOICE: &str = "validation.invalid_choice";
pub const OUT_OF_RANGE: &str = "validation.out_of_range";
pub const END_BEFORE_START: &str = "validation.end_before_start";

/// Fixed option sets for select fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSet {
    Status,
    Offering,
}

impl ChoiceSet {
    /// `(value, label_key)` pairs in display order
    pub fn options(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            ChoiceSet::Status => Status::all()
                .iter()
                .map(|s| (s.as_str(), s.label_key()))
                .collect(),
            ChoiceSet::Offering => OfferingType::all()
                .iter()
                .map(|t| (t.as_str(), t.label_key()))
                .collect(),
        }
    }
}

/// Input widget and constraints of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Decimal { min: f64, max: Option<f64> },
    Integer { min: i64 },
    Date,
    Choice(ChoiceSet),
    /// Select over the records of another store
    Reference(EntityKind),
}

impl FieldKind {
    /// Whether the field is edited through a free-text input
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            FieldKind::Text
                | FieldKind::TextArea
                | FieldKind::Decimal { .. }
                | FieldKind::Integer { .. }
                | FieldKind::Date
        )
    }
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label_key: &'static str,
    /// Message shown when the field is left empty
    pub required_key: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(
        key: &'static str,
        label_key: &'static str,
        required_key: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            key,
            label_key,
            required_key,
            kind,
        }
    }
}

/// Raw draft values of an open form, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: AHashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Trimmed value, `None` when missing or blank
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Untrimmed value for prefilling inputs
    pub fn raw(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message_key: &'static str,
}

/// All field errors of one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, keeping only the first one per field
    pub fn push(&mut self, field: &'static str, message_key: &'static str) {
        if self.for_field(field).is_none() {
            self.0.push(FieldError { field, message_key });
        }
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Blank text fails the field's required check
    pub fn require_text(&mut self, spec: &FieldSpec, value: &str) {
        if value.trim().is_empty() {
            self.push(spec.key, spec.required_key);
        }
    }

    /// Enforce the numeric bounds declared by the field kind
    pub fn check_bounds(&mut self, spec: &FieldSpec, value: f64) {
        let (min, max) = match spec.kind {
            FieldKind::Decimal { min, max } => (min, max),
            FieldKind::Integer { min } => (min as f64, None),
            _ => return,
        };
        if !value.is_finite() || value < min || max.is_some_and(|max| value > max) {
            self.push(spec.key, OUT_OF_RANGE);
        }
    }

    /// A period must not end before it starts
    pub fn check_period(&mut self, end_spec: &FieldSpec, start: NaiveDate, end: NaiveDate) {
        if end < start {
            self.push(end_spec.key, END_BEFORE_START);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", error.field, error.message_key)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Parses typed values out of a draft, collecting every failure
///
/// Accessors return a placeholder when the field is missing or malformed;
/// [`FormReader::finish`] discards the result if anything was recorded.
pub struct FormReader<'a> {
    values: &'a FormValues,
    errors: ValidationErrors,
}

impl<'a> FormReader<'a> {
    pub fn new(values: &'a FormValues) -> Self {
        Self {
            values,
            errors: ValidationErrors::new(),
        }
    }

    fn required(&mut self, spec: &FieldSpec) -> Option<&'a str> {
        let value = self.values.get(spec.key);
        if value.is_none() {
            self.errors.push(spec.key, spec.required_key);
        }
        value
    }

    fn parse<T: FromStr>(&mut self, spec: &FieldSpec, message_key: &'static str) -> Option<T> {
        let raw = self.required(spec)?;
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.errors.push(spec.key, message_key);
                None
            }
        }
    }

    pub fn text(&mut self, spec: &FieldSpec) -> String {
        self.required(spec).map(str::to_string).unwrap_or_default()
    }

    pub fn decimal(&mut self, spec: &FieldSpec) -> f64 {
        match self.parse::<f64>(spec, INVALID_NUMBER) {
            Some(value) if value.is_finite() => value,
            Some(_) => {
                self.errors.push(spec.key, INVALID_NUMBER);
                0.0
            }
            None => 0.0,
        }
    }

    pub fn integer(&mut self, spec: &FieldSpec) -> u32 {
        self.parse::<u32>(spec, INVALID_NUMBER).unwrap_or_default()
    }

    pub fn date(&mut self, spec: &FieldSpec) -> NaiveDate {
        let Some(raw) = self.required(spec) else {
            return NaiveDate::MIN;
        };
        NaiveDate::parse_from_str(raw, DATE_FORMAT).unwrap_or_else(|_| {
            self.errors.push(spec.key, INVALID_DATE);
            NaiveDate::MIN
        })
    }

    pub fn status(&mut self, spec: &FieldSpec) -> Status {
        self.parse::<Status>(spec, INVALID_CHOICE).unwrap_or_default()
    }

    pub fn offering(&mut self, spec: &FieldSpec) -> OfferingType {
        self.parse::<OfferingType>(spec, INVALID_CHOICE)
            .unwrap_or_default()
    }

    pub fn reference(&mut self, spec: &FieldSpec) -> RecordId {
        self.parse::<RecordId>(spec, INVALID_CHOICE)
            .unwrap_or(RecordId(0))
    }

    /// Hand back the typed value, or every error collected while reading
    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        self.errors.into_result().map(|_| value)
    }
}

/// Format a date the way every form and table shows it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldSpec = FieldSpec::new("name", "field.name", "required.name", FieldKind::Text);
    const RATE: FieldSpec = FieldSpec::new(
        "rate",
        "field.rate",
        "required.rate",
        FieldKind::Decimal {
            min: 0.0,
            max: Some(100.0),
        },
    );
    const DAY: FieldSpec = FieldSpec::new("day", "field.day", "required.day", FieldKind::Date);

    #[test]
    fn test_blank_values_count_as_missing() {
        let values = FormValues::new().with("name", "   ");
        assert_eq!(values.get("name"), None);
        assert!(values.is_empty());

        let mut reader = FormReader::new(&values);
        let _ = reader.text(&NAME);
        let errors = reader.finish(()).expect_err("blank name must fail");
        assert_eq!(
            errors.for_field("name").map(|e| e.message_key),
            Some("required.name")
        );
    }

    #[test]
    fn test_reader_collects_every_failure() {
        let values = FormValues::new().with("rate", "abc").with("day", "2024-13-01");
        let mut reader = FormReader::new(&values);
        let _ = reader.text(&NAME);
        let _ = reader.decimal(&RATE);
        let _ = reader.date(&DAY);
        let errors = reader.finish(()).expect_err("three failures");

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.for_field("rate").map(|e| e.message_key), Some(INVALID_NUMBER));
        assert_eq!(errors.for_field("day").map(|e| e.message_key), Some(INVALID_DATE));
    }

    #[test]
    fn test_bounds_and_period_checks() {
        let mut errors = ValidationErrors::new();
        errors.check_bounds(&RATE, 20.0);
        assert!(errors.is_empty());

        errors.check_bounds(&RATE, 120.0);
        errors.check_bounds(&RATE, -1.0);
        assert_eq!(errors.len(), 1, "only the first error per field is kept");

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
        let end = NaiveDate::from_ymd_opt(2023, 12, 31).expect("date");
        errors.check_period(&DAY, start, end);
        assert_eq!(errors.for_field("day").map(|e| e.message_key), Some(END_BEFORE_START));
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("date");
        assert_eq!(format_date(date), "2024-03-09");
    }
}
