//! Well-formedness checks for a submission body.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the body must be a non-empty JSON object, otherwise [`ValidationError::InvalidBody`];
//! 2. `faculty_name`, `course_code`, `rating` and `category` must be present and not
//!    falsy (absent, `null`, `false` or `""`), otherwise [`ValidationError::MissingFields`];
//! 3. `rating` must coerce to an integer in `1..=5`, otherwise [`ValidationError::InvalidRating`].
//!
//! Text fields that are present but are not JSON strings are rejected as
//! [`ValidationError::InvalidBody`].
use serde_json::{Map, Value};

use crate::ValidationError;

/// Fields that must be present and truthy.
pub const REQUIRED_FIELDS: [&str; 4] = ["faculty_name", "course_code", "rating", "category"];

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// Submission fields that passed validation, before redaction and truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    /// Instructor name as submitted.
    pub faculty_name: String,
    /// Course code as submitted.
    pub course_code: String,
    /// Rating in `1..=5`.
    pub rating: u8,
    /// Feedback category as submitted.
    pub category: String,
    /// Free-text comments, absent when not supplied.
    pub comments: Option<String>,
}

/// Validate a raw request body.
pub fn validate(body: &[u8]) -> Result<ValidatedFields, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::InvalidBody);
    }
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
        return Err(ValidationError::InvalidBody);
    };

    if REQUIRED_FIELDS.iter().any(|key| is_falsy(map.get(*key))) {
        return Err(ValidationError::MissingFields);
    }

    let rating = map
        .get("rating")
        .and_then(coerce_rating)
        .ok_or(ValidationError::InvalidRating)?;

    Ok(ValidatedFields {
        faculty_name: text_field(&map, "faculty_name")?,
        course_code: text_field(&map, "course_code")?,
        rating,
        category: text_field(&map, "category")?,
        comments: optional_text_field(&map, "comments")?,
    })
}

/// Coerce a JSON value to a rating.
///
/// Numbers and numeric strings are accepted as long as they are whole and
/// within `1..=5`; `4`, `4.0`, `"4"` and `" 4 "` all give `4`.
///
/// Booleans, arrays, objects and hexadecimal strings are rejected on purpose
/// even though loose numeric coercion would turn `true`, `[3]` or `"0x3"` into
/// a rating.
#[must_use]
pub fn coerce_rating(value: &Value) -> Option<u8> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if number.fract() != 0.0 || number < f64::from(MIN_RATING) || number > f64::from(MAX_RATING) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(number as u8)
}

fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

fn text_field(map: &Map<String, Value>, key: &str) -> Result<String, ValidationError> {
    match map.get(key) {
        Some(Value::String(text)) => Ok(text.clone()),
        _ => Err(ValidationError::InvalidBody),
    }
}

// Optional fields also treat numeric zero as absent.
fn optional_text_field(map: &Map<String, Value>, key: &str) -> Result<Option<String>, ValidationError> {
    let value = map.get(key);
    let zero = matches!(value, Some(Value::Number(number)) if number.as_f64() == Some(0.0));
    if zero || is_falsy(value) {
        return Ok(None);
    }
    match value {
        Some(Value::String(text)) => Ok(Some(text.clone())),
        _ => Err(ValidationError::InvalidBody),
    }
}
