use crate::ValidationError;
use crate::sanitize::{sanitize_optional, sanitize_text, truncate_chars};
use crate::validate::{ValidatedFields, validate};

/// Width of the `faculty_name` column, in characters.
pub const FACULTY_NAME_MAX_LEN: usize = 200;
/// Width of the `course_code` column, in characters.
pub const COURSE_CODE_MAX_LEN: usize = 50;
/// Width of the `category` column, in characters.
pub const CATEGORY_MAX_LEN: usize = 100;
/// Longest `comments` value stored, in characters.
pub const COMMENTS_MAX_LEN: usize = 2000;

/// A validated, redacted and truncated submission, ready to be stored as one
/// row of `Submissions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    /// Instructor name, at most [`FACULTY_NAME_MAX_LEN`] characters.
    pub faculty_name: String,
    /// Course code, at most [`COURSE_CODE_MAX_LEN`] characters.
    pub course_code: String,
    /// Rating in `1..=5`.
    pub rating: u8,
    /// Feedback category, at most [`CATEGORY_MAX_LEN`] characters.
    pub category: String,
    /// Comments, empty when none were given, at most [`COMMENTS_MAX_LEN`] characters.
    pub comments: String,
}

impl FeedbackSubmission {
    /// Validate a request body and finalize its fields.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        validate(body).map(Self::from_fields)
    }

    /// Redact and truncate fields that already passed validation.
    #[must_use]
    pub fn from_fields(fields: ValidatedFields) -> Self {
        let faculty_name = truncate_chars(sanitize_text(&fields.faculty_name), FACULTY_NAME_MAX_LEN);
        let course_code = truncate_chars(sanitize_text(&fields.course_code), COURSE_CODE_MAX_LEN);
        let category = truncate_chars(sanitize_text(&fields.category), CATEGORY_MAX_LEN);
        let comments = truncate_chars(sanitize_optional(fields.comments.as_deref()), COMMENTS_MAX_LEN);
        Self {
            faculty_name,
            course_code,
            rating: fields.rating,
            category,
            comments,
        }
    }
}
