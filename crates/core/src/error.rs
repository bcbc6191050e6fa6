use thiserror::Error;

/// Reasons a submission is rejected before any database work happens.
///
/// The `Display` output of each variant is the exact plain-text body sent back
/// to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The request had no body, or the body was not a JSON object.
    #[error("Invalid body")]
    InvalidBody,
    /// One of `faculty_name`, `course_code`, `rating` or `category` was absent or empty.
    #[error("Required fields missing")]
    MissingFields,
    /// `rating` did not coerce to an integer between 1 and 5.
    #[error("Rating must be between 1 and 5")]
    InvalidRating,
}
