//! Validation and redaction for course feedback submissions.
//!
//! This crate holds everything that can be decided without I/O: parsing a
//! submission body, checking its required fields, redacting identifying text
//! and truncating fields to the column widths of the `Submissions` table.
//!
//! ```
//! use feedback_core::FeedbackSubmission;
//!
//! let body = br#"{"faculty_name":"Dr. Jane Doe","course_code":"CS101","rating":5,"category":"Teaching"}"#;
//! let submission = FeedbackSubmission::from_json(body).unwrap();
//! assert_eq!(submission.rating, 5);
//! assert_eq!(submission.comments, "");
//! ```

mod error;
pub mod sanitize;
mod submission;
pub mod validate;

pub use self::error::ValidationError;
pub use self::submission::{
    CATEGORY_MAX_LEN, COMMENTS_MAX_LEN, COURSE_CODE_MAX_LEN, FACULTY_NAME_MAX_LEN, FeedbackSubmission,
};
