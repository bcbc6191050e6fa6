//! HTTP intake for course and instructor feedback.
//!
//! A single endpoint, `POST /api/SubmitFeedback`, accepts a JSON submission,
//! validates and redacts it with [`feedback_core`], and appends it to the
//! `Submissions` table through a [`SubmissionWriter`].
//!
//! Every request ends in one of three outcomes, always with a short plain-text
//! body: `200 OK`, `400` with the validation failure, or `500` when storage is
//! not configured or fails.

pub mod config;
mod error;
pub mod handler;
pub mod store;

pub use self::config::ServerConfig;
pub use self::error::{FeedbackError, StoreError};
pub use self::handler::{MAX_BODY_SIZE, SUBMIT_FEEDBACK_PATH, SubmitFeedback, route};
pub use self::store::SubmissionWriter;
