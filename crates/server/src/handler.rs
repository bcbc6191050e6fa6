//! The feedback endpoint.
use feedback_core::{FeedbackSubmission, ValidationError};
use salvo::logging::Logger;
use salvo::prelude::*;

use crate::{FeedbackError, SubmissionWriter};

/// Route the endpoint is mounted on.
pub const SUBMIT_FEEDBACK_PATH: &str = "api/SubmitFeedback";

/// Largest request body read, in bytes. Oversized fields are truncated after
/// parsing, so this only bounds memory per request.
pub const MAX_BODY_SIZE: usize = 4 * 1024 * 1024;

/// Handles one feedback submission: validate, redact, store.
#[derive(Debug, Clone)]
pub struct SubmitFeedback {
    writer: SubmissionWriter,
}

#[handler]
impl SubmitFeedback {
    /// Create the handler around `writer`.
    #[must_use]
    pub fn new(writer: SubmissionWriter) -> Self {
        Self { writer }
    }

    async fn handle(&self, req: &mut Request) -> Result<&'static str, FeedbackError> {
        tracing::info!("submit feedback triggered");

        let body = req.payload_with_max_size(MAX_BODY_SIZE).await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
            ValidationError::InvalidBody
        })?;
        let submission = FeedbackSubmission::from_json(body)
            .inspect_err(|e| tracing::debug!(reason = %e, "submission rejected"))?;

        self.writer.write(&submission).await?;
        Ok("OK")
    }
}

/// Build the service router.
#[must_use]
pub fn route(writer: SubmissionWriter) -> Router {
    Router::new()
        .hoop(Logger::default())
        .push(Router::with_path(SUBMIT_FEEDBACK_PATH).post(SubmitFeedback::new(writer)))
}
