use feedback_core::ValidationError;
use salvo::http::StatusCode;
use salvo::writing::{Scribe, Text};
use salvo::Response;
use thiserror::Error;

/// Failure talking to the database.
///
/// Carries driver detail for the logs. It is never rendered to callers.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Socket level failure while connecting.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Error reported by the SQL Server driver or the server itself.
    #[error("sql server error: {0}")]
    Tds(#[from] tiberius::error::Error),
}

/// Terminal failure of a feedback request.
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// The submission was rejected before any database work.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// No connection string is configured.
    #[error("Database connection not configured")]
    NotConfigured,
    /// Connecting or inserting failed.
    #[error("Server error")]
    Store(#[from] StoreError),
}

impl FeedbackError {
    /// Status code sent to the caller.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Scribe for FeedbackError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Text::Plain(self.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_store_error_detail_is_hidden() {
        let err = FeedbackError::from(StoreError::from(io::Error::other("login failed for user 'sa'")));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Server error");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_status() {
        for err in [
            ValidationError::InvalidBody,
            ValidationError::MissingFields,
            ValidationError::InvalidRating,
        ] {
            let err = FeedbackError::from(err);
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
        assert_eq!(
            FeedbackError::from(ValidationError::InvalidRating).to_string(),
            "Rating must be between 1 and 5"
        );
    }

    #[test]
    fn test_render_plain_text() {
        let mut res = Response::new();
        FeedbackError::NotConfigured.render(&mut res);
        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            res.headers().get("content-type").and_then(|v| v.to_str().ok()),
            Some("text/plain; charset=utf-8")
        );
    }
}
