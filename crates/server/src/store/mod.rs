//! Persistence of finalized submissions.
//!
//! [`SubmissionWriter`] owns the per-request connection lifecycle: it opens at
//! most one connection, runs one insert, and closes the connection exactly once
//! whether the insert succeeded or not. The database itself sits behind the
//! [`Connector`] and [`Connection`] traits; [`MssqlConnector`] is the SQL Server
//! implementation.
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use feedback_core::FeedbackSubmission;

use crate::{FeedbackError, StoreError};

mod mssql;
pub use mssql::{INSERT_SUBMISSION, MssqlConnection, MssqlConnector};

/// Opens database connections.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Open a connection described by `connection_string`.
    async fn connect(&self, connection_string: &str) -> Result<Box<dyn Connection>, StoreError>;
}

/// An open database connection.
#[async_trait]
pub trait Connection: Send {
    /// Append one row to `Submissions`, binding every field as a typed parameter.
    async fn insert(&mut self, submission: &FeedbackSubmission) -> Result<(), StoreError>;

    /// Release the connection.
    async fn close(self: Box<Self>) -> Result<(), StoreError>;
}

/// Writes one submission per call with a fresh connection.
#[derive(Clone)]
pub struct SubmissionWriter {
    connector: Arc<dyn Connector>,
    connection_string: Option<String>,
}

impl Debug for SubmissionWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionWriter")
            .field("configured", &self.connection_string.is_some())
            .finish_non_exhaustive()
    }
}

impl SubmissionWriter {
    /// Create a writer. `None` for `connection_string` leaves it unconfigured:
    /// every write then fails with [`FeedbackError::NotConfigured`].
    pub fn new(connector: impl Connector + 'static, connection_string: Option<String>) -> Self {
        Self {
            connector: Arc::new(connector),
            connection_string,
        }
    }

    /// Whether a connection string is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.connection_string.is_some()
    }

    /// Insert `submission` as one row.
    pub async fn write(&self, submission: &FeedbackSubmission) -> Result<(), FeedbackError> {
        let Some(connection_string) = self.connection_string.as_deref() else {
            tracing::error!("database connection string is not configured");
            return Err(FeedbackError::NotConfigured);
        };

        let mut connection = self
            .connector
            .connect(connection_string)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "failed to connect to database"))?;
        let inserted = connection.insert(submission).await;
        if let Err(e) = connection.close().await {
            tracing::warn!(error = %e, "failed to close database connection");
        }

        inserted.map_err(|e| {
            tracing::error!(error = %e, "failed to insert submission");
            FeedbackError::Store(e)
        })
    }
}
