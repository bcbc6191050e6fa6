use std::fmt;

use async_trait::async_trait;
use feedback_core::FeedbackSubmission;
use tiberius::error::Error as TdsError;
use tiberius::{Client, Config, Query};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use super::{Connection, Connector};
use crate::StoreError;

/// Insert statement for one submission. Values are bound as `@P1`..`@P5`, in
/// column order.
pub const INSERT_SUBMISSION: &str = "INSERT INTO Submissions (faculty_name, course_code, rating, category, comments) \
     VALUES (@P1, @P2, @P3, @P4, @P5)";

/// Connects to SQL Server or Azure SQL using an ADO.NET style connection string,
/// e.g. `Server=tcp:myserver.database.windows.net,1433;Database=feedback;User ID=app;Password=...;Encrypt=true`.
#[derive(Default, Debug, Clone, Copy)]
pub struct MssqlConnector;

#[async_trait]
impl Connector for MssqlConnector {
    async fn connect(&self, connection_string: &str) -> Result<Box<dyn Connection>, StoreError> {
        let config = Config::from_ado_string(connection_string)?;
        let client = match Client::connect(config.clone(), open_tcp(&config).await?.compat_write()).await {
            Ok(client) => client,
            // Azure SQL gateways may redirect to the node holding the database.
            Err(TdsError::Routing { host, port }) => {
                tracing::debug!(%host, port, "following sql server redirect");
                let mut config = config;
                config.host(&host);
                config.port(port);
                Client::connect(config.clone(), open_tcp(&config).await?.compat_write()).await?
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Box::new(MssqlConnection { client }))
    }
}

async fn open_tcp(config: &Config) -> Result<TcpStream, StoreError> {
    let tcp = TcpStream::connect(config.get_addr()).await?;
    tcp.set_nodelay(true)?;
    Ok(tcp)
}

/// An open TDS session.
pub struct MssqlConnection {
    client: Client<Compat<TcpStream>>,
}

impl fmt::Debug for MssqlConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MssqlConnection").finish_non_exhaustive()
    }
}

#[async_trait]
impl Connection for MssqlConnection {
    async fn insert(&mut self, submission: &FeedbackSubmission) -> Result<(), StoreError> {
        let mut query = Query::new(INSERT_SUBMISSION);
        query.bind(submission.faculty_name.as_str());
        query.bind(submission.course_code.as_str());
        // u8 is sent as TINYINT.
        query.bind(submission.rating);
        query.bind(submission.category.as_str());
        query.bind(submission.comments.as_str());

        let result = query.execute(&mut self.client).await?;
        tracing::debug!(rows = result.total(), "submission inserted");
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        self.client.close().await?;
        Ok(())
    }
}
