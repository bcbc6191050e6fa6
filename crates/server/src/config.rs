//! Process configuration, read once at startup.
use std::env;
use std::fmt::{self, Debug, Formatter};

use tracing::{info, warn};

/// Environment variable holding the SQL Server connection string.
pub const CONNECTION_STRING_VAR: &str = "SqlConnectionString";
/// Environment variable holding the address to listen on.
pub const LISTEN_ADDR_VAR: &str = "FEEDBACK_LISTEN_ADDR";
/// Listen address used when [`LISTEN_ADDR_VAR`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5800";

/// Settings injected into the server at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds.
    pub listen_addr: String,
    /// ADO.NET style connection string. `None` keeps the server running but
    /// every submission fails with a 500 until it is set.
    pub connection_string: Option<String>,
}

impl Debug for ServerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The connection string usually embeds a password.
        f.debug_struct("ServerConfig")
            .field("listen_addr", &self.listen_addr)
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl ServerConfig {
    /// Load from the process environment, after merging a `.env` file if one exists.
    #[must_use]
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            info!(path = %path.display(), "loaded environment file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let connection_string = lookup(CONNECTION_STRING_VAR).filter(|value| !value.trim().is_empty());
        if connection_string.is_none() {
            warn!("{CONNECTION_STRING_VAR} not set, submissions will fail until it is configured");
        }
        let listen_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| {
            info!("{LISTEN_ADDR_VAR} not set, using default: {DEFAULT_LISTEN_ADDR}");
            DEFAULT_LISTEN_ADDR.to_owned()
        });
        Self {
            listen_addr,
            connection_string,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.connection_string, None);
    }

    #[test]
    fn test_values() {
        let config = load(&[
            (CONNECTION_STRING_VAR, "Server=tcp:db,1433;Password=secret"),
            (LISTEN_ADDR_VAR, "127.0.0.1:7878"),
        ]);
        assert_eq!(config.listen_addr, "127.0.0.1:7878");
        assert_eq!(
            config.connection_string.as_deref(),
            Some("Server=tcp:db,1433;Password=secret")
        );
    }

    #[test]
    fn test_blank_connection_string_is_absent() {
        assert_eq!(load(&[(CONNECTION_STRING_VAR, "  ")]).connection_string, None);
    }

    #[test]
    fn test_debug_hides_connection_string() {
        let config = load(&[(CONNECTION_STRING_VAR, "Password=secret")]);
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
