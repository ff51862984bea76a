//! Store configuration.

use std::env;
use std::time::Duration;

/// Database the user collection lives in.
pub const DATABASE_NAME: &str = "blog";

/// Name of the user collection.
pub const USERS_COLLECTION: &str = "users";

const DEFAULT_CONNECTION_STRING: &str = "mongodb://localhost:27017";

/// Driver default; unreachable deployments make operations wait this long.
const DEFAULT_SELECTION_TIMEOUT_MS: u64 = 30_000;

/// Connection configuration for the store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string (host, port, credentials if any)
    pub connection_string: String,
    /// How long the driver waits for a reachable server before an operation fails
    pub server_selection_timeout: Duration,
}

impl StoreConfig {
    /// Build a configuration for the given connection string.
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            server_selection_timeout: Duration::from_millis(DEFAULT_SELECTION_TIMEOUT_MS),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            connection_string: env::var("BLOG_USERS_MONGODB_URI")
                .or_else(|_| env::var("MONGODB_URI"))
                .unwrap_or_else(|_| DEFAULT_CONNECTION_STRING.to_string()),
            server_selection_timeout: env::var("BLOG_USERS_SELECTION_TIMEOUT_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::from_millis(DEFAULT_SELECTION_TIMEOUT_MS)),
        }
    }

    /// Override the server selection timeout.
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECTION_STRING)
    }
}
