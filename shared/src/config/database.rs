//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{env_opt, env_parse};

/// Connection string used when `MONGO_URI` is not set
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/kaycribs";

/// Database name used when neither the URI nor `MONGO_DATABASE` names one
pub const DEFAULT_DATABASE_NAME: &str = "kaycribs";

/// MongoDB connection configuration
///
/// Timeouts and retry behaviour are spelled out here instead of relying on
/// driver defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    pub uri: String,

    /// Database name override; the URI path is used when absent
    #[serde(default)]
    pub database: Option<String>,

    /// Maximum number of pooled connections
    pub max_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout: u64,

    /// Let the driver retry a read once after a transient failure
    pub retry_reads: bool,

    /// Let the driver retry a write once after a transient failure
    pub retry_writes: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::from(DEFAULT_MONGO_URI),
            database: None,
            max_pool_size: 10,
            connect_timeout: 10,
            server_selection_timeout: 10,
            retry_reads: true,
            retry_writes: true,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: env_opt("MONGO_URI").unwrap_or(defaults.uri),
            database: env_opt("MONGO_DATABASE"),
            max_pool_size: env_parse("MONGO_MAX_POOL_SIZE", defaults.max_pool_size),
            connect_timeout: env_parse("MONGO_CONNECT_TIMEOUT", defaults.connect_timeout),
            server_selection_timeout: env_parse(
                "MONGO_SERVER_SELECTION_TIMEOUT",
                defaults.server_selection_timeout,
            ),
            retry_reads: env_parse("MONGO_RETRY_READS", defaults.retry_reads),
            retry_writes: env_parse("MONGO_RETRY_WRITES", defaults.retry_writes),
        }
    }

    /// Create a new database configuration with URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Override the database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the maximum pool size
    pub fn with_max_pool_size(mut self, max: u32) -> Self {
        self.max_pool_size = max;
        self
    }

    /// Whether the development fallback URI is in use
    pub fn is_using_default_uri(&self) -> bool {
        self.uri == DEFAULT_MONGO_URI
    }
}
