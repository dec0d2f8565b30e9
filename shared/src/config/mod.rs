//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Password hashing, token signing and the listing write policy
//! - `database` - MongoDB connection, pool, timeout and retry settings
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//! - `seed` - Development reseed endpoint
//!
//! The whole tree is read once at process start by [`AppConfig::from_env`]
//! and then passed by value into constructors.

pub mod auth;
pub mod database;
pub mod environment;
pub mod seed;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use auth::{AuthConfig, ListingWritePolicy};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use seed::SeedConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Reseed endpoint configuration
    pub seed: SeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            seed: SeedConfig::for_environment(environment),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// `.env` loading is the caller's job; this only reads the process
    /// environment.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(environment),
            seed: SeedConfig::from_env(environment),
        }
    }

    /// Reject settings that must never reach a production deployment
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;

        if self.environment.is_production() {
            if self.auth.is_using_default_secret() {
                return Err(ConfigError::Invalid {
                    key: "JWT_SECRET".to_string(),
                    reason: "the development fallback secret cannot be used in production"
                        .to_string(),
                });
            }
            if self.database.is_using_default_uri() {
                return Err(ConfigError::Invalid {
                    key: "MONGO_URI".to_string(),
                    reason: "the development fallback URI cannot be used in production"
                        .to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

/// Configuration error raised by [`AppConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A setting holds a value that is not acceptable
    Invalid { key: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, reason } => write!(f, "invalid {}: {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read an environment variable and parse it, falling back to `default`
/// when it is unset or unparsable.
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read an optional environment variable, treating empty values as unset.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = AppConfig {
            environment: Environment::Production,
            database: DatabaseConfig::new("mongodb://prod-db:27017/kaycribs"),
            ..AppConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "JWT_SECRET"));
    }

    #[test]
    fn test_production_rejects_default_uri() {
        let config = AppConfig {
            environment: Environment::Production,
            auth: AuthConfig::new("a-real-production-secret"),
            ..AppConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "MONGO_URI"));
    }

    #[test]
    fn test_production_accepts_explicit_settings() {
        let config = AppConfig {
            environment: Environment::Production,
            auth: AuthConfig::new("a-real-production-secret"),
            database: DatabaseConfig::new("mongodb://prod-db:27017/kaycribs"),
            ..AppConfig::default()
        };

        assert!(config.validate().is_ok());
    }
}
