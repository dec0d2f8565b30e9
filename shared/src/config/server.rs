//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_opt, env_parse, Environment};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,

    /// Time allowed for a client to send the request head, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
            workers: 0, // Use all CPU cores
            keep_alive: default_keep_alive(),
            request_timeout: default_request_timeout(),
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    ///
    /// `PORT` is honoured first for compatibility with hosting platforms,
    /// then `SERVER_PORT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let port = env_opt("PORT")
            .or_else(|| env_opt("SERVER_PORT"))
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host: env_opt("SERVER_HOST").unwrap_or(defaults.host),
            port,
            workers: env_parse("SERVER_WORKERS", defaults.workers),
            keep_alive: env_parse("SERVER_KEEP_ALIVE", defaults.keep_alive),
            request_timeout: env_parse("SERVER_REQUEST_TIMEOUT", defaults.request_timeout),
            max_payload_size: env_parse("MAX_PAYLOAD_SIZE", defaults.max_payload_size),
        }
    }

    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allow any origin (development)
    #[serde(default)]
    pub allow_any_origin: bool,

    /// Allowed origins when `allow_any_origin` is off
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allow_any_origin: true,
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }

    /// Create from environment variables
    ///
    /// Outside production every origin is accepted unless `ALLOWED_ORIGINS`
    /// is set; in production only the listed origins are.
    pub fn from_env(environment: Environment) -> Self {
        let allowed_origins: Vec<String> = env_opt("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            allow_any_origin: !environment.is_production() && allowed_origins.is_empty(),
            allowed_origins,
            max_age: env_parse("CORS_MAX_AGE", default_max_age()),
        }
    }
}

fn default_keep_alive() -> u64 {
    75 // 75 seconds
}

fn default_request_timeout() -> u64 {
    30 // 30 seconds
}

fn default_max_payload_size() -> usize {
    256 * 1024 // 256 KB
}

fn default_max_age() -> usize {
    3600 // 1 hour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.workers, 0);
        assert_eq!(config.request_timeout, 30);
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("localhost", 8443);
        assert_eq!(config.bind_address(), "localhost:8443");
    }

    #[test]
    fn test_cors_config_development() {
        let config = CorsConfig::development();
        assert!(config.allow_any_origin);
        assert!(config.allowed_origins.is_empty());
    }
}
