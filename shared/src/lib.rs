//! Shared utilities and common types for the KayCribs server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded once from the environment
//! - The error response body returned by every endpoint
//! - Input validation helpers

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    ListingWritePolicy, SeedConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::validation;
