//! Configuration for the token service

use chrono::Duration;
use kc_shared::config::auth::{DEFAULT_JWT_SECRET, MAX_TOKEN_EXPIRY_SECONDS};
use kc_shared::AuthConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime; `None` issues tokens without `exp`
    pub token_lifetime: Option<Duration>,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_lifetime: None,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            // Clamped so an unvalidated config cannot overflow `Duration`
            token_lifetime: config
                .token_expiry_seconds
                .map(|seconds| Duration::seconds(seconds.clamp(1, MAX_TOKEN_EXPIRY_SECONDS))),
        }
    }
}
