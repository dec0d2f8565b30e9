//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_parse, ConfigError};

/// Signing secret used when `JWT_SECRET` is not set
pub const DEFAULT_JWT_SECRET: &str = "super-secret-key-123";

/// bcrypt work factor used when `BCRYPT_COST` is not set
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Longest accepted token lifetime, ten years
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Who may create listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingWritePolicy {
    /// Anyone may create a listing and set any advertiser name
    #[default]
    Open,
    /// A valid bearer token is required
    Authenticated,
}

impl std::str::FromStr for ListingWritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(ListingWritePolicy::Open),
            "authenticated" | "auth" => Ok(ListingWritePolicy::Authenticated),
            _ => Err(format!("Invalid listing write policy: {}", s)),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret for identity tokens
    pub jwt_secret: String,

    /// Token lifetime in seconds; `None` issues tokens without `exp`
    #[serde(default)]
    pub token_expiry_seconds: Option<i64>,

    /// bcrypt work factor
    pub bcrypt_cost: u32,

    /// Guard applied to `POST /api/listings`
    #[serde(default)]
    pub listing_write_policy: ListingWritePolicy,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            token_expiry_seconds: None,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            listing_write_policy: ListingWritePolicy::Open,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: env_opt("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_expiry_seconds: env_opt("JWT_EXPIRY_SECONDS")
                .and_then(|value| value.parse().ok())
                .filter(|seconds: &i64| *seconds > 0),
            bcrypt_cost: env_parse("BCRYPT_COST", defaults.bcrypt_cost),
            listing_write_policy: env_parse(
                "LISTING_WRITE_POLICY",
                defaults.listing_write_policy,
            ),
        }
    }

    /// Create a new configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in seconds
    pub fn with_token_expiry_seconds(mut self, seconds: i64) -> Self {
        self.token_expiry_seconds = Some(seconds);
        self
    }

    /// Set the bcrypt work factor
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the listing write policy
    pub fn with_listing_write_policy(mut self, policy: ListingWritePolicy) -> Self {
        self.listing_write_policy = policy;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".to_string(),
                reason: "secret must not be empty".to_string(),
            });
        }
        if let Some(seconds) = self.token_expiry_seconds {
            if !(1..=MAX_TOKEN_EXPIRY_SECONDS).contains(&seconds) {
                return Err(ConfigError::Invalid {
                    key: "JWT_EXPIRY_SECONDS".to_string(),
                    reason: format!(
                        "lifetime must be between 1 and {} seconds",
                        MAX_TOKEN_EXPIRY_SECONDS
                    ),
                });
            }
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST".to_string(),
                reason: format!(
                    "cost must be between {} and {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert!(config.is_using_default_secret());
        assert_eq!(config.token_expiry_seconds, None);
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert_eq!(config.listing_write_policy, ListingWritePolicy::Open);
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        assert!(AuthConfig::default().with_bcrypt_cost(4).validate().is_ok());
        assert!(AuthConfig::default().with_bcrypt_cost(3).validate().is_err());
        assert!(AuthConfig::default().with_bcrypt_cost(32).validate().is_err());
    }

    #[test]
    fn test_token_expiry_bounds() {
        let config = AuthConfig::new("s");
        assert!(config.clone().with_token_expiry_seconds(3600).validate().is_ok());
        assert!(config
            .clone()
            .with_token_expiry_seconds(MAX_TOKEN_EXPIRY_SECONDS)
            .validate()
            .is_ok());
        assert!(config.clone().with_token_expiry_seconds(0).validate().is_err());
        assert!(config
            .clone()
            .with_token_expiry_seconds(10_000_000_000_000)
            .validate()
            .is_err());
        assert!(config.with_token_expiry_seconds(i64::MAX).validate().is_err());
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(AuthConfig::new("").validate().is_err());
    }

    #[test]
    fn test_listing_write_policy_parsing() {
        assert_eq!(
            "authenticated".parse::<ListingWritePolicy>().unwrap(),
            ListingWritePolicy::Authenticated
        );
        assert_eq!("OPEN".parse::<ListingWritePolicy>().unwrap(), ListingWritePolicy::Open);
        assert!("admin-only".parse::<ListingWritePolicy>().is_err());
    }
}
