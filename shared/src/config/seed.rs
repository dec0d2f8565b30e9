//! Reseed endpoint configuration

use serde::{Deserialize, Serialize};

use super::{env_parse, Environment};

/// Controls whether `GET /api/seed` is mounted
///
/// Reseeding wipes every listing, so it is off by default in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl SeedConfig {
    /// Default for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            enabled: !environment.is_production(),
        }
    }

    /// Create from `ENABLE_SEED_ROUTE`, defaulting per environment
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::for_environment(environment);
        Self {
            enabled: env_parse("ENABLE_SEED_ROUTE", defaults.enabled),
        }
    }
}
