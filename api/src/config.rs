//! Start-up configuration loading
//!
//! Reads `.env`, builds the [`AppConfig`] tree once and refuses to continue
//! when it is unsafe for the current environment.

use anyhow::Context;
use kc_shared::AppConfig;

/// Load and validate configuration for the running process
pub fn load_config() -> anyhow::Result<AppConfig> {
    // A missing .env file is fine; the process environment still applies
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    config
        .validate()
        .context("Refusing to start with unsafe configuration")?;

    warn_on_development_fallbacks(&config);
    Ok(config)
}

fn warn_on_development_fallbacks(config: &AppConfig) {
    if config.auth.is_using_default_secret() {
        log::warn!("JWT_SECRET not set, signing tokens with the development fallback secret");
    }
    if config.database.is_using_default_uri() {
        log::warn!("MONGO_URI not set, using {}", config.database.uri);
    }
    if config.seed.enabled {
        log::warn!("Reseed endpoint GET /api/seed is enabled");
    }
}
