//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use kc_api::AppState;
use kc_core::repositories::{MockListingRepository, MockUserRepository};
use kc_core::services::{AuthService, ListingService, PasswordService, TokenService, TokenServiceConfig};
use kc_shared::{AppConfig, AuthConfig, ListingWritePolicy, SeedConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestState = AppState<MockUserRepository, MockListingRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub listings: Arc<MockListingRepository>,
    pub tokens: Arc<TokenService>,
    pub config: AppConfig,
}

/// Development-like configuration with a cheap bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig {
        auth: AuthConfig::new(TEST_SECRET).with_bcrypt_cost(4),
        seed: SeedConfig { enabled: true },
        ..AppConfig::default()
    }
}

pub fn guarded_config() -> AppConfig {
    let mut config = test_config();
    config.auth = config
        .auth
        .with_listing_write_policy(ListingWritePolicy::Authenticated);
    config
}

pub fn context(config: AppConfig) -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let listings = Arc::new(MockListingRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&users),
        PasswordService::new(config.auth.bcrypt_cost),
        Arc::clone(&tokens),
    ));
    let listing_service = Arc::new(ListingService::new(Arc::clone(&listings)));

    TestContext {
        state: web::Data::new(AppState::new(auth_service, listing_service, Arc::clone(&tokens))),
        users,
        listings,
        tokens,
        config,
    }
}

pub fn register_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": "Amaka",
        "lastName": "Nwosu",
        "email": email,
        "password": "correct-horse",
        "role": "buyer"
    })
}

pub fn listing_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Modern 4 Bedroom Duplex",
        "price": 85000000,
        "location": "GRA Phase 2, Port Harcourt",
        "type": "For Sale",
        "image": "https://images.unsplash.com/photo-1600585154340-be6161a56a0c"
    })
}
