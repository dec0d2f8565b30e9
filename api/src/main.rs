use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use log::{error, info, warn};

use kc_api::config::load_config;
use kc_api::{create_app, AppState};
use kc_core::services::{AuthService, ListingService, PasswordService, TokenService, TokenServiceConfig};
use kc_infra::{MongoDatabase, MongoListingRepository, MongoUserRepository};
use kc_shared::Environment;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before the logger reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(Environment::from_env().default_log_filter()),
    );

    let config = load_config()?;

    info!("Starting KayCribs API Server ({})", config.environment);

    // The driver connects lazily; an unreachable server is reported here
    // and requests fail individually until it comes back
    let database = MongoDatabase::connect(&config.database).await?;
    match database.ping().await {
        Ok(()) => {
            info!("MongoDB connected to database '{}'", database.name());
            if let Err(e) = database.ensure_indexes().await {
                error!("Failed to create indexes: {}", e);
            }
        }
        Err(e) => error!("MongoDB connection error: {}", e),
    }

    let user_repository = Arc::new(MongoUserRepository::new(&database));
    let listing_repository = Arc::new(MongoListingRepository::new(&database));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        PasswordService::new(config.auth.bcrypt_cost),
        Arc::clone(&token_service),
    ));
    let listing_service = Arc::new(ListingService::new(listing_repository));

    let app_state = web::Data::new(AppState::new(auth_service, listing_service, token_service));

    if config.auth.token_expiry_seconds.is_none() {
        warn!("JWT_EXPIRY_SECONDS not set, issued tokens never expire");
    }
    info!(
        "Listing write policy: {:?}, reseed endpoint enabled: {}",
        config.auth.listing_write_policy, config.seed.enabled
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server_config = config.server.clone();
    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout));

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("Server stopped");
    Ok(())
}
