//! Application state and factory
//!
//! Builds the actix-web application from already constructed services and
//! the configuration loaded at start-up. Tests call [`create_app`] with the
//! in-memory repositories.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App};

use kc_core::repositories::{ListingRepository, UserRepository};
use kc_core::services::{AuthService, ListingService, TokenService};
use kc_shared::AppConfig;

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::cors::create_cors;
use crate::routes::{self, RouteOptions};

/// Application state that holds shared services
pub struct AppState<U, L>
where
    U: UserRepository,
    L: ListingRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub listing_service: Arc<ListingService<L>>,
    pub token_service: Arc<TokenService>,
}

impl<U, L> AppState<U, L>
where
    U: UserRepository,
    L: ListingRepository,
{
    pub fn new(
        auth_service: Arc<AuthService<U>>,
        listing_service: Arc<ListingService<L>>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service,
            listing_service,
            token_service,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, L>(
    app_state: web::Data<AppState<U, L>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
{
    let options = RouteOptions {
        listing_write_policy: config.auth.listing_write_policy,
        seed_enabled: config.seed.enabled,
        token_service: Arc::clone(&app_state.token_service),
    };

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Order matters: the last wrap runs first, so CORS answers preflights
        // before anything is logged
        .wrap(Logger::default())
        .wrap(create_cors(&config.cors))
        .configure(|cfg| routes::configure::<U, L>(cfg, &options))
        .default_service(web::route().to(not_found))
}
