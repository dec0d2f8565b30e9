//! Route registration
//!
//! `configure` mounts every endpoint; the listing write guard and the reseed
//! endpoint depend on configuration.

pub mod auth;
pub mod health;
pub mod listings;
pub mod seed;

use std::sync::Arc;

use actix_web::web;

use kc_core::repositories::{ListingRepository, UserRepository};
use kc_core::services::TokenService;
use kc_shared::ListingWritePolicy;

use crate::middleware::JwtAuth;

/// Configuration-dependent parts of the route table
pub struct RouteOptions {
    pub listing_write_policy: ListingWritePolicy,
    pub seed_enabled: bool,
    pub token_service: Arc<TokenService>,
}

pub fn configure<U, L>(cfg: &mut web::ServiceConfig, options: &RouteOptions)
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
{
    let create_listing = web::post().to(listings::create_listing::<U, L>);
    let create_listing = match options.listing_write_policy {
        ListingWritePolicy::Open => create_listing,
        ListingWritePolicy::Authenticated => {
            create_listing.wrap(JwtAuth::new(Arc::clone(&options.token_service)))
        }
    };

    cfg.route("/", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::resource("/listings")
                        .route(web::get().to(listings::list_listings::<U, L>))
                        .route(create_listing),
                )
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::register::<U, L>))
                        .route("/login", web::post().to(auth::login::login::<U, L>)),
                )
                .configure(|api| {
                    if options.seed_enabled {
                        api.route("/seed", web::get().to(seed::seed::<U, L>));
                    }
                }),
        );
}
