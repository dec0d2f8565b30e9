use actix_web::{web, HttpResponse};

use kc_core::repositories::{ListingRepository, UserRepository};

use crate::app::AppState;
use crate::dto::SeedResponse;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/seed
///
/// Deletes every listing and inserts the sample set. Only mounted when
/// reseeding is enabled.
pub async fn seed<U, L>(state: web::Data<AppState<U, L>>) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
{
    match state.listing_service.reseed().await {
        Ok(inserted) => {
            log::warn!("Listings collection reseeded with {} samples", inserted);
            HttpResponse::Ok().json(SeedResponse::seeded())
        }
        Err(e) => handle_domain_error(e),
    }
}
