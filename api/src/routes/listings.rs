use actix_web::{web, HttpResponse};

use kc_core::errors::ValidationError;
use kc_core::repositories::{ListingRepository, UserRepository};

use crate::app::AppState;
use crate::dto::CreateListingRequest;
use crate::handlers::{handle_domain_error, handle_listing_create_error};
use crate::middleware::auth::OptionalAuth;

/// Handler for GET /api/listings
///
/// Every listing, newest first.
pub async fn list_listings<U, L>(state: web::Data<AppState<U, L>>) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
{
    match state.listing_service.list_all().await {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/listings
///
/// # Request Body
///
/// ```json
/// {
///     "title": "Modern 4 Bedroom Duplex",
///     "price": 85000000,
///     "location": "GRA Phase 2, Port Harcourt",
///     "type": "For Sale",
///     "image": "https://images.unsplash.com/...",
///     "advertiser": "KayCribs Realty",
///     "description": "A stunning masterpiece in the heart of GRA."
/// }
/// ```
///
/// Responds 201 with the stored listing. When the write guard is active the
/// authenticated caller is only logged; the advertiser is still free text.
pub async fn create_listing<U, L>(
    state: web::Data<AppState<U, L>>,
    auth: OptionalAuth,
    request: web::Json<CreateListingRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
{
    let new_listing = match request.into_inner().into_new_listing() {
        Ok(new_listing) => new_listing,
        Err(field) => {
            return handle_listing_create_error(
                ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into(),
            )
        }
    };

    match state.listing_service.create(new_listing).await {
        Ok(listing) => {
            match auth.0 {
                Some(ctx) => log::info!(
                    "Listing {} created by {} {}",
                    listing.id,
                    ctx.role,
                    ctx.user_id
                ),
                None => log::info!("Listing {} created", listing.id),
            }
            HttpResponse::Created().json(listing)
        }
        Err(e) => handle_listing_create_error(e),
    }
}
