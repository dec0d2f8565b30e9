use actix_web::{web, HttpResponse};
use validator::Validate;

use kc_core::repositories::{ListingRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{validation_error_response, RegisterRequest};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "firstName": "Ada",
///     "lastName": "Obi",
///     "email": "ada@example.com",
///     "password": "secret",
///     "role": "seller",
///     "idNumber": "NIN-12345"
/// }
/// ```
///
/// ## Errors
/// * 400 - Body invalid, or "User already exists"
/// * 500 - Storage, hashing or signing failure
pub async fn register<U, L>(
    state: web::Data<AppState<U, L>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for register request: {:?}", errors);
        return validation_error_response(&errors);
    }

    match state.auth_service.register(request.into_inner().into()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => handle_domain_error(e),
    }
}
