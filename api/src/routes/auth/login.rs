use actix_web::{web, HttpResponse};
use validator::Validate;

use kc_core::repositories::{ListingRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{validation_error_response, LoginRequest};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/auth/login
///
/// ## Errors
/// * 400 - "User does not exist" or "Invalid credentials"
/// * 500 - Storage or signing failure
pub async fn login<U, L>(
    state: web::Data<AppState<U, L>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => handle_domain_error(e),
    }
}
