//! Mapping from domain errors to HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};

use kc_core::errors::{AuthError, DomainError, TokenError};
use kc_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

fn status_and_code(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Auth(AuthError::UserAlreadyExists) => {
            (StatusCode::BAD_REQUEST, error_codes::USER_ALREADY_EXISTS)
        }
        // Unknown email stays a 400 so login failures look alike to clients
        DomainError::Auth(AuthError::UserNotFound) => {
            (StatusCode::BAD_REQUEST, error_codes::USER_NOT_FOUND)
        }
        DomainError::Auth(AuthError::InvalidCredentials) => {
            (StatusCode::BAD_REQUEST, error_codes::INVALID_CREDENTIALS)
        }
        DomainError::ValidationErr(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::Token(TokenError::TokenGenerationFailed) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
        DomainError::Token(TokenError::TokenExpired) => {
            (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED)
        }
        DomainError::Token(_) => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Internal errors keep the underlying message in the body.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, code) = status_and_code(&error);

    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::debug!("Domain Error: {:?}", error);
    }

    ErrorResponse::new(code, error.to_string()).to_response(status)
}

/// Listing submission failures are all reported as 400, storage errors
/// included
pub fn handle_listing_create_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Internal { message } => {
            log::error!("Failed to store listing: {}", message);
            ErrorResponse::new(error_codes::BAD_REQUEST, message)
                .to_response(StatusCode::BAD_REQUEST)
        }
        other => handle_domain_error(other),
    }
}

/// Turn malformed JSON bodies into the standard 400 error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, err.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
    .to_response(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kc_core::errors::ValidationError;

    #[test]
    fn test_auth_errors_are_bad_requests() {
        for error in [
            AuthError::UserAlreadyExists,
            AuthError::UserNotFound,
            AuthError::InvalidCredentials,
        ] {
            let response = handle_domain_error(error.into());
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_internal_is_server_error() {
        let response = handle_domain_error(DomainError::internal("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        let response = handle_domain_error(TokenError::InvalidSignature.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = handle_domain_error(TokenError::TokenGenerationFailed.into());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_listing_store_error_is_bad_request() {
        let response = handle_listing_create_error(DomainError::internal("write failed"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handle_listing_create_error(
            ValidationError::RequiredField {
                field: "title".to_string(),
            }
            .into(),
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_account_is_never_not_found() {
        let errors: Vec<DomainError> = vec![
            AuthError::UserNotFound.into(),
            ValidationError::InvalidFormat {
                field: "price".to_string(),
            }
            .into(),
            TokenError::TokenExpired.into(),
            DomainError::internal("x"),
        ];

        for error in errors {
            assert_ne!(status_and_code(&error).0, StatusCode::NOT_FOUND);
        }
    }
}
