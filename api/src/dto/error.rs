use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use kc_shared::error_codes;
pub use kc_shared::ErrorResponse;

// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// 400 response for a request body that failed `validator` checks
///
/// `message` carries the first failing field's message (fields in name
/// order); every failure is listed under `details.fields`.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut field_errors: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    field_errors.sort_by(|a, b| a.0.cmp(&b.0));

    let message = field_errors
        .first()
        .and_then(|(_, messages)| messages.first().cloned())
        .unwrap_or_else(|| "Invalid request data".to_string());

    let fields: std::collections::HashMap<String, Vec<String>> =
        field_errors.into_iter().collect();

    ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
        .add_detail("fields", fields)
        .to_response(StatusCode::BAD_REQUEST)
}
