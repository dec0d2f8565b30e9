pub mod auth;
pub mod error;
pub mod listing;

pub use auth::{LoginRequest, RegisterRequest};
pub use error::{validation_error_response, ErrorResponse, ErrorResponseExt};
pub use listing::{CreateListingRequest, SeedResponse};
