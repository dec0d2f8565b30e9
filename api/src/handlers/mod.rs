pub mod error;

pub use error::{handle_domain_error, handle_listing_create_error, json_error_handler, not_found};
