//! MongoDB repository implementations
//!
//! Each repository maps domain entities to a document struct that keeps the
//! camelCase field names of the stored collections.

mod documents;
pub mod listing_repository_impl;
pub mod user_repository_impl;

pub use documents::{ListingDocument, UserDocument};
pub use listing_repository_impl::MongoListingRepository;
pub use user_repository_impl::MongoUserRepository;

use mongodb::error::{ErrorKind, WriteFailure};

/// Server error code for a unique index violation
pub(crate) const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether a driver error is a unique index violation
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::BulkWrite(failure) => failure
            .write_errors
            .as_ref()
            .map(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY_CODE))
            .unwrap_or(false),
        _ => false,
    }
}
