//! Listing repository trait defining the interface for listing persistence.

use async_trait::async_trait;

use crate::domain::entities::listing::Listing;
use crate::errors::DomainError;

/// Repository trait for Listing entity persistence operations
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a new listing and return it as stored
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// All listings ordered by `created_at`, newest first
    ///
    /// Listings with the same `created_at` are ordered by id, descending, so
    /// every backend returns the same sequence.
    async fn find_all_newest_first(&self) -> Result<Vec<Listing>, DomainError>;

    /// Remove every listing, returning how many were deleted
    async fn delete_all(&self) -> Result<u64, DomainError>;

    /// Persist a batch of listings
    async fn insert_many(&self, listings: Vec<Listing>) -> Result<(), DomainError>;
}
