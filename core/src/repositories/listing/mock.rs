//! In-memory implementation of ListingRepository for tests

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::listing::Listing;
use crate::errors::DomainError;

use super::trait_::ListingRepository;

/// Mock listing repository for testing
#[derive(Clone)]
pub struct MockListingRepository {
    listings: Arc<RwLock<Vec<Listing>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl MockListingRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(Vec::new())),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a mock repository pre-populated with `listings`
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(RwLock::new(listings)),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Make every call fail with an internal error carrying `message`
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    /// Number of stored listings
    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        match self.failure.read().await.as_ref() {
            Some(message) => Err(DomainError::internal(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        self.check_failure().await?;
        self.listings.write().await.push(listing.clone());
        Ok(listing)
    }

    async fn find_all_newest_first(&self) -> Result<Vec<Listing>, DomainError> {
        self.check_failure().await?;
        let mut listings = self.listings.read().await.clone();
        // Uuid ordering matches the ordering of its hyphenated string form
        listings.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(listings)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        self.check_failure().await?;
        let mut listings = self.listings.write().await;
        let removed = listings.len() as u64;
        listings.clear();
        Ok(removed)
    }

    async fn insert_many(&self, listings: Vec<Listing>) -> Result<(), DomainError> {
        self.check_failure().await?;
        self.listings.write().await.extend(listings);
        Ok(())
    }
}
