//! Listing service implementation

use std::sync::Arc;

use chrono::Utc;
use kc_shared::validation::validators;

use crate::domain::entities::listing::{Listing, NewListing};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::ListingRepository;

use super::seed::seed_listings;

/// Service for creating and browsing listings
pub struct ListingService<L>
where
    L: ListingRepository,
{
    listing_repository: Arc<L>,
}

impl<L> ListingService<L>
where
    L: ListingRepository,
{
    pub fn new(listing_repository: Arc<L>) -> Self {
        Self { listing_repository }
    }

    /// Validate a submission, apply defaults and persist it
    ///
    /// The advertiser is taken as given; nothing ties a listing to the
    /// account that submitted it.
    pub async fn create(&self, new_listing: NewListing) -> DomainResult<Listing> {
        validate(&new_listing)?;

        let listing = self
            .listing_repository
            .create(Listing::new(new_listing))
            .await?;

        tracing::info!(listing_id = %listing.id, listing_type = %listing.listing_type, "Listing created");
        Ok(listing)
    }

    /// All listings, newest first
    pub async fn list_all(&self) -> DomainResult<Vec<Listing>> {
        self.listing_repository.find_all_newest_first().await
    }

    /// Replace every listing with the sample set
    ///
    /// Returns the number of listings inserted.
    pub async fn reseed(&self) -> DomainResult<usize> {
        let removed = self.listing_repository.delete_all().await?;

        let listings = seed_listings(Utc::now());
        let inserted = listings.len();
        self.listing_repository.insert_many(listings).await?;

        tracing::warn!(removed, inserted, "Listings reseeded");
        Ok(inserted)
    }
}

fn validate(new_listing: &NewListing) -> Result<(), ValidationError> {
    let required = [
        ("title", new_listing.title.as_str()),
        ("location", new_listing.location.as_str()),
        ("image", new_listing.image.as_str()),
    ];

    if let Some((field, _)) = required
        .iter()
        .find(|(_, value)| !validators::not_empty(value))
    {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }

    if !new_listing.price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
        });
    }

    Ok(())
}
