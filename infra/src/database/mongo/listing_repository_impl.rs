//! MongoDB implementation of the ListingRepository trait.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::Collection;

use kc_core::domain::entities::Listing;
use kc_core::errors::DomainError;
use kc_core::repositories::ListingRepository;

use super::documents::ListingDocument;
use crate::database::connection::{MongoDatabase, LISTINGS_COLLECTION};
use crate::InfrastructureError;

/// MongoDB implementation of ListingRepository
#[derive(Clone)]
pub struct MongoListingRepository {
    collection: Collection<ListingDocument>,
}

impl MongoListingRepository {
    /// Create a repository over the `listings` collection
    pub fn new(database: &MongoDatabase) -> Self {
        Self {
            collection: database.collection(LISTINGS_COLLECTION),
        }
    }
}

#[async_trait]
impl ListingRepository for MongoListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        self.collection
            .insert_one(ListingDocument::from(&listing), None)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(listing)
    }

    async fn find_all_newest_first(&self) -> Result<Vec<Listing>, DomainError> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .build();

        let documents: Vec<ListingDocument> = self
            .collection
            .find(doc! {}, options)
            .await
            .map_err(InfrastructureError::from)?
            .try_collect()
            .await
            .map_err(InfrastructureError::from)?;

        let listings = documents
            .into_iter()
            .map(Listing::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(listings)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = self
            .collection
            .delete_many(doc! {}, None)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(result.deleted_count)
    }

    async fn insert_many(&self, listings: Vec<Listing>) -> Result<(), DomainError> {
        if listings.is_empty() {
            return Ok(());
        }

        let documents: Vec<ListingDocument> = listings.iter().map(ListingDocument::from).collect();
        self.collection
            .insert_many(documents, None)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(())
    }
}
