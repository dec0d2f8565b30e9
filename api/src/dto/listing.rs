use serde::{Deserialize, Serialize};

use kc_core::domain::entities::{ListingType, NewListing};

/// Body of `POST /api/listings`
///
/// Text fields default to empty so that a missing field is reported by the
/// listing service with its name, rather than as a JSON parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub location: String,

    /// "For Sale", "For Rent" or "For Lease"
    #[serde(rename = "type", default)]
    pub listing_type: Option<ListingType>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub advertiser: Option<String>,

    #[serde(default)]
    pub verified: Option<bool>,
}

impl CreateListingRequest {
    /// Convert into a domain submission, or name the missing price
    pub fn into_new_listing(self) -> Result<NewListing, &'static str> {
        let price = self.price.ok_or("price")?;

        Ok(NewListing {
            title: self.title,
            price,
            location: self.location,
            listing_type: self.listing_type,
            description: self.description,
            image: self.image,
            advertiser: self.advertiser,
            verified: self.verified,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
}

impl SeedResponse {
    pub fn seeded() -> Self {
        Self {
            message: "Database seeded successfully!".to_string(),
        }
    }
}
