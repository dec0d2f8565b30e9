//! Listing entity representing a property offered on the marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Advertiser name used when a submission does not provide one
pub const DEFAULT_ADVERTISER: &str = "KayCribs Verified Agent";

/// How the property is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingType {
    #[default]
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "For Lease")]
    ForLease,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::ForSale => "For Sale",
            ListingType::ForRent => "For Rent",
            ListingType::ForLease => "For Lease",
        }
    }
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "For Sale" => Ok(ListingType::ForSale),
            "For Rent" => Ok(ListingType::ForRent),
            "For Lease" => Ok(ListingType::ForLease),
            _ => Err(format!("Invalid listing type: {}", s)),
        }
    }
}

/// Listing submission before defaults are applied
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewListing {
    pub title: String,
    pub price: f64,
    pub location: String,
    pub listing_type: Option<ListingType>,
    pub description: Option<String>,
    /// Image URL
    pub image: String,
    /// Free-text display name; not checked against any user
    pub advertiser: Option<String>,
    pub verified: Option<bool>,
}

/// Listing entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub location: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub advertiser: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Creates a listing from a submission, applying defaults and stamping
    /// the creation time
    pub fn new(new_listing: NewListing) -> Self {
        Self::new_at(new_listing, Utc::now())
    }

    /// Same as [`Listing::new`] with an explicit creation time
    ///
    /// `created_at` is rounded up to whole milliseconds.
    pub fn new_at(new_listing: NewListing, created_at: DateTime<Utc>) -> Self {
        let advertiser = new_listing
            .advertiser
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADVERTISER.to_string());

        Self {
            id: Uuid::new_v4(),
            title: new_listing.title,
            price: new_listing.price,
            location: new_listing.location,
            listing_type: new_listing.listing_type.unwrap_or_default(),
            description: new_listing.description,
            image: new_listing.image,
            advertiser,
            verified: new_listing.verified.unwrap_or(false),
            created_at: super::millisecond_ceiling(created_at),
        }
    }
}
