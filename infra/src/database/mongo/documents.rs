//! Stored document layouts
//!
//! `_id` holds the entity UUID as a string and `createdAt` is a BSON
//! datetime, so documents sort correctly on the server.

use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kc_core::domain::entities::{Listing, ListingType, User, UserRole};

use crate::InfrastructureError;

fn to_bson_datetime(dt: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

fn from_bson_datetime(dt: bson::DateTime) -> Result<DateTime<Utc>, InfrastructureError> {
    Utc.timestamp_millis_opt(dt.timestamp_millis())
        .single()
        .ok_or_else(|| InfrastructureError::CorruptDocument(format!("createdAt out of range: {}", dt)))
}

fn parse_id(id: &str) -> Result<Uuid, InfrastructureError> {
    Uuid::parse_str(id)
        .map_err(|e| InfrastructureError::CorruptDocument(format!("Invalid _id '{}': {}", id, e)))
}

/// Document in the `users` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// bcrypt hash
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    pub created_at: bson::DateTime,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
            role: user.role,
            id_number: user.id_number.clone(),
            created_at: to_bson_datetime(user.created_at),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = InfrastructureError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        Ok(User {
            id: parse_id(&doc.id)?,
            first_name: doc.first_name,
            last_name: doc.last_name,
            email: doc.email,
            password_hash: doc.password,
            role: doc.role,
            id_number: doc.id_number,
            created_at: from_bson_datetime(doc.created_at)?,
        })
    }
}

/// Document in the `listings` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub price: f64,
    pub location: String,
    #[serde(rename = "type", default)]
    pub listing_type: ListingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub advertiser: String,
    #[serde(default)]
    pub verified: bool,
    pub created_at: bson::DateTime,
}

impl From<&Listing> for ListingDocument {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.to_string(),
            title: listing.title.clone(),
            price: listing.price,
            location: listing.location.clone(),
            listing_type: listing.listing_type,
            description: listing.description.clone(),
            image: listing.image.clone(),
            advertiser: listing.advertiser.clone(),
            verified: listing.verified,
            created_at: to_bson_datetime(listing.created_at),
        }
    }
}

impl TryFrom<ListingDocument> for Listing {
    type Error = InfrastructureError;

    fn try_from(doc: ListingDocument) -> Result<Self, Self::Error> {
        Ok(Listing {
            id: parse_id(&doc.id)?,
            title: doc.title,
            price: doc.price,
            location: doc.location,
            listing_type: doc.listing_type,
            description: doc.description,
            image: doc.image,
            advertiser: doc.advertiser,
            verified: doc.verified,
            created_at: from_bson_datetime(doc.created_at)?,
        })
    }
}
