//! Fixed sample listings written by the reseed operation

use chrono::{DateTime, Utc};

use crate::domain::entities::listing::{Listing, ListingType, NewListing};

/// The two sample listings, all stamped with `created_at`
pub fn seed_listings(created_at: DateTime<Utc>) -> Vec<Listing> {
    vec![
        NewListing {
            title: "Modern 4 Bedroom Duplex".to_string(),
            price: 85_000_000.0,
            location: "GRA Phase 2, Port Harcourt".to_string(),
            listing_type: Some(ListingType::ForSale),
            description: Some("A stunning masterpiece in the heart of GRA.".to_string()),
            image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=800&auto=format&fit=crop".to_string(),
            advertiser: Some("KayCribs Realty".to_string()),
            verified: Some(true),
        },
        NewListing {
            title: "Luxury Serviced Apartment".to_string(),
            price: 3_500_000.0,
            location: "Peter Odili Rd, PH".to_string(),
            listing_type: Some(ListingType::ForRent),
            description: Some("Fully serviced with 24/7 power.".to_string()),
            image: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?q=80&w=800&auto=format&fit=crop".to_string(),
            advertiser: Some("Elite Homes".to_string()),
            verified: Some(true),
        },
    ]
    .into_iter()
    .map(|new_listing| Listing::new_at(new_listing, created_at))
    .collect()
}
