//! Unit tests for the in-memory listing repository

use chrono::{Duration, Utc};

use crate::domain::entities::listing::{Listing, NewListing};
use crate::errors::DomainError;
use crate::repositories::listing::{ListingRepository, MockListingRepository};

fn listing(title: &str, age_minutes: i64) -> Listing {
    Listing::new_at(
        NewListing {
            title: title.to_string(),
            price: 1_000_000.0,
            location: "Port Harcourt".to_string(),
            image: "https://example.com/a.jpg".to_string(),
            ..Default::default()
        },
        Utc::now() - Duration::minutes(age_minutes),
    )
}

#[tokio::test]
async fn test_find_all_is_newest_first() {
    let repo = MockListingRepository::new();
    repo.create(listing("old", 30)).await.unwrap();
    repo.create(listing("newest", 0)).await.unwrap();
    repo.create(listing("middle", 10)).await.unwrap();

    let titles: Vec<String> = repo
        .find_all_newest_first()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.title)
        .collect();

    assert_eq!(titles, vec!["newest", "middle", "old"]);
}

#[tokio::test]
async fn test_same_timestamp_ordered_by_id_descending() {
    let created_at = Utc::now();
    let stamped = |title: &str| {
        Listing::new_at(
            NewListing {
                title: title.to_string(),
                ..Default::default()
            },
            created_at,
        )
    };
    let listings = vec![stamped("a"), stamped("b"), stamped("c")];

    let mut expected: Vec<String> = listings.iter().map(|l| l.id.to_string()).collect();
    expected.sort();
    expected.reverse();

    let repo = MockListingRepository::with_listings(listings);
    let ids: Vec<String> = repo
        .find_all_newest_first()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id.to_string())
        .collect();

    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_delete_all_then_insert_many() {
    let repo = MockListingRepository::with_listings(vec![listing("a", 1), listing("b", 2)]);

    assert_eq!(repo.delete_all().await.unwrap(), 2);
    assert!(repo.is_empty().await);

    repo.insert_many(vec![listing("c", 0)]).await.unwrap();
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_failure_injection() {
    let repo = MockListingRepository::new();
    repo.fail_with("server selection timeout").await;

    assert!(matches!(
        repo.find_all_newest_first().await,
        Err(DomainError::Internal { .. })
    ));
    assert!(repo.create(listing("x", 0)).await.is_err());
}
