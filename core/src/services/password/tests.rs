use crate::errors::DomainError;
use crate::services::password::PasswordService;

// Lowest cost bcrypt accepts, keeps the suite fast
const TEST_COST: u32 = 4;

#[tokio::test]
async fn test_hash_then_verify() {
    let hasher = PasswordService::new(TEST_COST);
    let hash = hasher.hash("hunter2").await.unwrap();

    assert_ne!(hash, "hunter2");
    assert!(hasher.verify("hunter2", &hash).await.unwrap());
    assert!(!hasher.verify("hunter3", &hash).await.unwrap());
}

#[tokio::test]
async fn test_hashes_are_salted() {
    let hasher = PasswordService::new(TEST_COST);
    let first = hasher.hash("same-password").await.unwrap();
    let second = hasher.hash("same-password").await.unwrap();

    assert_ne!(first, second);
    assert!(hasher.verify("same-password", &first).await.unwrap());
    assert!(hasher.verify("same-password", &second).await.unwrap());
}

#[tokio::test]
async fn test_empty_password_is_hashable() {
    let hasher = PasswordService::new(TEST_COST);
    let hash = hasher.hash("").await.unwrap();

    assert!(hasher.verify("", &hash).await.unwrap());
    assert!(!hasher.verify(" ", &hash).await.unwrap());
}

#[tokio::test]
async fn test_cost_is_embedded_in_hash() {
    let hasher = PasswordService::new(TEST_COST);
    let hash = hasher.hash("pw").await.unwrap();
    assert!(hash.starts_with("$2b$04$"));

    assert_eq!(PasswordService::default().cost(), 10);
}

#[tokio::test]
async fn test_malformed_hash_is_internal_error() {
    let hasher = PasswordService::new(TEST_COST);
    let result = hasher.verify("pw", "not-a-bcrypt-hash").await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
