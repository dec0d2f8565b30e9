//! Unit tests for token service

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service(secret: &str, lifetime: Option<Duration>) -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: secret.to_string(),
        token_lifetime: lifetime,
    })
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = service("test-secret", None);
    let user_id = Uuid::new_v4();

    let token = service.issue(user_id, UserRole::Seller).unwrap();
    let identity = service.verify(&token).unwrap();

    assert_eq!(identity.user_id, user_id);
    assert_eq!(identity.role, UserRole::Seller);
}

#[test]
fn test_token_without_expiry_is_accepted() {
    let service = service("test-secret", None);
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        role: UserRole::Buyer,
        iat: (Utc::now() - Duration::days(365)).timestamp(),
        exp: None,
    };

    let token = service.encode_claims(&claims).unwrap();
    assert!(service.verify(&token).is_ok());
}

#[test]
fn test_foreign_secret_rejected() {
    let issuer = service("secret-a", None);
    let verifier = service("secret-b", None);

    let token = issuer.issue(Uuid::new_v4(), UserRole::Buyer).unwrap();
    let result = verifier.verify(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_tampered_token_rejected() {
    let service = service("test-secret", None);
    let token = service.issue(Uuid::new_v4(), UserRole::Buyer).unwrap();

    // Swap the payload for one claiming a different role
    let forged_claims = Claims::new(Uuid::new_v4(), UserRole::Seller, None);
    let forged = service.encode_claims(&forged_claims).unwrap();
    let mut parts: Vec<&str> = token.split('.').collect();
    let forged_payload = forged.split('.').nth(1).unwrap();
    parts[1] = forged_payload;
    let tampered = parts.join(".");

    assert!(service.verify(&tampered).is_err());
    assert!(service.verify("not.a.token").is_err());
    assert!(service.verify("").is_err());
}

#[test]
fn test_configured_expiry_enforced() {
    let service = service("test-secret", Some(Duration::hours(1)));

    let fresh = service.issue(Uuid::new_v4(), UserRole::Buyer).unwrap();
    assert!(service.verify(&fresh).is_ok());

    let expired_claims = Claims {
        sub: Uuid::new_v4().to_string(),
        role: UserRole::Buyer,
        iat: (Utc::now() - Duration::hours(2)).timestamp(),
        exp: Some((Utc::now() - Duration::hours(1)).timestamp()),
    };
    let expired = service.encode_claims(&expired_claims).unwrap();

    assert!(matches!(
        service.verify(&expired),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_expiring_service_requires_exp_claim() {
    let service = service("test-secret", Some(Duration::hours(1)));
    let claims = Claims::new(Uuid::new_v4(), UserRole::Buyer, None);
    let token = service.encode_claims(&claims).unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::InvalidClaims))
    ));
}

#[test]
fn test_non_uuid_subject_rejected() {
    let service = service("test-secret", None);
    let claims = Claims {
        sub: "admin".to_string(),
        role: UserRole::Seller,
        iat: Utc::now().timestamp(),
        exp: None,
    };
    let token = service.encode_claims(&claims).unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::InvalidClaims))
    ));
}

#[test]
fn test_unvalidated_huge_expiry_does_not_panic() {
    use kc_shared::config::auth::MAX_TOKEN_EXPIRY_SECONDS;
    use kc_shared::AuthConfig;

    let config = TokenServiceConfig::from(
        &AuthConfig::new("test-secret").with_token_expiry_seconds(i64::MAX),
    );
    assert_eq!(
        config.token_lifetime,
        Some(Duration::seconds(MAX_TOKEN_EXPIRY_SECONDS))
    );

    let service = TokenService::new(config);
    let user_id = Uuid::new_v4();
    let token = service.issue(user_id, UserRole::Buyer).unwrap();
    assert_eq!(service.verify(&token).unwrap().user_id, user_id);
}
