//! Main token service implementation

use std::collections::HashSet;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, Identity};
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying signed session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        match config.token_lifetime {
            Some(_) => {
                validation.validate_exp = true;
                validation.required_spec_claims = HashSet::from(["exp".to_string()]);
            }
            None => {
                validation.validate_exp = false;
                validation.required_spec_claims = HashSet::new();
            }
        }

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for a user
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Signing failed
    pub fn issue(&self, user_id: Uuid, role: UserRole) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, role, self.config.token_lifetime);
        self.encode_claims(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns the identity it asserts
    ///
    /// Checks the signature, and `exp` when tokens are configured to expire.
    pub fn verify(&self, token: &str) -> Result<Identity, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                    ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                    ErrorKind::MissingRequiredClaim(_) => {
                        DomainError::Token(TokenError::InvalidClaims)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        let claims = token_data.claims;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;

        Ok(Identity {
            user_id,
            role: claims.role,
        })
    }
}
