//! Password hashing with bcrypt
//!
//! bcrypt is CPU bound, so both hashing and verification run on tokio's
//! blocking pool.

use kc_shared::config::auth::DEFAULT_BCRYPT_COST;
use tokio::task;

use crate::errors::DomainError;

#[cfg(test)]
mod tests;

/// Salted one-way password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Creates a hasher with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a password with a fresh random salt
    ///
    /// Every call produces a different hash for the same input. Empty input
    /// is hashed like any other string.
    pub async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;

        task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(e.to_string()))?
            .map_err(|e| DomainError::internal(e.to_string()))
    }

    /// Checks a password against a stored hash
    ///
    /// A malformed stored hash is an internal error, not a mismatch.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(e.to_string()))?
            .map_err(|e| DomainError::internal(e.to_string()))
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}
