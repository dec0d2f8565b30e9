//! User repository trait defining the interface for user persistence.
//!
//! The trait is async-first and keeps the storage backend out of the domain
//! layer. Implementations live in the infrastructure crate; an in-memory
//! version lives next to this file for tests.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// Must fail with `AuthError::UserAlreadyExists` when the email is taken,
    /// even if a concurrent writer got there after the caller's pre-check.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
