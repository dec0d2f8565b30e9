//! # Infrastructure Layer
//!
//! Concrete implementations of the repository traits declared in `kc_core`,
//! backed by MongoDB.
//!
//! ## Architecture
//!
//! - **Database**: connection management, index setup, and one repository per
//!   collection (`users`, `listings`)
//!
//! Storage failures leave this crate as `DomainError::Internal` carrying the
//! driver's message, except duplicate-email writes which surface as
//! `AuthError::UserAlreadyExists`.

// Re-export core types for convenience
pub use kc_core::errors::*;

/// Database module - MongoDB implementations
pub mod database;

pub use database::{MongoDatabase, MongoListingRepository, MongoUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Driver error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored document could not be mapped to a domain entity
    #[error("Corrupt document: {0}")]
    CorruptDocument(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::internal(e.to_string()),
            other => DomainError::internal(other.to_string()),
        }
    }
}
