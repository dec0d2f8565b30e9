//! Database module - MongoDB implementations
//!
//! This module provides:
//! - Client construction with explicit pool, timeout and retry settings
//! - Start-up health check and index creation
//! - Repository implementations for users and listings

pub mod connection;
pub mod mongo;


// Re-export commonly used types
pub use connection::{MongoDatabase, LISTINGS_COLLECTION, USERS_COLLECTION};
pub use mongo::{MongoListingRepository, MongoUserRepository};
