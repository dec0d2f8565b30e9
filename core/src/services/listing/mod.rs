//! Listing service module
//!
//! Submission, newest-first browsing and the development reseed.

mod seed;
mod service;


pub use seed::seed_listings;
pub use service::ListingService;
