//! Business services containing domain logic and use cases.

pub mod auth;
pub mod listing;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, Registration};
pub use listing::{seed_listings, ListingService};
pub use password::PasswordService;
pub use token::{TokenService, TokenServiceConfig};
