//! Domain entities representing core business objects.

pub mod listing;
pub mod token;
pub mod user;

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Round `at` up to the next whole millisecond
///
/// Stored timestamps only keep milliseconds; stamping entities at that
/// precision keeps them equal across a store round trip and never earlier
/// than `at`.
pub fn millisecond_ceiling(at: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = at.trunc_subsecs(3);
    if truncated < at {
        truncated + Duration::milliseconds(1)
    } else {
        truncated
    }
}


// Re-export commonly used types
pub use listing::{Listing, ListingType, NewListing, DEFAULT_ADVERTISER};
pub use token::{Claims, Identity};
pub use user::{User, UserRole};
