//! User entity representing a registered KayCribs account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a user in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Someone browsing for property to buy or rent
    #[default]
    Buyer,
    /// An agent or owner advertising property
    Seller,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Buyer => "buyer",
            UserRole::Seller => "seller",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(UserRole::Buyer),
            "seller" => Ok(UserRole::Seller),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// User entity representing a registered user
///
/// Deliberately not serializable: the password hash must never leave the
/// service through a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    pub first_name: String,

    pub last_name: String,

    /// Unique login email
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    pub role: UserRole,

    /// Identity document number, kept for sellers only
    pub id_number: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    ///
    /// `id_number` is dropped unless the role is [`UserRole::Seller`].
    /// `created_at` is stamped at millisecond precision.
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        role: UserRole,
        id_number: Option<String>,
    ) -> Self {
        let id_number = match role {
            UserRole::Seller => id_number,
            UserRole::Buyer => None,
        };

        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            password_hash,
            role,
            id_number,
            created_at: super::millisecond_ceiling(Utc::now()),
        }
    }

    /// Full display name, `"{first} {last}"`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks if the user is a seller
    pub fn is_seller(&self) -> bool {
        matches!(self.role, UserRole::Seller)
    }
}
