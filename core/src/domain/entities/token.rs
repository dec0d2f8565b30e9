//! Token entities for JWT-based identity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRole;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Role of the user at issuance
    pub role: UserRole,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp, absent when tokens do not expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates claims for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `role` - The user's role
    /// * `lifetime` - Optional validity window; `None` leaves `exp` unset
    pub fn new(user_id: Uuid, role: UserRole, lifetime: Option<Duration>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: lifetime.map(|lifetime| {
                now.checked_add_signed(lifetime)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC)
                    .timestamp()
            }),
        }
    }

    /// Checks if the claims have expired; claims without `exp` never do
    pub fn is_expired(&self) -> bool {
        self.exp
            .map(|exp| Utc::now().timestamp() >= exp)
            .unwrap_or(false)
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Identity asserted by a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: UserRole,
}
