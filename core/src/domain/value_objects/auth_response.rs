//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{User, UserRole};

/// Public view of a user, safe to return to clients
///
/// Carries no password hash and no identity document number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,

    /// `"{first} {last}"`
    pub name: String,

    pub email: String,

    pub role: UserRole,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.display_name(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Authentication response containing the session token and user profile
///
/// Returned after a successful registration or login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT for API authentication
    pub token: String,

    pub user: UserProfile,
}

impl AuthResponse {
    /// Creates an authentication response for a user
    ///
    /// # Arguments
    ///
    /// * `token` - Signed token issued for the user
    /// * `user` - The authenticated user
    pub fn new(token: String, user: &User) -> Self {
        Self {
            token,
            user: UserProfile::from(user),
        }
    }
}
