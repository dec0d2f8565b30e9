use serde::{Deserialize, Serialize};
use validator::Validate;

use kc_core::domain::entities::UserRole;
use kc_core::services::Registration;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Any non-empty string; strength is not enforced
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// "buyer" or "seller"; buyer when omitted
    #[serde(default)]
    pub role: Option<UserRole>,

    /// Identity document number, only kept for sellers
    #[serde(default)]
    pub id_number: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Registration {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
            role: request.role,
            id_number: request.id_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
