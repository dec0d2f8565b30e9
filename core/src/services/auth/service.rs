//! Main authentication service implementation

use std::sync::Arc;

use kc_shared::validation::mask_email;

use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

/// Registration input
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Defaults to [`UserRole::Buyer`] when absent
    pub role: Option<UserRole>,
    /// Only persisted for sellers
    pub id_number: Option<String>,
}

/// Authentication service for registration and login
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Password hasher
    password_service: PasswordService,
    /// Token issuer
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `password_service` - Hasher for stored credentials
    /// * `token_service` - Issuer for session tokens
    pub fn new(
        user_repository: Arc<U>,
        password_service: PasswordService,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_service,
            token_service,
        }
    }

    /// Register a new account and sign it in
    ///
    /// # Errors
    ///
    /// * `AuthError::UserAlreadyExists` - The email is already registered,
    ///   whether caught by the pre-check or by the store's unique constraint
    /// * `DomainError::Internal` - Hashing, storage or signing failed
    pub async fn register(&self, registration: Registration) -> DomainResult<AuthResponse> {
        let masked = mask_email(&registration.email);

        if self
            .user_repository
            .exists_by_email(&registration.email)
            .await?
        {
            tracing::info!(email = %masked, "Registration rejected, email already registered");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_service.hash(&registration.password).await?;
        let role = registration.role.unwrap_or_default();

        let user = User::new(
            registration.first_name,
            registration.last_name,
            registration.email,
            password_hash,
            role,
            registration.id_number,
        );

        let user = self.user_repository.create(user).await.map_err(|e| {
            if matches!(e, DomainError::Auth(AuthError::UserAlreadyExists)) {
                tracing::info!(email = %masked, "Registration lost race on duplicate email");
            }
            e
        })?;

        let token = self.token_service.issue(user.id, user.role)?;
        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthResponse::new(token, &user))
    }

    /// Authenticate with email and password
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - No account with this email
    /// * `AuthError::InvalidCredentials` - Wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::info!(email = %mask_email(email), "Login for unknown email");
                return Err(AuthError::UserNotFound.into());
            }
        };

        if !self
            .password_service
            .verify(password, &user.password_hash)
            .await?
        {
            tracing::warn!(user_id = %user.id, "Login with invalid credentials");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(user.id, user.role)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse::new(token, &user))
    }

    /// Look up a user by email
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.user_repository.find_by_email(email).await
    }
}
