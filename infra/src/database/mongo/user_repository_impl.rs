//! MongoDB implementation of the UserRepository trait.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;

use kc_core::domain::entities::User;
use kc_core::errors::{AuthError, DomainError};
use kc_core::repositories::UserRepository;

use super::documents::UserDocument;
use super::is_duplicate_key;
use crate::database::connection::{MongoDatabase, USERS_COLLECTION};
use crate::InfrastructureError;

/// MongoDB implementation of UserRepository
///
/// Email uniqueness is enforced by the unique index created in
/// [`MongoDatabase::ensure_indexes`].
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a repository over the `users` collection
    pub fn new(database: &MongoDatabase) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }

    async fn find_one_by(
        &self,
        filter: mongodb::bson::Document,
    ) -> Result<Option<User>, DomainError> {
        let found = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(InfrastructureError::from)?;

        match found {
            Some(document) => Ok(Some(User::try_from(document)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one_by(doc! { "email": email }).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let document = UserDocument::from(&user);

        match self.collection.insert_one(&document, None).await {
            Ok(_) => {
                tracing::debug!(user_id = %user.id, "User document inserted");
                Ok(user)
            }
            Err(e) if is_duplicate_key(&e) => Err(AuthError::UserAlreadyExists.into()),
            Err(e) => {
                tracing::error!("Failed to insert user: {}", e);
                Err(InfrastructureError::from(e).into())
            }
        }
    }
}
