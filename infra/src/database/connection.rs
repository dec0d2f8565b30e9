//! MongoDB connection management
//!
//! Builds a pooled client from [`DatabaseConfig`]. The driver connects
//! lazily, so constructing a client only fails on a malformed URI; use
//! [`MongoDatabase::ping`] to find out whether the server is reachable.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};

use kc_shared::config::database::DEFAULT_DATABASE_NAME;
use kc_shared::DatabaseConfig;

use crate::InfrastructureError;

pub const USERS_COLLECTION: &str = "users";
pub const LISTINGS_COLLECTION: &str = "listings";

/// Handle to the application database
///
/// Cheap to clone; clones share the driver's connection pool, which the
/// database handle keeps alive.
#[derive(Clone, Debug)]
pub struct MongoDatabase {
    database: Database,
}

impl MongoDatabase {
    /// Create a client for the configured deployment
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Database handle or error
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Creating MongoDB client with max_pool_size: {}",
            config.max_pool_size
        );

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| InfrastructureError::Config(format!("Invalid MongoDB URI: {}", e)))?;

        options.app_name = Some("kaycribs-api".to_string());
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout));
        options.server_selection_timeout = Some(Duration::from_secs(config.server_selection_timeout));
        options.retry_reads = Some(config.retry_reads);
        options.retry_writes = Some(config.retry_writes);

        let database_name = config
            .database
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&database_name);

        tracing::info!("MongoDB client created for database '{}'", database_name);

        Ok(Self { database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn name(&self) -> &str {
        self.database.name()
    }

    /// Typed handle to a collection
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection::<T>(name)
    }

    /// Round-trip a `ping` command to verify the server is reachable
    pub async fn ping(&self) -> Result<(), InfrastructureError> {
        tracing::debug!("Performing database health check");

        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::debug!("Database health check passed");
        Ok(())
    }

    /// Create the indexes the repositories rely on
    ///
    /// The unique index on `users.email` settles concurrent registrations
    /// with the same email.
    pub async fn ensure_indexes(&self) -> Result<(), InfrastructureError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.database
            .collection::<mongodb::bson::Document>(USERS_COLLECTION)
            .create_index(email_index, None)
            .await?;

        let recency_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1, "_id": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.database
            .collection::<mongodb::bson::Document>(LISTINGS_COLLECTION)
            .create_index(recency_index, None)
            .await?;

        tracing::info!("Database indexes ensured");
        Ok(())
    }
}
