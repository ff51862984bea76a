//! Database connection and initialization.

use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database as MongoDatabase};

use crate::config::{StoreConfig, DATABASE_NAME, USERS_COLLECTION};
use crate::error::StoreResult;
use crate::repository::User;

/// Database wrapper for connection management.
///
/// Connection setup happens once here; the handle is cheap to clone and the
/// driver pools connections internally, so one wrapper serves any number of
/// concurrent callers.
#[derive(Clone)]
pub struct Database {
    database: MongoDatabase,
}

impl Database {
    /// Initialize the client and resolve the `blog` database.
    ///
    /// The configured server selection timeout replaces the driver default,
    /// so operations against an unreachable deployment fail after
    /// `config.server_selection_timeout` instead of the stock 30 seconds.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.connection_string).await?;
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options)?;
        let database = client.database(DATABASE_NAME);
        tracing::info!(database = DATABASE_NAME, "database client initialized");

        Ok(Self { database })
    }

    /// Get a reference to the underlying database handle.
    pub fn database(&self) -> &MongoDatabase {
        &self.database
    }

    /// Get a typed handle to the user collection.
    pub fn users(&self) -> Collection<User> {
        self.database.collection(USERS_COLLECTION)
    }
}
