//! User repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database as MongoDatabase, IndexModel};

use super::entities::user::User;
use crate::config::USERS_COLLECTION;
use crate::error::StoreResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Driver faults propagate as errors from every operation except
/// [`check_connection`](UserRepository::check_connection); a missing record
/// is an ordinary return value, never an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether the database is reachable.
    ///
    /// Any failure (connectivity, timeout, authentication) is converted to
    /// `false`. Against an unreachable deployment this waits for the
    /// configured server selection timeout before giving up.
    async fn check_connection(&self) -> bool;

    /// Fetch every record in the collection, in store-defined order.
    async fn get_all_users(&self) -> StoreResult<Vec<User>>;

    /// Fetch records whose `field_name` equals `field_value`.
    ///
    /// An unknown field name or a value no record carries yields an empty vec.
    async fn get_users_by_field(&self, field_name: &str, field_value: &str)
        -> StoreResult<Vec<User>>;

    /// Fetch at most `limit` records after skipping the first `skip`.
    async fn get_users(&self, skip: u64, limit: i64) -> StoreResult<Vec<User>>;

    /// Insert a record; the store assigns the identifier if unset.
    async fn insert_user(&self, user: &User) -> StoreResult<()>;

    /// Remove the record with the given identifier.
    ///
    /// Returns `true` if exactly one record matched and was removed.
    async fn delete_user_by_id(&self, id: ObjectId) -> StoreResult<bool>;

    /// Remove every record in the collection, returning how many there were.
    async fn delete_all_users(&self) -> StoreResult<u64>;

    /// Set `field_name` to `field_value` on the record with the given identifier.
    ///
    /// The field need not be part of the declared record shape; the store
    /// persists arbitrary new fields. Returns `true` if at least one record
    /// was modified, `false` if no record has that identifier.
    async fn update_user(&self, id: ObjectId, field_name: &str, field_value: &str)
        -> StoreResult<bool>;

    /// Create an ascending index on the named field of the given collection.
    async fn create_index_on_collection(
        &self,
        collection: &Collection<Document>,
        field: &str,
    ) -> StoreResult<()>;
}

/// Concrete repository over the `users` collection.
pub struct UserStore {
    database: MongoDatabase,
    collection: Collection<User>,
}

impl UserStore {
    /// Create a repository over an already-configured database handle.
    pub fn new(database: &MongoDatabase) -> Self {
        Self {
            database: database.clone(),
            collection: database.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn check_connection(&self) -> bool {
        match self.database.list_collection_names(None).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("connectivity check failed: {err}");
                false
            }
        }
    }

    async fn get_all_users(&self) -> StoreResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get_users_by_field(
        &self,
        field_name: &str,
        field_value: &str,
    ) -> StoreResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! { field_name: field_value }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get_users(&self, skip: u64, limit: i64) -> StoreResult<Vec<User>> {
        let options = FindOptions::builder().skip(skip).limit(limit).build();
        let cursor = self.collection.find(doc! {}, options).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        self.collection.insert_one(user, None).await?;
        Ok(())
    }

    async fn delete_user_by_id(&self, id: ObjectId) -> StoreResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count != 0)
    }

    async fn delete_all_users(&self) -> StoreResult<u64> {
        let result = self.collection.delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }

    async fn update_user(
        &self,
        id: ObjectId,
        field_name: &str,
        field_value: &str,
    ) -> StoreResult<bool> {
        let update = doc! { "$set": { field_name: field_value } };
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update, None)
            .await?;
        Ok(result.modified_count != 0)
    }

    async fn create_index_on_collection(
        &self,
        collection: &Collection<Document>,
        field: &str,
    ) -> StoreResult<()> {
        let index = IndexModel::builder().keys(doc! { field: 1 }).build();
        collection.create_index(index, None).await?;
        Ok(())
    }
}
