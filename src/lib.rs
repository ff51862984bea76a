//! Data-access layer for the `users` collection of the `blog` database.
//!
//! This crate wraps the MongoDB driver behind a small repository API so that
//! calling code can create, read, filter, update, and delete user records
//! without writing query documents by hand. Connection setup happens once
//! through [`Database::connect`]; the resulting handle is injected into
//! [`UserStore`], which implements the [`UserRepository`] trait.
//!
//! ```rust,no_run
//! use blog_users::{Database, StoreConfig, UserRepository, UserStore};
//!
//! # async fn example() -> blog_users::StoreResult<()> {
//! let config = StoreConfig::from_env();
//! let db = Database::connect(&config).await?;
//! let repo = UserStore::new(db.database());
//!
//! let users = repo.get_all_users().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod infra;
pub mod repository;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use infra::Database;
pub use repository::{User, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
