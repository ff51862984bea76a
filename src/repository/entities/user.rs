//! User record as persisted in the user collection.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A single user document.
///
/// Known attributes are strongly typed; anything else the collection holds
/// for a document (fields added later through field-level updates) is kept
/// in the flattened [`extra`](User::extra) map, since the store accepts and
/// persists fields outside the declared shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-generated identifier, `None` until the document is inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub blog: String,
    pub age: i32,
    pub location: String,
    /// Ad hoc fields not part of the declared shape.
    #[serde(flatten)]
    pub extra: Document,
}

impl User {
    /// Create a record that has not been stored yet.
    pub fn new(
        name: impl Into<String>,
        blog: impl Into<String>,
        age: i32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            blog: blog.into(),
            age,
            location: location.into(),
            extra: Document::new(),
        }
    }
}
