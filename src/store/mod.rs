//! Document store access
//!
//! The HTTP layer talks to the collection through the [`ItemStore`] trait
//! so a server can be constructed over the real MongoDB collection or an
//! in-memory substitute. The store is the single source of truth; there is
//! no caching and no retry on failure.

mod memory;
mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::model::BucketListItem;

pub use memory::MemoryItemStore;
pub use mongo::MongoItemStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying driver reported a failure
    #[error("{0}")]
    Backend(#[from] mongodb::error::Error),

    /// The store acknowledged an insert without a usable object id
    #[error("store returned a malformed identifier")]
    MalformedId,
}

/// Operations the gateway needs from the item collection.
///
/// Match-dependent operations return `true` when a document matched the
/// given id and `false` when nothing did; driver failures surface as
/// `StoreError`.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Fetch every item, in store-native order.
    async fn find_all(&self) -> StoreResult<Vec<BucketListItem>>;

    /// Insert a new item and return its store-assigned id.
    async fn insert(&self, item: &BucketListItem) -> StoreResult<ObjectId>;

    /// Overwrite the recognized fields of the matched document.
    async fn replace(&self, id: ObjectId, item: &BucketListItem) -> StoreResult<bool>;

    /// Flip the completed flag on the matched document, leaving all other
    /// fields untouched.
    async fn mark_completed(&self, id: ObjectId) -> StoreResult<bool>;

    /// Remove the matched document.
    async fn delete(&self, id: ObjectId) -> StoreResult<bool>;
}
