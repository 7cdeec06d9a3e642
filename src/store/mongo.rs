//! MongoDB-backed item store

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};

use super::{ItemStore, StoreError, StoreResult};
use crate::model::BucketListItem;

const DATABASE: &str = "BucketList";
const COLLECTION: &str = "bucketlists";

/// Item store backed by a MongoDB collection.
///
/// Holds one long-lived client; the driver pools connections internally, so
/// a single handle is shared across all requests.
pub struct MongoItemStore {
    collection: Collection<BucketListItem>,
}

impl MongoItemStore {
    /// Connect to the store and verify the connection with a ping.
    ///
    /// A ping failure here is a startup failure; the caller aborts the
    /// process rather than serving requests against a dead store.
    pub async fn connect(uri: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        client
            .database(DATABASE)
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok(Self {
            collection: client.database(DATABASE).collection(COLLECTION),
        })
    }
}

#[async_trait]
impl ItemStore for MongoItemStore {
    async fn find_all(&self) -> StoreResult<Vec<BucketListItem>> {
        let cursor = self.collection.find(doc! {}).await?;
        let items = cursor.try_collect().await?;
        Ok(items)
    }

    async fn insert(&self, item: &BucketListItem) -> StoreResult<ObjectId> {
        let result = self.collection.insert_one(item).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MalformedId)
    }

    async fn replace(&self, id: ObjectId, item: &BucketListItem) -> StoreResult<bool> {
        let update = doc! { "$set": { "completed": item.completed, "desc": &item.desc } };
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn mark_completed(&self, id: ObjectId) -> StoreResult<bool> {
        let update = doc! { "$set": { "completed": true } };
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
