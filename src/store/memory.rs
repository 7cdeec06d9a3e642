//! In-memory item store
//!
//! Backs the integration tests through the same [`ItemStore`] seam the
//! MongoDB store implements. Not used by the serving path.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{ItemStore, StoreResult};
use crate::model::BucketListItem;

/// Item store over a locked vector, preserving insertion order.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<BucketListItem>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find_all(&self) -> StoreResult<Vec<BucketListItem>> {
        let items = self.items.read().unwrap();
        Ok(items.clone())
    }

    async fn insert(&self, item: &BucketListItem) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        let mut stored = item.clone();
        stored.id = Some(id);
        self.items.write().unwrap().push(stored);
        Ok(id)
    }

    async fn replace(&self, id: ObjectId, item: &BucketListItem) -> StoreResult<bool> {
        let mut items = self.items.write().unwrap();
        match items.iter_mut().find(|i| i.id == Some(id)) {
            Some(existing) => {
                existing.completed = item.completed;
                existing.desc = item.desc.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_completed(&self, id: ObjectId) -> StoreResult<bool> {
        let mut items = self.items.write().unwrap();
        match items.iter_mut().find(|i| i.id == Some(id)) {
            Some(existing) => {
                existing.completed = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<bool> {
        let mut items = self.items.write().unwrap();
        let before = items.len();
        items.retain(|i| i.id != Some(id));
        Ok(items.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let store = MemoryItemStore::new();
        let a = store
            .insert(&BucketListItem::new("first", false))
            .await
            .unwrap();
        let b = store
            .insert(&BucketListItem::new("second", false))
            .await
            .unwrap();
        assert_ne!(a, b);

        let items = store.find_all().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, Some(a));
    }

    #[tokio::test]
    async fn test_match_outcomes() {
        let store = MemoryItemStore::new();
        let id = store
            .insert(&BucketListItem::new("hike", false))
            .await
            .unwrap();

        assert!(store.mark_completed(id).await.unwrap());
        assert!(store.find_all().await.unwrap()[0].completed);

        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert!(!store.mark_completed(ObjectId::new()).await.unwrap());
    }
}
