//! Persisted document model

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A single bucket list item as stored in the collection.
///
/// `_id` is assigned by the store on insert and is absent on documents that
/// have not been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketListItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub desc: String,
}

impl BucketListItem {
    /// A not-yet-persisted item with the given description.
    pub fn new(desc: impl Into<String>, completed: bool) -> Self {
        Self {
            id: None,
            completed,
            desc: desc.into(),
        }
    }
}
