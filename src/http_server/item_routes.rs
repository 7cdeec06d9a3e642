//! Bucket List HTTP Routes
//!
//! The five CRUD endpoints plus the health check. Each handler performs at
//! most one store operation and maps the outcome straight to a response;
//! there is no cross-request state.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use crate::model::BucketListItem;
use crate::store::ItemStore;

// ==================
// Shared State
// ==================

/// Gateway state shared across handlers
pub struct ItemState {
    pub store: Arc<dyn ItemStore>,
}

impl ItemState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

/// Wire shape of an item: `_id` travels as a hex string and is omitted
/// until the store has assigned one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub desc: String,
}

impl From<BucketListItem> for ItemPayload {
    fn from(item: BucketListItem) -> Self {
        Self {
            id: item.id.map(|oid| oid.to_hex()),
            completed: item.completed,
            desc: item.desc,
        }
    }
}

/// Generic success acknowledgment
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ==================
// Routes
// ==================

/// Create the bucket list routes
pub fn item_routes(state: Arc<ItemState>) -> Router {
    Router::new()
        .route("/api", get(list_items_handler))
        .route("/api/newBucketList", post(create_item_handler))
        .route("/api/bucketlist/update/{id}", put(update_item_handler))
        .route("/api/bucketlist/completed/{id}", put(complete_item_handler))
        .route("/api/bucketlist/delete/{id}", delete(delete_item_handler))
        .with_state(state)
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

async fn list_items_handler(
    State(state): State<Arc<ItemState>>,
) -> ApiResult<Json<Vec<ItemPayload>>> {
    let items = state.store.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "failed to fetch bucket lists");
        ApiError::Internal("Failed to fetch bucket lists".to_string())
    })?;

    Ok(Json(items.into_iter().map(ItemPayload::from).collect()))
}

async fn create_item_handler(
    State(state): State<Arc<ItemState>>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ItemPayload>)> {
    let Json(mut payload) = payload.map_err(|_| ApiError::InvalidInput)?;

    if payload.desc.is_empty() {
        return Err(ApiError::EmptyDescription);
    }

    let item = BucketListItem::new(payload.desc.clone(), payload.completed);
    let id = state.store.insert(&item).await.map_err(|e| {
        tracing::error!(error = %e, "failed to create bucket list");
        ApiError::Internal("Failed to create bucket list".to_string())
    })?;

    payload.id = Some(id.to_hex());
    Ok((StatusCode::CREATED, Json(payload)))
}

async fn update_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> ApiResult<Json<ItemPayload>> {
    let object_id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;
    let Json(payload) = payload.map_err(|_| ApiError::InvalidInput)?;

    let item = BucketListItem::new(payload.desc.clone(), payload.completed);
    // A write failure is reported as not-found, same as the no-match case.
    let matched = state
        .store
        .replace(object_id, &item)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, %id, "update failed");
            ApiError::NotFound
        })?;

    if !matched {
        return Err(ApiError::NotFound);
    }

    // Echo the submitted payload; the stored document is not re-fetched.
    Ok(Json(payload))
}

async fn complete_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    let object_id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;

    let matched = state
        .store
        .mark_completed(object_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, %id, "completion update failed");
            ApiError::WriteFailed(e.to_string())
        })?;

    if !matched {
        return Err(ApiError::NotFound);
    }

    Ok(Json(SuccessResponse {
        success: "Bucket list marked as completed".to_string(),
    }))
}

async fn delete_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    let object_id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;

    let deleted = state.store.delete(object_id).await.map_err(|e| {
        tracing::error!(error = %e, %id, "delete failed");
        ApiError::NotFound
    })?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(SuccessResponse {
        success: "Bucket list deleted successfully".to_string(),
    }))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_from_persisted_item() {
        let oid = ObjectId::new();
        let item = BucketListItem {
            id: Some(oid),
            completed: true,
            desc: "skydive".to_string(),
        };

        let payload = ItemPayload::from(item);
        assert_eq!(payload.id.as_deref(), Some(oid.to_hex().as_str()));
        assert!(payload.completed);
        assert_eq!(payload.desc, "skydive");
    }

    #[test]
    fn test_payload_omits_unset_id() {
        let payload = ItemPayload::from(BucketListItem::new("run", false));
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_payload_parses_partial_body() {
        let payload: ItemPayload = serde_json::from_str(r#"{"desc":"buy milk"}"#).unwrap();
        assert!(payload.id.is_none());
        assert!(!payload.completed);
        assert_eq!(payload.desc, "buy milk");
    }
}
