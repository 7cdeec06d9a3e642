//! # HTTP Server Module
//!
//! The resource CRUD gateway: routes, handlers, error mapping, and the
//! Axum server that hosts them.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api` - List all items
//! - `POST /api/newBucketList` - Create an item
//! - `PUT /api/bucketlist/update/{id}` - Overwrite an item
//! - `PUT /api/bucketlist/completed/{id}` - Mark an item completed
//! - `DELETE /api/bucketlist/delete/{id}` - Delete an item

pub mod errors;
pub mod item_routes;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use item_routes::{item_routes, ItemState};
pub use server::HttpServer;
