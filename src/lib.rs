//! bucketlist - a minimal bucket list CRUD service over MongoDB
//!
//! Accepts JSON over HTTP, validates minimally, issues one document-store
//! operation per request, and maps the outcome to an HTTP response.

pub mod boot;
pub mod config;
pub mod http_server;
pub mod model;
pub mod store;
