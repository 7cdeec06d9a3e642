//! Startup sequence
//!
//! 1. Initialize tracing
//! 2. Load configuration from the environment
//! 3. Connect to the store and ping it
//! 4. Serve
//!
//! Any failure here is fatal; the process must not serve requests without
//! a verified store connection.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::http_server::HttpServer;
use crate::store::{MongoItemStore, StoreError};

/// Fatal startup errors
#[derive(Debug, Error)]
pub enum BootError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("store connection failed: {0}")]
    Store(#[from] StoreError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Boot the service and serve until the process is stopped.
pub async fn run() -> Result<(), BootError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bucketlist=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store = MongoItemStore::connect(&config.database_url).await?;
    tracing::info!("connected to document store");

    let server = HttpServer::new(config, Arc::new(store));
    server.start().await?;

    Ok(())
}
