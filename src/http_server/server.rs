//! # HTTP Server
//!
//! Router assembly and serving for the bucket list API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::item_routes::{health_routes, item_routes, ItemState};
use crate::config::Config;
use crate::store::ItemStore;

/// HTTP server for the bucket list API
pub struct HttpServer {
    config: Config,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store handle
    pub fn new(config: Config, store: Arc<dyn ItemStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(config: &Config, store: Arc<dyn ItemStore>) -> Router {
        let state = Arc::new(ItemState::new(store));

        // One configured origin, fixed methods and headers
        let origins: Vec<HeaderValue> = [config.cors_origin.as_str()]
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT]);

        Router::new()
            .merge(health_routes())
            .merge(item_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid listen address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        tracing::info!(%addr, "starting bucket list HTTP server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
