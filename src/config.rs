//! Service Configuration
//!
//! Configuration for the HTTP server and store connection, loaded from the
//! process environment. `PORT` and `DATABASE_URL` are required; missing or
//! malformed values abort startup.

use std::env;

use thiserror::Error;

/// Configuration errors. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is not set
    #[error("{0} is not set")]
    MissingVar(&'static str),

    /// PORT is set but is not a valid port number
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (required, from `PORT`)
    pub port: u16,

    /// MongoDB connection string (required, from `DATABASE_URL`)
    pub database_url: String,

    /// CORS allowed origin (default: "http://localhost:5173")
    pub cors_origin: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_cors_origin() -> String {
    // Vite dev server
    "http://localhost:5173".to_string()
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `PORT` and `DATABASE_URL` are required; `HOST` and `CORS_ORIGIN`
    /// fall back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_raw = env::var("PORT").map_err(|_| ConfigError::MissingVar("PORT"))?;
        let port: u16 = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw))?;

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let host = env::var("HOST").unwrap_or_else(|_| default_host());
        let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| default_cors_origin());

        Ok(Self {
            host,
            port,
            database_url,
            cors_origin,
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
