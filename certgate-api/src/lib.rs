//! # Certgate API Server
//!
//! REST API for the certgate certification gateway.
//!
//! ## Endpoints
//!
//! - `POST /is-certified` - Look up the certification status of a public key
//! - `GET /health` - Service health and cache statistics
//!
//! ## Example
//!
//! ```rust,ignore
//! use certgate_api::{ApiConfig, ApiServer};
//!
//! let config = ApiConfig::from_env()?;
//! let server = ApiServer::new(config);
//! server.run(([0, 0, 0, 0], 4000)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod routes;
mod handlers;
mod state;
mod dto;
mod error;

pub use routes::create_router;
pub use state::{ApiConfig, AppState};
pub use error::ApiError;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// API server for certgate.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            state: Arc::new(AppState::new(config)),
        }
    }

    /// Creates the router with all routes configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("Certgate API server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
