//! okserve Server - canned JSON endpoint
//!
//! This crate provides the HTTP backend:
//! - `/api/v1/users` answered with a fixed `{"result":"ok"}` payload
//! - Library-default 404 for every other path
//! - Listener bootstrap on `0.0.0.0:8080`

mod error;
mod routes;

use axum::{routing::any, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{Result, ServerError};
pub use routes::users::{UsersResponse, USERS_PATH};

/// Port the server listens on
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

/// Create the router with all routes
pub fn create_router() -> Router {
    Router::new()
        // Every method is accepted; the request itself is never inspected
        .route(USERS_PATH, any(routes::users::users_handler))
        .layer(TraceLayer::new_for_http())
}

/// Serve requests on an already bound listener until the process dies
pub async fn serve(listener: TcpListener) -> Result<()> {
    axum::serve(listener, create_router())
        .await
        .map_err(ServerError::Serve)
}

/// Bind the configured address and start the HTTP server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!("okserve listening on http://{}", config.addr);
    tracing::info!("Serving {} for any method", USERS_PATH);

    serve(listener).await
}
