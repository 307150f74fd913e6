// src/server/mod.rs
//! Cookbook HTTP server
//!
//! Thin transport over the catalog:
//! - `POST /parse` normalizes a handwritten recipe name
//! - `POST /entry` admits an ingredient or recipe
//! - `GET /summary?name=` flattens a recipe into ingredients and cook time
//!
//! Request bodies stay untyped JSON until the catalog validator has checked
//! them.

mod handlers;
mod routes;

pub use handlers::{ApiError, ApiResult, Problem};
pub use routes::create_router;

use crate::catalog::Cookbook;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Permissive CORS layer on all routes
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            enable_cors: true,
        }
    }
}

/// Shared server state
///
/// The cookbook carries its own lock, so the state itself is immutable.
#[derive(Debug)]
pub struct ServerState {
    pub config: ServerConfig,
    pub cookbook: Cookbook,
}

impl ServerState {
    pub fn new(config: ServerConfig, cookbook: Cookbook) -> Self {
        Self { config, cookbook }
    }
}

/// Start the cookbook server
pub async fn run_server(config: ServerConfig, cookbook: Cookbook) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);
    tracing::info!(
        "Cookbook: {} entries, summary depth limit {}",
        cookbook.len(),
        cookbook.max_depth()
    );

    let bind_addr = config.bind_addr;
    let state = Arc::new(ServerState::new(config, cookbook));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Running on: http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
