// src/server/routes.rs
//! Axum router configuration for the cookbook server

use crate::server::handlers::{entry, parse, summary};
use crate::server::ServerState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: Arc<ServerState>) -> Router {
    let enable_cors = state.config.enable_cors;

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Name normalization
        .route("/parse", post(parse::parse_name))
        // Catalog admission
        .route("/entry", post(entry::create_entry))
        // Recipe summaries
        .route("/summary", get(summary::get_summary))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        // CORS configuration - permissive
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Cookbook;
    use crate::server::ServerConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(ServerState::new(ServerConfig::default(), Cookbook::new()));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let config = ServerConfig {
            enable_cors: false,
            ..ServerConfig::default()
        };
        let app = create_router(Arc::new(ServerState::new(config, Cookbook::new())));

        let response = app
            .oneshot(Request::builder().uri("/recipes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
