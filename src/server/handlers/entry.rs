// src/server/handlers/entry.rs
//! Cookbook entry handler

use crate::server::handlers::ApiResult;
use crate::server::ServerState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Add an ingredient or recipe to the cookbook
///
/// POST /entry
pub async fn create_entry(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(candidate) = body?;
    let name = candidate
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();

    match state.cookbook.add_entry(&candidate) {
        Ok(()) => {
            info!("Added entry {}", name);
            Ok(Json(Value::Object(Default::default())))
        }
        Err(e) => {
            debug!("Rejected entry: {}", e);
            Err(e.into())
        }
    }
}
