// src/server/handlers/summary.rs
//! Recipe summary handler

use crate::catalog::render;
use crate::server::handlers::{ApiError, ApiResult};
use crate::server::ServerState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Query parameters for a summary
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// Summarize a recipe
///
/// GET /summary?name=<recipe>
pub async fn get_summary(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(query) = query?;
    let name = query
        .name
        .ok_or_else(|| ApiError::bad_request("missing 'name' query parameter"))?;

    let summary = state
        .cookbook
        .summarize(&name)
        .inspect_err(|e| debug!("Summary of '{}' failed: {}", name, e))?;

    Ok(Json(render(&summary)))
}
