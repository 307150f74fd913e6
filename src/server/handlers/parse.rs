// src/server/handlers/parse.rs
//! Name normalization handler

use crate::normalize::normalize;
use crate::server::handlers::{ApiError, ApiResult};
use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Response for a normalized name
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Normalize a handwritten recipe name
///
/// POST /parse
pub async fn parse_name(
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ParseResponse>> {
    let Json(body) = body?;
    let input = body
        .get("input")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::bad_request("'input' must be a string"))?;

    let msg = normalize(input).inspect_err(|e| debug!("Rejected name: {}", e))?;
    Ok(Json(ParseResponse { msg }))
}
