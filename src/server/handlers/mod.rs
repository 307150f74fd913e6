// src/server/handlers/mod.rs
//! HTTP request handlers for the cookbook server

pub mod entry;
pub mod parse;
pub mod summary;

use crate::error::Error;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// RFC 7807 problem document
#[derive(Debug, Serialize)]
pub struct Problem {
    /// Error type URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable title
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Detailed description
    pub detail: String,
}

/// Error response wrapper for RFC 7807 format
#[derive(Debug)]
pub struct ApiError(Problem);

impl ApiError {
    pub fn new(kind: &str, title: &str, status: StatusCode, detail: &str) -> Self {
        ApiError(Problem {
            error_type: format!("urn:cookbook:error:{}", kind),
            title: title.to_string(),
            status: status.as_u16(),
            detail: detail.to_string(),
        })
    }

    /// Bad request error
    pub fn bad_request(detail: &str) -> Self {
        Self::new("bad_request", "Bad Request", StatusCode::BAD_REQUEST, detail)
    }

    pub fn problem(&self) -> &Problem {
        &self.0
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let title = match &err {
            Error::MalformedEntry(_) | Error::DuplicateName(_) | Error::Seed { .. } => {
                "Invalid entry"
            }
            Error::UnknownRecipe(_) => "Not a recipe",
            Error::DanglingReference { .. }
            | Error::CyclicDefinition { .. }
            | Error::DepthExceeded { .. }
            | Error::QuantityOverflow(_) => "Invalid recipe",
            Error::EmptyNormalizedName(_) => "Invalid name",
            Error::Io(_) | Error::Json(_) => {
                return Self::new(
                    err.kind(),
                    "Internal Error",
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &err.to_string(),
                );
            }
        };
        Self::new(err.kind(), title, StatusCode::BAD_REQUEST, &err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(&rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(&rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [("content-type", "application/problem+json")],
            Json(self.0),
        )
            .into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
