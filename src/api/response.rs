//! The `{success, data | message}` envelope shared by every resource handler

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::domain::DomainError;

pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(json!({ "success": true, "data": data }))).into_response()
}

pub fn success_with_message<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    (
        status,
        Json(json!({ "success": true, "message": message, "data": data })),
    )
        .into_response()
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": message.into() })),
    )
        .into_response()
}

/// Map a repository error onto the envelope. `not_found` is the resource-specific 404 text.
pub fn domain_failure(e: DomainError, not_found: impl Into<String>) -> Response {
    match e {
        DomainError::NotFound => failure(StatusCode::NOT_FOUND, not_found),
        DomainError::Conflict(msg) | DomainError::Validation(msg) => {
            failure(StatusCode::BAD_REQUEST, msg)
        }
        DomainError::Internal(_) => {
            tracing::error!("Repository failure: {}", e);
            failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Presence check for free-text fields: absent or empty counts as missing
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
