use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::error::DomainError;

/// Status and public message for a domain error.
///
/// Messages are fixed strings; the underlying cause is only logged.
#[must_use]
pub fn domain_error_status(err: &DomainError) -> (StatusCode, &'static str) {
    match err {
        DomainError::InvalidCredentials | DomainError::NoSession => {
            (StatusCode::UNAUTHORIZED, "Unauthorized")
        }
        DomainError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
        DomainError::SigningUnavailable(_) | DomainError::StoreUnavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
        }
        DomainError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let (status, message) = domain_error_status(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "session issuer request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
