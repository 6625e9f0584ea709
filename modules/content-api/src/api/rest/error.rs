use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::error::DomainError;

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            DomainError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "Not Found" })),
            DomainError::Validation { .. } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Bad Request", "detail": self.to_string() }),
            ),
            DomainError::Internal(msg) => {
                tracing::error!(error = %msg, "content api request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
