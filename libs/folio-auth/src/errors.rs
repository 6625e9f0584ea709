use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Rejection produced by the auth extractors.
///
/// Every variant renders as the same `401 {"error":"Unauthorized"}` so callers
/// learn nothing about why a credential was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("credential verifier not configured on this router")]
    VerifierMissing,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if matches!(self, Self::VerifierMissing) {
            tracing::error!("RequireAdmin used without a CredentialVerifier extension");
        }
        unauthorized()
    }
}

/// The fixed `401 {"error":"Unauthorized"}` response.
#[must_use]
pub fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response()
}

/// Errors raised while minting a credential.
#[derive(Error, Debug)]
pub enum SignError {
    #[error("signing secret is not configured")]
    MissingSecret,

    #[error("failed to encode credential: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}
