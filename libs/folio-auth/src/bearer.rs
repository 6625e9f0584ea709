use axum::http::{HeaderMap, header};

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// Any other scheme, a missing header, a non-UTF-8 value or an empty token
/// yields `None`.
#[must_use]
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_bearer_value)
}

/// Return the exact substring after `"Bearer "`.
#[must_use]
pub fn parse_bearer_value(value: &str) -> Option<&str> {
    value.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}
