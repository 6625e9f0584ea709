use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use folio_auth::request_cookie_header;
use session_issuer_sdk::{SessionWithUser, SignInRequest};

use crate::api::rest::dto::{SignOutResponse, TokenResponse};
use crate::domain::error::DomainError;
use crate::domain::service::Service;

/// `GET|POST /api/auth/get-session`
///
/// Always `200`: the body is `null` for anonymous callers and for store
/// faults, `{user, session}` otherwise.
#[tracing::instrument(skip_all)]
pub async fn get_session(
    Extension(svc): Extension<Arc<Service>>,
    headers: HeaderMap,
) -> Json<Option<SessionWithUser>> {
    let cookies = request_cookie_header(&headers);
    Json(svc.get_session(&cookies).await)
}

/// `POST /api/auth/sign-in`
#[tracing::instrument(skip_all)]
pub async fn sign_in(
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Response, DomainError> {
    let Json(body) = body.map_err(|e| DomainError::InvalidRequest(e.body_text()))?;
    let created = svc.sign_in(&body).await?;
    let cookie = svc.session_cookie(&created.session, chrono::Utc::now());
    Ok(with_cookie(Json(created), &cookie))
}

/// `POST /api/auth/sign-out`
#[tracing::instrument(skip_all)]
pub async fn sign_out(Extension(svc): Extension<Arc<Service>>, headers: HeaderMap) -> Response {
    let cookies = request_cookie_header(&headers);
    svc.sign_out(&cookies).await;
    with_cookie(Json(SignOutResponse { success: true }), &svc.cleared_cookie())
}

/// `GET /api/auth/token`
#[tracing::instrument(skip_all)]
pub async fn issue_token(
    Extension(svc): Extension<Arc<Service>>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, DomainError> {
    let cookies = request_cookie_header(&headers);
    let token = svc.mint_credential(&cookies, chrono::Utc::now()).await?;
    Ok(Json(TokenResponse { token }))
}

fn with_cookie(body: impl IntoResponse, cookie: &str) -> Response {
    let mut response = body.into_response();
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::error!(error = %e, "session cookie is not a valid header value"),
    }
    response
}
