//! Session resolution for verified mode.

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use http::{Method, Request, StatusCode, Uri, header};
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::{Client, connect::HttpConnector};
use hyper_util::rt::TokioExecutor;
use session_issuer_sdk::{SessionUser, SessionWithUser};

use crate::error::{EdgeGateError, ResolveError};

/// Looks up the session named by a request's cookies.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// `Ok(None)` when the cookies name no live session.
    ///
    /// # Errors
    ///
    /// Any [`ResolveError`] when the lookup itself fails.
    async fn resolve(&self, cookie_header: &str) -> Result<Option<SessionUser>, ResolveError>;
}

/// Resolver calling the session issuer's `get-session` endpoint over HTTP.
pub struct IssuerSessionResolver {
    client: Client<HttpConnector, Empty<Bytes>>,
    endpoint: Uri,
    timeout: Duration,
}

impl IssuerSessionResolver {
    pub const GET_SESSION_PATH: &'static str = "/api/auth/get-session";

    /// # Errors
    ///
    /// [`EdgeGateError::InvalidIssuerUrl`] if `issuer_url` does not form a valid URI.
    pub fn new(issuer_url: &str, timeout: Duration) -> Result<Self, EdgeGateError> {
        let raw = format!(
            "{}{}",
            issuer_url.trim_end_matches('/'),
            Self::GET_SESSION_PATH
        );
        let endpoint: Uri = raw.parse().map_err(|e: http::uri::InvalidUri| {
            EdgeGateError::InvalidIssuerUrl {
                url: issuer_url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        if endpoint.scheme().is_none() || endpoint.authority().is_none() {
            return Err(EdgeGateError::InvalidIssuerUrl {
                url: issuer_url.to_owned(),
                reason: "scheme and host are required".to_owned(),
            });
        }

        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
            endpoint,
            timeout,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    async fn fetch(&self, cookie_header: &str) -> Result<Option<SessionUser>, ResolveError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(self.endpoint.clone())
            .header(header::COOKIE, cookie_header)
            .header(header::ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ResolveError::Status(status.as_u16()));
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?
            .to_bytes();

        let found: Option<SessionWithUser> =
            serde_json::from_slice(&body).map_err(|e| ResolveError::Decode(e.to_string()))?;
        Ok(found.map(|s| s.user))
    }
}

#[async_trait]
impl SessionResolver for IssuerSessionResolver {
    async fn resolve(&self, cookie_header: &str) -> Result<Option<SessionUser>, ResolveError> {
        let limit_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        tokio::time::timeout(self.timeout, self.fetch(cookie_header))
            .await
            .map_err(|_| ResolveError::Timeout(limit_ms))?
    }
}
