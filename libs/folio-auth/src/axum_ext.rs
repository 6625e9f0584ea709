//! Axum extractors for privileged handlers

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use folio_security::AuthenticatedUser;

use crate::{errors::AuthError, verifier::CredentialVerifier};

/// Extractor that admits only callers presenting a valid `ADMIN` credential.
///
/// Reads the `Arc<CredentialVerifier>` installed with
/// `router.layer(Extension(verifier))`. Because it is a parts extractor it runs
/// before any body extractor, so a rejected request never reaches the handler
/// body or the data store.
///
/// ```ignore
/// async fn create(RequireAdmin(admin): RequireAdmin, Json(body): Json<NewThing>) { .. }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let verifier = parts
            .extensions
            .get::<Arc<CredentialVerifier>>()
            .ok_or(AuthError::VerifierMissing)?;

        verifier
            .require_admin(&parts.headers)
            .map(RequireAdmin)
            .ok_or(AuthError::Unauthorized)
    }
}

/// Extractor yielding the caller's identity when a valid credential of any
/// role is presented, `None` otherwise. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<Arc<CredentialVerifier>>()
            .and_then(|verifier| {
                crate::bearer::extract_bearer_token(&parts.headers)
                    .and_then(|token| verifier.validate(token))
            })
            .map(|claims| claims.to_user());
        Ok(Self(user))
    }
}
