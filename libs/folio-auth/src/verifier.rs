//! Stateless credential verification for the resource server.

use axum::http::HeaderMap;
use folio_security::AuthenticatedUser;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::bearer::extract_bearer_token;
use crate::claims::Credential;
use crate::config::AuthConfig;

/// Validates signed credentials against the shared secret.
///
/// Holds only immutable key material and expectations, so a single instance
/// can be shared behind an `Arc` by any number of concurrent requests.
///
/// Checks run in a fixed order: signature, issuer, audience, time window.
/// Every failure collapses into `None`; the reason is logged at `debug` level
/// and never returned to the caller.
pub struct CredentialVerifier {
    key: Option<DecodingKey>,
    validation: Validation,
}

impl CredentialVerifier {
    #[must_use]
    pub fn new(cfg: &AuthConfig) -> Self {
        let key = cfg.secret_bytes().map(DecodingKey::from_secret);
        if key.is_none() {
            tracing::error!("auth.signing_secret is not configured; all credentials will be rejected");
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[cfg.issuer.as_str()]);
        validation.set_audience(&[cfg.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = 0;
        // the [iat, exp) window is checked against an explicit clock below
        validation.validate_exp = false;

        Self { key, validation }
    }

    /// Validate `token` against the current wall clock.
    #[must_use]
    pub fn validate(&self, token: &str) -> Option<Credential> {
        self.validate_at(token, chrono::Utc::now().timestamp())
    }

    /// Validate `token` as of `now` (unix seconds).
    #[must_use]
    pub fn validate_at(&self, token: &str, now: i64) -> Option<Credential> {
        let Some(key) = &self.key else {
            tracing::error!("rejecting credential: auth.signing_secret is not configured");
            return None;
        };

        let claims = match jsonwebtoken::decode::<Credential>(token, key, &self.validation) {
            Ok(data) => data.claims,
            Err(err) => {
                tracing::debug!(error = %err, "credential rejected");
                return None;
            }
        };

        if !claims.is_within_window(now) {
            tracing::debug!(iat = claims.iat, exp = claims.exp, now, "credential outside validity window");
            return None;
        }

        Some(claims)
    }

    /// Bearer extraction, validation and the `ADMIN` role check, as of `now`.
    #[must_use]
    pub fn require_admin_at(&self, headers: &HeaderMap, now: i64) -> Option<AuthenticatedUser> {
        let token = extract_bearer_token(headers)?;
        let claims = self.validate_at(token, now)?;
        if !claims.role.is_admin() {
            tracing::debug!(subject = %claims.sub, role = %claims.role, "admin role required");
            return None;
        }
        Some(claims.to_user())
    }

    /// [`require_admin_at`](Self::require_admin_at) against the wall clock.
    #[must_use]
    pub fn require_admin(&self, headers: &HeaderMap) -> Option<AuthenticatedUser> {
        self.require_admin_at(headers, chrono::Utc::now().timestamp())
    }
}
