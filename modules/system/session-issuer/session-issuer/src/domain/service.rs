//! Session issuer service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use folio_auth::{AuthConfig, CredentialSigner, CredentialSubject};
use session_issuer_sdk::{Session, SessionStoreClient, SessionWithUser, SignInRequest};

use super::DomainError;
use crate::config::SessionIssuerConfig;

/// Bridges requests to the session store and mints credentials.
///
/// Holds no per-request state: every call is a store round trip plus pure
/// computation.
pub struct Service {
    store: Arc<dyn SessionStoreClient>,
    signer: CredentialSigner,
    log_lookup_failures: bool,
    secure_cookies: bool,
}

impl Service {
    #[must_use]
    pub fn new(
        cfg: &SessionIssuerConfig,
        auth: &AuthConfig,
        store: Arc<dyn SessionStoreClient>,
    ) -> Self {
        Self {
            store,
            signer: CredentialSigner::new(auth),
            log_lookup_failures: !cfg.environment.is_production(),
            secure_cookies: cfg.secure_cookies,
        }
    }

    /// Current session for `cookie_header`, or `None` for anonymous callers.
    ///
    /// Store faults are swallowed (and logged outside production): a failed
    /// lookup is indistinguishable from an anonymous visitor.
    pub async fn get_session(&self, cookie_header: &str) -> Option<SessionWithUser> {
        match self.store.get_session(cookie_header).await {
            Ok(found) => found,
            Err(e) => {
                if self.log_lookup_failures {
                    tracing::warn!(error = %e, "session lookup failed; treating caller as anonymous");
                }
                None
            }
        }
    }

    /// Authenticate and open a session.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidCredentials`] if the store refuses the credentials
    /// - [`DomainError::StoreUnavailable`] / [`DomainError::Internal`] on store faults
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SessionWithUser, DomainError> {
        let created = self.store.create_session(request).await?;
        let Some(created) = created else {
            tracing::debug!(email = %request.email, "sign-in refused");
            return Err(DomainError::InvalidCredentials);
        };
        tracing::info!(user_id = %created.user.id, session_id = %created.session.id, "session opened");
        Ok(created)
    }

    /// Revoke the caller's session. Store faults are logged and ignored.
    pub async fn sign_out(&self, cookie_header: &str) {
        if let Err(e) = self.store.revoke_session(cookie_header).await {
            tracing::warn!(error = %e, "session revocation failed");
        }
    }

    /// Mint a credential for the user of the caller's session, as of `now`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NoSession`] if the caller has no live session
    /// - [`DomainError::SigningUnavailable`] if no signing secret is configured
    /// - [`DomainError::Internal`] if encoding fails
    pub async fn mint_credential(
        &self,
        cookie_header: &str,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let current = self
            .get_session(cookie_header)
            .await
            .ok_or(DomainError::NoSession)?;

        let user = &current.user;
        let token = self.signer.sign(
            CredentialSubject {
                id: &user.id,
                email: &user.email,
                name: user.name.as_deref(),
                role: user.role,
            },
            now.timestamp(),
        )?;
        tracing::debug!(user_id = %user.id, "credential minted");
        Ok(token)
    }

    /// `Set-Cookie` value carrying `session`, valid until it expires.
    #[must_use]
    pub fn session_cookie(&self, session: &Session, now: DateTime<Utc>) -> String {
        let max_age = (session.expires_at - now).num_seconds().max(0);
        self.cookie(&session.token, max_age)
    }

    /// `Set-Cookie` value that deletes the session cookie.
    #[must_use]
    pub fn cleared_cookie(&self) -> String {
        self.cookie("", 0)
    }

    fn cookie(&self, value: &str, max_age: i64) -> String {
        let secure = if self.secure_cookies { "; Secure" } else { "" };
        format!(
            "{}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}{secure}",
            self.store.cookie_name()
        )
    }
}
