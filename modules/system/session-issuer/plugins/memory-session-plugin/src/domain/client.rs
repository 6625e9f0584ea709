//! Client implementation for the in-memory session store.
//!
//! Implements `SessionStoreClient` using the domain service.

use async_trait::async_trait;
use chrono::Utc;
use session_issuer_sdk::{SessionStoreClient, SessionStoreError, SessionWithUser, SignInRequest};

use super::service::Service;

#[async_trait]
impl SessionStoreClient for Service {
    async fn get_session(
        &self,
        cookie_header: &str,
    ) -> Result<Option<SessionWithUser>, SessionStoreError> {
        Ok(self.lookup_at(cookie_header, Utc::now()))
    }

    async fn create_session(
        &self,
        request: &SignInRequest,
    ) -> Result<Option<SessionWithUser>, SessionStoreError> {
        Ok(self.sign_in_at(request, Utc::now()))
    }

    async fn revoke_session(&self, cookie_header: &str) -> Result<(), SessionStoreError> {
        if self.revoke(cookie_header) {
            tracing::debug!("session revoked");
        }
        Ok(())
    }

    fn cookie_name(&self) -> &str {
        Service::cookie_name(self)
    }
}
