//! Public API trait for session stores.
//!
//! The issuer consumes a store only through this trait; the durable store
//! behind it (database, external auth provider, in-memory plugin) is an
//! external collaborator.

use async_trait::async_trait;

use crate::error::SessionStoreError;
use crate::models::{SessionWithUser, SignInRequest};

#[async_trait]
pub trait SessionStoreClient: Send + Sync {
    /// Resolve the session named by the raw `Cookie` header.
    ///
    /// Returns `Ok(None)` for an empty header, an unknown or expired session,
    /// or a session whose user no longer exists.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing store cannot be reached
    /// - `Internal` for unexpected errors
    async fn get_session(
        &self,
        cookie_header: &str,
    ) -> Result<Option<SessionWithUser>, SessionStoreError>;

    /// Authenticate `request` and open a new session.
    ///
    /// Returns `Ok(None)` when the credentials are not accepted.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing store cannot be reached
    /// - `Internal` for unexpected errors
    async fn create_session(
        &self,
        request: &SignInRequest,
    ) -> Result<Option<SessionWithUser>, SessionStoreError>;

    /// Revoke the session named by the raw `Cookie` header, if any.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing store cannot be reached
    /// - `Internal` for unexpected errors
    async fn revoke_session(&self, cookie_header: &str) -> Result<(), SessionStoreError>;

    /// Name of the cookie carrying the session token.
    fn cookie_name(&self) -> &str;
}
