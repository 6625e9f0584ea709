//! Domain errors for the session issuer.

use folio_auth::SignError;
use session_issuer_sdk::SessionStoreError;

#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("malformed request: {0}")]
    InvalidRequest(String),

    #[error("no active session")]
    NoSession,

    #[error("credential signing unavailable: {0}")]
    SigningUnavailable(String),

    #[error("session store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SessionStoreError> for DomainError {
    fn from(e: SessionStoreError) -> Self {
        match e {
            SessionStoreError::Unavailable(msg) => Self::StoreUnavailable(msg),
            SessionStoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<SignError> for DomainError {
    fn from(e: SignError) -> Self {
        match e {
            SignError::MissingSecret => Self::SigningUnavailable(e.to_string()),
            SignError::Encode(err) => Self::Internal(err.to_string()),
        }
    }
}
