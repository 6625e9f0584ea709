//! Error types for session stores.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The backing store cannot be reached.
    #[error("session store unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
